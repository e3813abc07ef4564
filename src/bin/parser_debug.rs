use lispy::{Engine, printer, render_error};
use std::env;

fn main() {
    let Some(source) = env::args().nth(1) else {
        eprintln!("usage: parser_debug <expression>");
        return;
    };
    let engine = Engine::default();

    let tree = match engine.parse_tree(&source) {
        Ok(tree) => tree,
        Err(e) => {
            render_error(&e);
            return;
        }
    };
    println!("Parse tree:\n{}", tree);

    if let Ok(expr) = engine.read(&source) {
        println!("Read:\n{:#?}\n\nPrinted:\n{}", expr, printer::format(&expr));
    }
}
