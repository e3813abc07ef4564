mod highlighter;
mod lexer;
mod validator;

use clap::Parser;
use lispy::{Engine, EngineOptions, EvalMode, ParseOptions, parser, render_error};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, Keybindings, Reedline, ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;

const HISTORY_CAPACITY: usize = 1000;

/// Lispy - a small S-expression calculator
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(about = "Evaluate Lispy expressions", long_about = None)]
struct Args {
    /// Print lines as read instead of evaluating them
    #[arg(long)]
    read_only: bool,

    /// Print the raw parse tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Maximum bracket nesting accepted in a line
    #[arg(long, default_value_t = parser::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not keep a history file
    #[arg(long)]
    no_history: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn add_newline_keybinding(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn history_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("lispy");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(dir = %dir.display(), error = %e, "cannot create history directory");
        return None;
    }
    Some(dir.join("history.txt"))
}

fn setup_reedline(history: Option<PathBuf>) -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    add_newline_keybinding(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_validator(Box::new(validator::BracketValidator))
        .with_edit_mode(edit_mode);

    if let Some(path) = history {
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => {
                tracing::debug!(path = %path.display(), "using history file");
                line_editor = line_editor.with_history(Box::new(history));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "history disabled");
            }
        }
    }

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("lispy".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn interpret_input(engine: &Engine, input: &str, debug_parse: bool) {
    if debug_parse {
        if let Ok(tree) = engine.parse_tree(input) {
            println!("=== Parse Tree ===");
            print!("{}", tree);
            println!();
        }
    }

    match engine.process_line(input) {
        Ok(output) => println!("{}", output),
        Err(e) => render_error(&e),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use LISPY_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("LISPY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(EngineOptions {
        parse: ParseOptions {
            max_depth: args.max_depth,
        },
        mode: if args.read_only {
            EvalMode::ReadOnly
        } else {
            EvalMode::Evaluate
        },
        ..EngineOptions::default()
    });

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        interpret_input(&engine, &expr, args.debug_parse);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        let history = if args.no_history {
            None
        } else {
            history_path()
        };
        let (mut line_editor, prompt) = setup_reedline(history);

        println!("Lispy v0.5");
        println!("Press Ctrl+C to Exit\n");

        loop {
            match line_editor.read_line(&prompt).into_diagnostic()? {
                Signal::Success(buffer) => {
                    interpret_input(&engine, &buffer, args.debug_parse);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            interpret_input(&engine, &line, args.debug_parse);
        }
    }

    Ok(())
}
