use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[regex(r"-?([0-9]*\.)?[0-9]+")]
    Number,

    #[regex(r"[+\-*/]")]
    Symbol,
}

/// Net count of open brackets in `buffer`, never below zero.
///
/// Characters the grammar does not know are ignored here; the parser
/// reports them once the line is submitted.
pub fn calculate_depth(buffer: &str) -> usize {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) | Ok(Token::LBrace) => depth += 1,
            Ok(Token::RParen) | Ok(Token::RBrace) => depth -= 1,
            Ok(_) | Err(_) => {}
        }
    }

    depth.max(0) as usize
}
