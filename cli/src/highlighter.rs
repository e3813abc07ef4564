use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

fn style_for(token: Result<Token, ()>) -> Style {
    match token {
        Ok(Token::Number) => Style::new().fg(Color::Cyan),
        Ok(Token::Symbol) => Style::new().fg(Color::Magenta),
        Ok(Token::LParen | Token::RParen) => Style::new().fg(Color::White),
        Ok(Token::LBrace | Token::RBrace) => Style::new().fg(Color::Yellow),
        Err(()) => Style::new().fg(Color::Red),
    }
}

/// Colours numbers, operators and brackets as they are typed.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let plain = Style::new();
        let mut curr_end = 0;

        for (token, span) in Token::lexer(line).spanned() {
            // Tail of a multi-byte character already emitted.
            if span.end <= curr_end {
                continue;
            }
            let start = span.start.max(curr_end);
            if start > curr_end {
                output.push((plain, line[curr_end..start].to_string()));
            }
            let mut end = span.end;
            while !line.is_char_boundary(end) {
                end += 1;
            }
            output.push((style_for(token), line[start..end].to_string()));
            curr_end = end;
        }
        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }

        output
    }
}
