//! Lexer (tokenizer) for the netlist language.

use crate::error::{OhmicError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the netlist language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (component name, node name)
    Identifier,
    /// A number, possibly with an SI suffix (`4.7k`)
    Number,
    /// A directive (starts with '.')
    Directive,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing netlist input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let line = self.line;
        let column = self.column;

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line,
                    column,
                });
            }
        };

        let (kind, text) = match ch {
            '\n' => {
                self.advance();
                (TokenKind::Newline, "\n".to_string())
            }
            '.' => {
                self.advance();
                let word = self.read_word();
                if word.starts_with(|c: char| c.is_ascii_digit()) {
                    // ".5" style number
                    let text = format!(".{}", word);
                    if parse_value(&text).is_none() {
                        return Err(OhmicError::lexer(line, column, format!("malformed number '{}'", text)));
                    }
                    (TokenKind::Number, text)
                } else if word.is_empty() {
                    return Err(OhmicError::lexer(line, column, "directive name expected after '.'"));
                } else {
                    (TokenKind::Directive, format!(".{}", word))
                }
            }
            _ if is_word_char(ch) || ch == '-' || ch == '+' => {
                let word = self.read_word();
                (classify_word(&word), word)
            }
            _ => {
                return Err(OhmicError::lexer(
                    line,
                    column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(Token {
            kind,
            text,
            line,
            column,
        })
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' || ch == ';' {
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            let sign_ok = match ch {
                '-' | '+' if text.is_empty() => true,
                // Exponent sign inside a number: 1e-3
                '-' | '+' if starts_numeric(&text) => text.ends_with(['e', 'E']),
                // Hyphenated identifiers: in-1, line-1
                '-' => !text.is_empty(),
                _ => false,
            };
            if is_word_char(ch) || sign_ok {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.' || ch == 'Ω'
}

fn starts_numeric(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
}

fn classify_word(word: &str) -> TokenKind {
    if starts_numeric(word) && parse_value(word).is_some() {
        TokenKind::Number
    } else {
        TokenKind::Identifier
    }
}

/// Parse a number string with optional SI suffix and optional trailing `Ω`.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim().trim_end_matches('Ω');
    if text.is_empty() {
        return None;
    }

    let last = text.chars().last()?;
    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => 1.0,
    };
    let num_str = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    // Reject "inf"/"nan" spellings that `f64::from_str` would otherwise accept
    if !num_str.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.')) {
        return None;
    }

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            out.push((tok.kind, tok.text));
        }
        out
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("4.7"), Some(4.7)));
        assert!(approx_eq(parse_value("2.2M"), Some(2_200_000.0)));
        assert!(approx_eq(parse_value("470m"), Some(0.47)));
        assert!(approx_eq(parse_value("1e3"), Some(1000.0)));
        assert!(approx_eq(parse_value("100Ω"), Some(100.0)));
        assert!(approx_eq(parse_value("1kΩ"), Some(1000.0)));
        assert!(approx_eq(parse_value(".5"), Some(0.5)));
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value(""), None);
    }

    #[test]
    fn test_lexer_resistor_line() {
        let toks = kinds("R1 in out 10k");
        assert_eq!(
            toks,
            vec![
                (TokenKind::Identifier, "R1".to_string()),
                (TokenKind::Identifier, "in".to_string()),
                (TokenKind::Identifier, "out".to_string()),
                (TokenKind::Number, "10k".to_string()),
            ]
        );
    }

    #[test]
    fn test_lexer_directive_and_comments() {
        let toks = kinds(".source A # the left terminal\n; whole-line comment\n");
        assert_eq!(toks[0], (TokenKind::Directive, ".source".to_string()));
        assert_eq!(toks[1], (TokenKind::Identifier, "A".to_string()));
        assert_eq!(toks[2].0, TokenKind::Newline);
        assert_eq!(toks[3].0, TokenKind::Newline);
        assert_eq!(toks.len(), 4);
    }

    #[test]
    fn test_lexer_numeric_node_and_negative_value() {
        let toks = kinds("R1 0 12 -5");
        assert_eq!(toks[1], (TokenKind::Number, "0".to_string()));
        assert_eq!(toks[2], (TokenKind::Number, "12".to_string()));
        assert_eq!(toks[3], (TokenKind::Number, "-5".to_string()));
    }

    #[test]
    fn test_lexer_hyphenated_names_and_exponents() {
        let toks = kinds("R1 in-1 line-1 1e-3 2-3");
        assert_eq!(toks[1], (TokenKind::Identifier, "in-1".to_string()));
        assert_eq!(toks[2], (TokenKind::Identifier, "line-1".to_string()));
        assert_eq!(toks[3], (TokenKind::Number, "1e-3".to_string()));
        assert_eq!(toks[4], (TokenKind::Number, "2".to_string()));
        assert_eq!(toks[5], (TokenKind::Number, "-3".to_string()));
    }

    #[test]
    fn test_lexer_tracks_position() {
        let mut lexer = Lexer::new("R1 A B 1\n  R2 B C 2");
        for _ in 0..5 {
            lexer.next_token().unwrap();
        }
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.text, "R2");
        assert_eq!(tok.line, 2);
        assert_eq!(tok.column, 3);
    }

    #[test]
    fn test_lexer_rejects_stray_character() {
        let mut lexer = Lexer::new("R1 A B 1 @");
        for _ in 0..4 {
            lexer.next_token().unwrap();
        }
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, OhmicError::LexerError { line: 1, column: 10, .. }));
    }
}
