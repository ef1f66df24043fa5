//! The tokenizer --- scans source text into a stream of typed lexemes.
//!
//! Comments are stripped before scanning: line comments run from `%` to the end of the line, and block comments from `/*` to the first `*/`.
//! A block comment may contain the line-comment character, it terminates only at `*/`.
//!
//! The lexical classes, in longest-match / priority order:
//!
//! 1. `QUOTED_ATOM` --- `'…'`, any characters except `'`
//! 2. `WILDCARD` --- the single character `_`
//! 3. `VARIABLE` --- starts with an uppercase letter or `_`, followed by alphanumerics or `_`
//! 4. `NOT` --- the bare word `not`
//! 5. `TRUE` --- the bare word `true`
//! 6. `ATOM` --- starts with a lowercase letter, followed by alphanumerics or `_`
//! 7. `INTEGER` --- `0`, or digits without a leading zero
//! 8. `IMPLICATION` --- `:-`
//! 9. Punctuation --- `,` `.` `(` `)` `[` `]` `|`
//! 10. Whitespace, discarded
//!
//! So `not` and `true` become keyword tokens rather than atoms, and `_` alone is a wildcard while `_X` is a variable.
//! A character run matching no class is a [TokenizeError](err::TokenizeError) carrying the remaining input from the offending character on.
//!
//! # Example
//!
//! ```rust
//! # use hornlog::builder::tokenizer::{tokenize, TokenKind};
//! let tokens = tokenize("not(deadly('Pain')).").unwrap();
//!
//! let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Not,
//!         TokenKind::LParen,
//!         TokenKind::Atom,
//!         TokenKind::LParen,
//!         TokenKind::QuotedAtom,
//!         TokenKind::RParen,
//!         TokenKind::RParen,
//!         TokenKind::Period,
//!     ]
//! );
//! ```

use crate::misc::log::targets::{self};
use crate::types::err::{self};

/// A kind of token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// `'…'`, any characters except a quote.
    QuotedAtom,

    /// The single character `_`.
    Wildcard,

    /// An uppercase letter or `_`, then alphanumerics or `_`.
    Variable,

    /// The keyword `not`.
    Not,

    /// The keyword `true`.
    True,

    /// A lowercase letter, then alphanumerics or `_`.
    Atom,

    /// A natural-number literal.
    Integer,

    /// `:-`
    Implication,

    /// `,`
    Comma,

    /// `.`
    Period,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `[`
    LBracket,

    /// `]`
    RBracket,

    /// `|`
    Pipe,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::QuotedAtom => "QUOTED_ATOM",
            Self::Wildcard => "WILDCARD",
            Self::Variable => "VARIABLE",
            Self::Not => "NOT",
            Self::True => "TRUE",
            Self::Atom => "ATOM",
            Self::Integer => "INTEGER",
            Self::Implication => "IMPLICATION",
            Self::Comma => "COMMA",
            Self::Period => "PERIOD",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Pipe => "PIPE",
        };
        write!(f, "{name}")
    }
}

/// A token: a kind paired with the lexeme scanned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The lexical class of the token.
    pub kind: TokenKind,

    /// The lexeme, as written. Quoted atoms keep their quotes.
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

/// The source with comments removed.
///
/// An unterminated block comment is left in place, to surface as a lexical error.
fn strip_comments(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut stripped = String::with_capacity(source.len());
    let mut index = 0;

    while index < chars.len() {
        match chars[index] {
            '%' => {
                while index < chars.len() && chars[index] != '\n' {
                    index += 1;
                }
            }

            '/' if index + 1 < chars.len() && chars[index + 1] == '*' => {
                let mut scan = index + 2;
                let mut closed = None;
                while scan + 1 < chars.len() {
                    if chars[scan] == '*' && chars[scan + 1] == '/' {
                        closed = Some(scan + 2);
                        break;
                    }
                    scan += 1;
                }

                match closed {
                    Some(past) => index = past,
                    None => {
                        stripped.push(chars[index]);
                        index += 1;
                    }
                }
            }

            character => {
                stripped.push(character);
                index += 1;
            }
        }
    }

    stripped
}

/// Scans source text into tokens, or reports the first unrecognised character run.
pub fn tokenize(source: &str) -> Result<Vec<Token>, err::TokenizeError> {
    let text = strip_comments(source);
    let chars: Vec<char> = text.chars().collect();

    let mut tokens = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        let character = chars[index];

        if character.is_whitespace() {
            index += 1;
            continue;
        }

        let token = match character {
            '\'' => {
                let mut scan = index + 1;
                while scan < chars.len() && chars[scan] != '\'' {
                    scan += 1;
                }
                if scan == chars.len() {
                    return Err(invalid_from(&chars, index));
                }
                let lexeme: String = chars[index..=scan].iter().collect();
                index = scan + 1;
                Token::new(TokenKind::QuotedAtom, lexeme)
            }

            'A'..='Z' | '_' => {
                let word = scan_word(&chars, &mut index);
                match word.as_str() {
                    "_" => Token::new(TokenKind::Wildcard, word),
                    _ => Token::new(TokenKind::Variable, word),
                }
            }

            'a'..='z' => {
                let word = scan_word(&chars, &mut index);
                match word.as_str() {
                    "not" => Token::new(TokenKind::Not, word),
                    "true" => Token::new(TokenKind::True, word),
                    _ => Token::new(TokenKind::Atom, word),
                }
            }

            // A natural number is `0` or digits without a leading zero, so a leading `0` is a token of its own.
            '0' => {
                index += 1;
                Token::new(TokenKind::Integer, "0")
            }

            '1'..='9' => {
                let mut scan = index;
                while scan < chars.len() && chars[scan].is_ascii_digit() {
                    scan += 1;
                }
                let lexeme: String = chars[index..scan].iter().collect();
                index = scan;
                Token::new(TokenKind::Integer, lexeme)
            }

            ':' => {
                if index + 1 < chars.len() && chars[index + 1] == '-' {
                    index += 2;
                    Token::new(TokenKind::Implication, ":-")
                } else {
                    return Err(invalid_from(&chars, index));
                }
            }

            ',' => single(TokenKind::Comma, character, &mut index),
            '.' => single(TokenKind::Period, character, &mut index),
            '(' => single(TokenKind::LParen, character, &mut index),
            ')' => single(TokenKind::RParen, character, &mut index),
            '[' => single(TokenKind::LBracket, character, &mut index),
            ']' => single(TokenKind::RBracket, character, &mut index),
            '|' => single(TokenKind::Pipe, character, &mut index),

            _ => return Err(invalid_from(&chars, index)),
        };

        log::trace!(target: targets::TOKENIZER, "{} {:?}", token.kind, token.text);
        tokens.push(token);
    }

    Ok(tokens)
}

/// A run of alphanumerics or `_`, starting at `index`, which is advanced past the run.
fn scan_word(chars: &[char], index: &mut usize) -> String {
    let start = *index;
    while *index < chars.len() && (chars[*index].is_ascii_alphanumeric() || chars[*index] == '_') {
        *index += 1;
    }
    chars[start..*index].iter().collect()
}

fn single(kind: TokenKind, character: char, index: &mut usize) -> Token {
    *index += 1;
    Token::new(kind, character.to_string())
}

fn invalid_from(chars: &[char], index: usize) -> err::TokenizeError {
    let rest: String = chars[index..].iter().collect();
    err::TokenizeError::InvalidSyntax(rest)
}
