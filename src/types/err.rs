/*!
Error types used in the library.

- All of these are fatal for the load or query which raised them.
- None of these cover the absence of a solution --- a query with no answers is reported as `false.` by an [Answer](crate::reports::Answer), not through an error.

Names of the error enums --- for the most part --- overlap with the module raising them.
As such, throughout the library `err::{self}` is often used to prefix use of the types with `err::`.

The [Display](std::fmt::Display) implementations produce the detail strings a frontend is expected to show, e.g. `No such predicate: ancestor\0`.
The surrounding envelope (`In query: …`, etc.) is added by a [Report](crate::reports::Report).
*/

use crate::builder::tokenizer::TokenKind;

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error while scanning source text into tokens.
    Tokenize(TokenizeError),

    /// An error while parsing a token stream.
    Parse(ParseError),

    /// An error during resolution.
    Resolution(ResolutionError),
}

/// Errors while scanning source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenizeError {
    /// A character run matching no lexical class.
    /// The string holds the remainder of the input, from the offending character on.
    InvalidSyntax(String),
}

impl From<TokenizeError> for ErrorKind {
    fn from(e: TokenizeError) -> Self {
        ErrorKind::Tokenize(e)
    }
}

/// Errors while parsing a token stream.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some token kind was required, and either a different kind or the end of the stream was found.
    Expected {
        /// The kind the grammar called for.
        expected: TokenKind,

        /// The kind found, or [None] at the end of the stream.
        found: Option<TokenKind>,
    },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// A goal literal whose functor heads no clause in the database.
    /// This is the mechanism which surfaces typos in queries.
    UnknownPredicate {
        /// The functor of the literal.
        name: String,

        /// The arity of the literal.
        arity: usize,
    },

    /// Negation as failure applied to a literal with unbound variables, when the context is configured to reject this.
    /// See [ground_negation](crate::config::Config::ground_negation).
    UngroundNegation(String),
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSyntax(rest) => write!(f, "Invalid syntax: {rest}"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected { expected, found } => match found {
                Some(kind) => write!(f, "Expected {expected}. Got {kind}."),
                None => write!(f, "Expected {expected}. Got EOF."),
            },
        }
    }
}

impl std::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPredicate { name, arity } => {
                write!(f, "No such predicate: {name}\\{arity}")
            }
            Self::UngroundNegation(literal) => {
                write!(f, "Negation applied to the unground literal {literal}")
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Resolution(e) => e.fmt(f),
        }
    }
}
