//! Order book error types

use std::fmt;

/// Errors surfaced by the order book API.
///
/// Stream-level conditions (malformed lines, cancel/modify of an unknown id)
/// are not errors: the parser drops the line and the book reports "no action"
/// through `Option` returns. This enum covers the cases a caller can actually
/// act on, currently wire-vocabulary parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// A token that does not belong to the wire vocabulary of its field.
    UnknownToken {
        /// Which field was being parsed ("side", "order kind", ...)
        field: &'static str,
        /// The offending token
        token: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::UnknownToken { field, token } => {
                write!(f, "unknown {} token: {}", field, token)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
