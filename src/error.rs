//! Error types shared by the checker and the companion tools.

use crate::types::Span;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("empty span {0}: a span must have begin < end")]
    EmptySpan(Span),

    /// Reference and candidate do not tokenize the same character stream.
    #[error("reference covers {reference} characters but candidate covers {candidate}")]
    LengthMismatch { reference: usize, candidate: usize },

    #[error("line {line}: reference covers {reference} characters but candidate covers {candidate}")]
    Misaligned {
        line: usize,
        reference: usize,
        candidate: usize,
    },

    #[error("line {line}: expected word_TAG, got '{token}'")]
    MalformedTaggedToken { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attach a line number to a length mismatch; other errors pass through.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Error::LengthMismatch {
                reference,
                candidate,
            } => Error::Misaligned {
                line,
                reference,
                candidate,
            },
            other => other,
        }
    }
}
