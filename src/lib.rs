//! Compare a candidate word segmentation against a reference one and flag
//! the candidate tokens that cut across reference token boundaries.

pub mod annotate;
pub mod boundary;
pub mod driver;
pub mod error;
pub mod logging;
pub mod render;
pub mod span;
pub mod tokenizer;
pub mod tools;
pub mod types;

pub use annotate::{annotate_line, annotate_spans, Annotated};
pub use boundary::BoundaryIndex;
pub use error::{Error, Result};
pub use span::build_spans;
pub use types::{Classification, Span, Token};
