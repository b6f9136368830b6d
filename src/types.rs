use std::fmt;

/// Half-open range of character offsets occupied by one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

/// How a candidate token relates to the reference segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Crosses a reference token boundary.
    Violating,
    /// Respects every reference boundary, but is not itself a reference token.
    Divergent,
    /// Identical to a reference token.
    Matching,
}

pub trait Token {
    fn text(&self) -> &str;

    /// Length in characters, which is the unit of the offset space.
    fn char_len(&self) -> usize {
        self.text().chars().count()
    }
}

impl Token for &str {
    fn text(&self) -> &str {
        self
    }
}

impl Token for String {
    fn text(&self) -> &str {
        self.as_str()
    }
}
