use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::Span;

/// Offset lookups over the reference spans of one line.
///
/// `begin_map[o]` is the largest end of any reference span starting at `o`,
/// `end_map[o]` the smallest begin of any reference span ending at `o`. For a
/// proper segmentation each offset holds at most one span of either kind, so
/// the max/min only decides anything for overlapping reference input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryIndex {
    begin_map: HashMap<usize, usize>,
    end_map: HashMap<usize, usize>,
}

impl BoundaryIndex {
    pub fn new<'s, I>(spans: I) -> Self
    where
        I: IntoIterator<Item = &'s Span>,
    {
        let mut begin_map: HashMap<usize, usize> = HashMap::new();
        let mut end_map: HashMap<usize, usize> = HashMap::new();
        for span in spans {
            begin_map
                .entry(span.begin)
                .and_modify(|end| *end = (*end).max(span.end))
                .or_insert(span.end);
            end_map
                .entry(span.end)
                .and_modify(|begin| *begin = (*begin).min(span.begin))
                .or_insert(span.begin);
        }
        Self { begin_map, end_map }
    }

    pub fn is_empty(&self) -> bool {
        self.begin_map.is_empty() && self.end_map.is_empty()
    }

    pub fn end_starting_at(&self, offset: usize) -> Option<usize> {
        self.begin_map.get(&offset).copied()
    }

    pub fn begin_ending_at(&self, offset: usize) -> Option<usize> {
        self.end_map.get(&offset).copied()
    }

    /// Whether `span` stays clear of every reference boundary.
    ///
    /// Only offsets strictly inside the span are inspected: a reference token
    /// starting there must not run past `span.end`, and one ending there must
    /// not have begun before `span.begin`.
    pub fn is_consistent(&self, span: Span) -> Result<bool> {
        if span.is_empty() {
            return Err(Error::EmptySpan(span));
        }
        for i in (span.begin + 1)..span.end {
            if self.end_starting_at(i).is_some_and(|end| end > span.end) {
                return Ok(false);
            }
            if self.begin_ending_at(i).is_some_and(|begin| begin < span.begin) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
