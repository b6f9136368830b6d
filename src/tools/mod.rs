//! Corpus preparation utilities that ship alongside the checker.

pub mod shuffle;
pub mod tagmap;
pub mod wash;
