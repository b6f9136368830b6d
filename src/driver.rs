//! Pairs reference and candidate lines and prints the annotated result.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::annotate::annotate_line;
use crate::error::{Error, Result};
use crate::render::{plain_line, Style};
use crate::tokenizer::TokenParser;
use crate::types::Classification;

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub style: Style,
    /// Print misaligned pairs undecorated instead of stopping.
    pub keep_going: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub skipped: usize,
    pub violating: usize,
    pub divergent: usize,
    pub matching: usize,
}

impl Summary {
    fn count(&mut self, class: Classification) {
        match class {
            Classification::Violating => self.violating += 1,
            Classification::Divergent => self.divergent += 1,
            Classification::Matching => self.matching += 1,
        }
    }
}

pub fn run_files(
    reference: &Path,
    candidate: &Path,
    out: &mut impl Write,
    options: Options,
) -> Result<Summary> {
    let reference_file = BufReader::new(File::open(reference)?);
    let candidate_file = BufReader::new(File::open(candidate)?);
    debug!(reference = %reference.display(), candidate = %candidate.display(), "comparing");
    run(reference_file, candidate_file, out, options)
}

/// Stops at the end of whichever input is shorter.
pub fn run<R: BufRead, C: BufRead, W: Write>(
    reference: R,
    candidate: C,
    out: &mut W,
    options: Options,
) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut reference_lines = reference.lines();
    let mut candidate_lines = candidate.lines();
    loop {
        let (reference_line, candidate_line) = match (reference_lines.next(), candidate_lines.next()) {
            (Some(r), Some(c)) => (r?, c?),
            (None, None) => break,
            (Some(Err(e)), None) | (None, Some(Err(e))) => return Err(e.into()),
            (r, _) => {
                debug!(
                    line = summary.lines + 1,
                    exhausted = if r.is_none() { "reference" } else { "candidate" },
                    "input ran out, stopping"
                );
                break;
            }
        };
        summary.lines += 1;
        let reference_tokens: Vec<_> = TokenParser::parse(&reference_line).collect();
        let candidate_tokens: Vec<_> = TokenParser::parse(&candidate_line).collect();
        writeln!(out, "{}", plain_line(&reference_tokens))?;
        match annotate_line(&reference_tokens, &candidate_tokens) {
            Ok(annotated) => {
                annotated.iter().for_each(|a| summary.count(a.class));
                writeln!(out, "{}", options.style.line(&annotated))?;
            }
            Err(err @ Error::LengthMismatch { .. }) if options.keep_going => {
                warn!(line = summary.lines, "{}", err);
                summary.skipped += 1;
                writeln!(out, "{}", plain_line(&candidate_tokens))?;
            }
            Err(err) => return Err(err.at_line(summary.lines)),
        }
    }
    info!(
        lines = summary.lines,
        skipped = summary.skipped,
        violating = summary.violating,
        divergent = summary.divergent,
        matching = summary.matching,
        "done"
    );
    Ok(summary)
}
