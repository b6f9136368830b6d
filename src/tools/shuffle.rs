use std::io::{BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;

/// Read every line of `input`, trailing whitespace removed, and write them
/// back in an order drawn from `rng`.
pub fn shuffle_lines<R: BufRead, W: Write, G: Rng + ?Sized>(
    input: R,
    out: &mut W,
    rng: &mut G,
) -> Result<usize> {
    let mut lines = input
        .lines()
        .map(|line| line.map(|l| l.trim_end().to_string()))
        .collect::<std::io::Result<Vec<_>>>()?;
    lines.shuffle(rng);
    for line in lines.iter() {
        writeln!(out, "{}", line)?;
    }
    Ok(lines.len())
}
