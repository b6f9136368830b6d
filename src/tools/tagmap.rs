//! Rewrite Chinese Treebank part-of-speech tags into the universal tag set.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::tokenizer::TokenParser;

/// Universal tag for a Chinese Treebank tag.
pub fn universal_tag(tag: &str) -> Option<&'static str> {
    Some(match tag {
        "AD" => "ADV",
        "AS" | "DEC" | "DEG" | "DER" | "DEV" | "ETC" | "LC" | "MSP" | "SP" => "PRT",
        "BA" | "FW" | "IJ" | "LB" | "ON" | "SB" | "X" => "X",
        "CC" | "CS" => "CONJ",
        "CD" | "M" | "OD" => "NUM",
        "DT" => "DET",
        "JJ" => "ADJ",
        "NN" | "NR" | "NT" => "NOUN",
        "P" => "ADP",
        "PN" => "PRON",
        "PU" => ".",
        "VA" | "VC" | "VE" | "VV" => "VERB",
        _ => return None,
    })
}

/// Split `word_TAG`; anything with other than exactly one `_` is rejected.
pub fn split_tagged(token: &str) -> Option<(&str, &str)> {
    let (word, tag) = token.split_once('_')?;
    if tag.contains('_') {
        return None;
    }
    Some((word, tag))
}

pub fn map_line(line: &str, line_number: usize) -> Result<String> {
    let mut out = Vec::new();
    for token in TokenParser::parse(line) {
        let (word, tag) =
            split_tagged(token.text).ok_or_else(|| Error::MalformedTaggedToken {
                line: line_number,
                token: token.text.to_string(),
            })?;
        out.push(format!("{}_{}", word, universal_tag(tag).unwrap_or("X")));
    }
    Ok(out.join(" "))
}

pub fn map_tags<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    for (i, line) in input.lines().enumerate() {
        writeln!(out, "{}", map_line(&line?, i + 1)?)?;
    }
    Ok(())
}

#[derive(Debug, Default)]
struct WordCounts {
    total: usize,
    /// First-seen order, so ties keep it.
    words: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl WordCounts {
    fn add(&mut self, word: &str) {
        self.total += 1;
        match self.positions.get(word) {
            Some(&i) => self.words[i].1 += 1,
            None => {
                self.positions.insert(word.to_string(), self.words.len());
                self.words.push((word.to_string(), 1));
            }
        }
    }

    fn most_common(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<&(String, usize)> = self.words.iter().collect();
        // stable sort
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(w, _)| w.as_str()).collect()
    }
}

/// Per source tag: its mapping, how often it occurs and its most frequent words.
#[derive(Debug, Default)]
pub struct TagSummary {
    tags: Vec<(String, WordCounts)>,
    positions: HashMap<String, usize>,
}

impl TagSummary {
    pub fn add_line(&mut self, line: &str) {
        for (word, tag) in TokenParser::parse(line).filter_map(|t| split_tagged(t.text)) {
            let i = match self.positions.get(tag) {
                Some(&i) => i,
                None => {
                    self.positions.insert(tag.to_string(), self.tags.len());
                    self.tags.push((tag.to_string(), WordCounts::default()));
                    self.tags.len() - 1
                }
            };
            self.tags[i].1.add(word);
        }
    }

    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        for (tag, counts) in self.tags.iter() {
            writeln!(
                out,
                "{} {} {}",
                tag,
                universal_tag(tag).unwrap_or("NONE"),
                counts.total
            )?;
            writeln!(out, "{}", counts.most_common(10).join(" "))?;
        }
        Ok(())
    }
}

pub fn summarize<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    let mut summary = TagSummary::default();
    for line in input.lines() {
        summary.add_line(&line?);
    }
    summary.write(out)
}
