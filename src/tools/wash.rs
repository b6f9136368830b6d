//! Turn a crawl dump of HTML pages into one JSON article per page.
//!
//! The dump is a byte stream in which every page is introduced by a
//! `<docurl>URL</docurl>` line. Pages carry their own charset in a `<meta>`
//! line, so the stream is split on raw bytes and each page is decoded on its
//! own.

use std::fmt;
use std::io::{self, BufRead, Write};

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::bytes::Regex as BytesRegex;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;

const DOCURL: &[u8] = b"<docurl>";

static CHARSET: Lazy<BytesRegex> = Lazy::new(|| {
    BytesRegex::new(r#"(?-u)^<(?:meta|META).*charset=(?:"|')?([^ "'>;/]*)"#).expect("valid regex")
});
static KEYWORDS: Lazy<BytesRegex> = Lazy::new(|| {
    BytesRegex::new(r#"(?-u)^<(?:meta|META).*keywords.*content=(?:"|')?([^ "']*)"#).expect("valid regex")
});
static KEYWORD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ ,;|]").expect("valid regex"));
static INVISIBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>|<!--.*?-->").expect("valid regex")
});
static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title>").expect("valid regex"));
static PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").expect("valid regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

const TITLE_SEPARATORS: &[&str] = &[" | ", " - ", " _ "];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub url: String,
    /// Trimmed, still encoded.
    pub lines: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub url: String,
    pub keywords: Vec<String>,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnknownCharset(String),
    /// No line of the page could be decoded with its charset.
    Undecodable,
    NoTitle,
    NoContent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownCharset(label) => write!(f, "unknown charset '{}'", label),
            SkipReason::Undecodable => write!(f, "no line decodes with the declared charset"),
            SkipReason::NoTitle => write!(f, "no title"),
            SkipReason::NoContent => write!(f, "no paragraph text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Extracted(Article),
    Skipped { url: String, reason: SkipReason },
}

/// Iterator over the pages of a dump. Lines before the first `<docurl>`
/// form a page with an empty URL; a `<docurl>` with no lines is dropped.
pub struct Documents<R> {
    input: R,
    url: String,
    lines: Vec<Vec<u8>>,
}

pub fn documents<R: BufRead>(input: R) -> Documents<R> {
    Documents {
        input,
        url: String::new(),
        lines: Vec::new(),
    }
}

impl<R> Documents<R> {
    fn take(&mut self, next_url: String) -> RawDocument {
        RawDocument {
            url: std::mem::replace(&mut self.url, next_url),
            lines: std::mem::take(&mut self.lines),
        }
    }
}

impl<R: BufRead> Iterator for Documents<R> {
    type Item = io::Result<RawDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = Vec::new();
            match self.input.read_until(b'\n', &mut line) {
                Err(e) => return Some(Err(e)),
                Ok(0) if self.lines.is_empty() => return None,
                Ok(0) => return Some(Ok(self.take(String::new()))),
                Ok(_) => {}
            }
            if line.starts_with(DOCURL) {
                let url = docurl(&line);
                if self.lines.is_empty() {
                    self.url = url;
                    continue;
                }
                return Some(Ok(self.take(url)));
            }
            self.lines.push(trim(&line).to_vec());
        }
    }
}

fn docurl(line: &[u8]) -> String {
    let line = String::from_utf8_lossy(line);
    let after = line.split_once('>').map(|(_, rest)| rest).unwrap_or("");
    after.split('<').next().unwrap_or("").to_string()
}

fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

fn is_meta(line: &[u8]) -> bool {
    line.starts_with(b"<meta") || line.starts_with(b"<META")
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Charset label and raw keywords, each from the first meta line naming them.
fn scan_meta(lines: &[Vec<u8>]) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
    let mut charset = None;
    let mut keywords = None;
    for line in lines.iter().filter(|l| is_meta(l)) {
        if charset.is_none() && contains(line, b"charset") {
            charset = Some(
                CHARSET
                    .captures(line)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_bytes().to_vec())
                    .unwrap_or_default(),
            );
        }
        if keywords.is_none() && contains(line, b"keywords") {
            keywords = KEYWORDS
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_bytes().to_vec());
        }
    }
    (charset, keywords)
}

fn decode(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|s| s.into_owned())
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn clean_text(html: &str) -> String {
    let text = decode_entities(&TAG.replace_all(html, " "));
    SPACES.replace_all(&text, " ").trim().to_string()
}

/// The longest part of a title like "Story headline - Site name".
pub fn short_title(title: &str) -> String {
    let parts: Vec<&str> = split_any(title, TITLE_SEPARATORS)
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    parts
        .iter()
        .copied()
        .max_by_key(|p| p.chars().count())
        .unwrap_or(title)
        .to_string()
}

fn split_any<'a>(text: &'a str, separators: &[&str]) -> Vec<&'a str> {
    let mut parts = vec![text];
    for separator in separators {
        parts = parts
            .into_iter()
            .flat_map(|p| p.split(separator))
            .collect();
    }
    parts
}

pub fn extract(doc: &RawDocument) -> Outcome {
    let skip = |reason| Outcome::Skipped {
        url: doc.url.clone(),
        reason,
    };
    let (charset, raw_keywords) = scan_meta(&doc.lines);
    let encoding = match charset {
        None => UTF_8,
        Some(label) => match Encoding::for_label(&label) {
            Some(encoding) => encoding,
            None => {
                return skip(SkipReason::UnknownCharset(
                    String::from_utf8_lossy(&label).into_owned(),
                ))
            }
        },
    };

    let mut failed = 0;
    let decoded: Vec<String> = doc
        .lines
        .iter()
        .map(|line| {
            decode(encoding, line).unwrap_or_else(|| {
                failed += 1;
                String::new()
            })
        })
        .collect();
    if failed > 0 && failed == doc.lines.iter().filter(|l| !l.is_empty()).count() {
        return skip(SkipReason::Undecodable);
    }
    if failed > 0 {
        debug!(url = %doc.url, failed, "blanked undecodable lines");
    }

    let keywords = raw_keywords
        .and_then(|k| decode(encoding, &k))
        .map(|k| {
            KEYWORD_SEPARATOR
                .split(&k)
                .filter(|w| !w.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let html = INVISIBLE.replace_all(&decoded.join("\n"), "").into_owned();
    let title = TITLE
        .captures(&html)
        .and_then(|c| c.get(1))
        .map(|m| short_title(&clean_text(m.as_str())))
        .unwrap_or_default();
    if title.is_empty() {
        return skip(SkipReason::NoTitle);
    }
    let content = PARAGRAPH
        .captures_iter(&html)
        .filter_map(|c| c.get(1))
        .map(|m| clean_text(m.as_str()))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if content.is_empty() {
        return skip(SkipReason::NoContent);
    }

    Outcome::Extracted(Article {
        url: doc.url.clone(),
        keywords,
        title,
        content,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WashSummary {
    pub extracted: usize,
    pub skipped: usize,
}

pub fn wash<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<WashSummary> {
    let mut summary = WashSummary::default();
    for (n, doc) in documents(input).enumerate() {
        let doc = doc?;
        debug!(n = n + 1, url = %doc.url, lines = doc.lines.len(), "document");
        match extract(&doc) {
            Outcome::Extracted(article) => {
                serde_json::to_writer(&mut *out, &article)?;
                writeln!(out)?;
                out.flush()?;
                summary.extracted += 1;
            }
            Outcome::Skipped { url, reason } => {
                info!(%url, %reason, "skipped");
                summary.skipped += 1;
            }
        }
    }
    info!(
        extracted = summary.extracted,
        skipped = summary.skipped,
        "done"
    );
    Ok(summary)
}
