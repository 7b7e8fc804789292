use std::path::Path;
use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;

use crate::errors::AppResult;
use crate::file_utils::FileManager;

// @module: Subtitle block parsing

// @const: Inline markup such as <i>, </font> or <b attr="x">
static MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").expect("markup pattern is valid")
});

// @const: Block separator, two or more consecutive newlines
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{2,}").expect("block separator pattern is valid")
});

// @const: Any whitespace run, newlines included
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("whitespace pattern is valid")
});

/// Minimum lines of a block: sequence number, timestamp and one caption line
pub const MIN_BLOCK_LINES: usize = 3;

// @struct: One caption event as it appears in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleBlock<'a> {
    // @field: Raw lines of the block, in file order
    pub lines: Vec<&'a str>,
}

impl<'a> SubtitleBlock<'a> {
    /// Whether the block has a sequence line, a timestamp line and text
    pub fn is_valid(&self) -> bool {
        self.lines.len() >= MIN_BLOCK_LINES
            && self.lines.first().is_some_and(|line| !line.trim().is_empty())
    }

    /// Sequence number line, unparsed
    pub fn sequence_line(&self) -> Option<&'a str> {
        self.lines.first().copied()
    }

    /// Timestamp range line, unparsed
    pub fn timestamp_line(&self) -> Option<&'a str> {
        self.lines.get(1).copied()
    }

    /// Caption lines joined by newlines, before any cleaning
    pub fn raw_caption(&self) -> String {
        self.lines.iter().skip(2).copied().collect::<Vec<_>>().join("\n")
    }

    /// Cleaned caption text, `None` when the block is invalid or empty
    pub fn segment(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        let cleaned = clean_caption(&self.raw_caption());
        (!cleaned.is_empty()).then_some(cleaned)
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split content into blocks separated by empty lines.
///
/// Expects normalized line endings. Only truly empty lines separate blocks,
/// a whitespace-only line stays inside its block. Each block is trimmed.
pub fn split_blocks(content: &str) -> Vec<SubtitleBlock<'_>> {
    BLOCK_SEPARATOR_REGEX
        .split(content.trim())
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| SubtitleBlock { lines: block.split('\n').collect() })
        .collect()
}

/// Remove every `<...>` span.
///
/// Any bracket pair is stripped, whether or not it is a real tag.
pub fn strip_markup(text: &str) -> String {
    MARKUP_REGEX.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs to one space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}

/// Strip markup then collapse whitespace
pub fn clean_caption(text: &str) -> String {
    collapse_whitespace(&strip_markup(text))
}

/// Extract the cleaned caption segments of a subtitle file's content
pub fn parse_segments(content: &str) -> Vec<String> {
    let normalized = normalize_line_endings(content);
    let blocks = split_blocks(&normalized);
    let total = blocks.len();

    let segments: Vec<String> = blocks.iter().filter_map(SubtitleBlock::segment).collect();

    if segments.len() < total {
        debug!("Skipped {} of {} blocks without usable text", total - segments.len(), total);
    }
    segments
}

/// Read a subtitle file and extract its segments
pub fn parse_file<P: AsRef<Path>>(path: P, latin1_fallback: bool) -> AppResult<Vec<String>> {
    let decoded = FileManager::read_text(path, latin1_fallback)?;
    Ok(parse_segments(&decoded.content))
}
