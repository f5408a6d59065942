//! Challenge block extraction from lesson documents.
//!
//! A challenge starts at a `> ### Challenge` heading and runs over every
//! following blockquoted line. The first line that is not blockquoted ends
//! the block and is consumed along with it.

use crate::error::{Error, Result};
use crate::types::Challenge;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

/// Heading line that opens a challenge block.
static CHALLENGE_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^> ### Challenge").unwrap());

/// A blockquote marker with nothing but ASCII whitespace after it.
static BLANK_QUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>(?-u:\s)*$").unwrap());

/// Leading blockquote marker plus at most one ASCII whitespace character.
static QUOTE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>(?-u:\s)?").unwrap());

/// The blockquote marker character.
const QUOTE_MARKER: char = '>';

/// Check whether a line opens a challenge block.
pub fn is_challenge_heading(line: &str) -> bool {
    CHALLENGE_HEADING_REGEX.is_match(line)
}

/// Check whether a line belongs to a blockquote.
pub fn is_quoted(line: &str) -> bool {
    line.starts_with(QUOTE_MARKER)
}

/// Strip the blockquote marker from a collected line.
///
/// - `"> some text"` becomes `"some text"`
/// - `">no space"` becomes `"no space"`
/// - `">"` or `">   "` becomes an empty line
pub fn strip_marker(line: &str) -> String {
    if BLANK_QUOTE_REGEX.is_match(line) {
        return String::new();
    }

    QUOTE_MARKER_REGEX.replace(line, "").into_owned()
}

/// Extractor for challenge blocks.
#[derive(Debug, Clone, Default)]
pub struct ChallengeExtractor;

impl ChallengeExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract all challenges from a buffered reader, in document order.
    ///
    /// I/O failures are reported as [`Error::Read`] against `source_name`.
    pub fn extract<R: BufRead>(&self, reader: R, source_name: &Path) -> Result<Vec<Challenge>> {
        let mut challenges = Vec::new();
        let mut lines = reader.lines();

        while let Some(line) = lines.next() {
            let line = line.map_err(|e| Error::read(source_name, e))?;
            if !is_challenge_heading(&line) {
                continue;
            }

            let mut challenge = Challenge::new();
            for next in lines.by_ref() {
                let next = next.map_err(|e| Error::read(source_name, e))?;
                // The terminating line is dropped, never rescanned as a heading.
                if !is_quoted(&next) {
                    break;
                }
                challenge.add_line(strip_marker(&next));
            }

            log::debug!(
                "Challenge {}: {} line(s)",
                challenges.len() + 1,
                challenge.lines.len()
            );
            challenges.push(challenge);
        }

        Ok(challenges)
    }

    /// Extract all challenges from in-memory text.
    pub fn extract_str(&self, text: &str) -> Vec<Challenge> {
        // Reading from a byte slice of valid UTF-8 cannot fail.
        self.extract(text.as_bytes(), Path::new("<memory>"))
            .unwrap_or_default()
    }
}

/// Open a lesson document and extract its challenges.
pub fn extract_file(path: &Path) -> Result<Vec<Challenge>> {
    let file = File::open(path).map_err(|e| Error::read(path, e))?;
    log::debug!("Reading challenges from {}", path.display());
    ChallengeExtractor::new().extract(BufReader::new(file), path)
}
