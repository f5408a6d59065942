//! Slidy presentation output.
//!
//! Generates an R Markdown document with a front-matter header followed by
//! one `---` separated slide per challenge.

use crate::error::{Error, Result};
use crate::types::Challenge;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Front-matter opening the slide deck.
const HEADER: &str = "---\noutput: slidy_presentation\n";

/// Line separating slides.
const SLIDE_SEPARATOR: &str = "---";

/// Title of every slide heading, followed by the slide number.
const SLIDE_TITLE: &str = "Challenge";

/// Formatter for slidy-presentation output.
#[derive(Debug, Clone, Default)]
pub struct SlidyFormatter;

impl SlidyFormatter {
    /// Create a new formatter with "Challenge N" slide headings.
    pub fn new() -> Self {
        Self
    }

    /// Heading line for slide `number` (1-based).
    pub fn heading(&self, number: usize) -> String {
        format!("# {} {}", SLIDE_TITLE, number)
    }

    /// Format challenges into a slide deck.
    ///
    /// # Example output
    /// ```text
    /// ---
    /// output: slidy_presentation
    /// ---
    ///
    /// # Challenge 1
    ///
    /// Do the thing.
    ///
    /// ```
    pub fn format(&self, challenges: &[Challenge]) -> String {
        let mut out = String::from(HEADER);

        for (idx, challenge) in challenges.iter().enumerate() {
            out.push_str(SLIDE_SEPARATOR);
            out.push_str("\n\n");
            out.push_str(&self.heading(idx + 1));
            out.push_str("\n\n");
            out.push_str(&challenge.body());
            out.push('\n');
        }

        out
    }

    /// Write the formatted deck to any writer.
    pub fn write_to<W: Write>(
        &self,
        mut writer: W,
        challenges: &[Challenge],
    ) -> std::io::Result<()> {
        writer.write_all(self.format(challenges).as_bytes())?;
        writer.flush()
    }
}

/// Write challenges as a slide deck at `path`, replacing any existing file.
pub fn write_slides(path: &Path, challenges: &[Challenge]) -> Result<()> {
    if path.exists() {
        log::info!("Overwriting {}", path.display());
    }

    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    SlidyFormatter::new()
        .write_to(BufWriter::new(file), challenges)
        .map_err(|e| Error::write(path, e))?;

    log::debug!("Wrote {} slide(s) to {}", challenges.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ChallengeExtractor;

    #[test]
    fn test_format_no_challenges() {
        let formatter = SlidyFormatter::new();
        assert_eq!(formatter.format(&[]), "---\noutput: slidy_presentation\n");
    }

    #[test]
    fn test_format_single_challenge() {
        let formatter = SlidyFormatter::new();
        let challenges = vec![Challenge::from_lines(["Do the thing.", ""])];
        let expected = "---\noutput: slidy_presentation\n\
                        ---\n\n# Challenge 1\n\nDo the thing.\n\n\n";
        assert_eq!(formatter.format(&challenges), expected);
    }

    #[test]
    fn test_format_numbers_slides_sequentially() {
        let formatter = SlidyFormatter::new();
        let challenges = vec![
            Challenge::from_lines(["A"]),
            Challenge::from_lines(["B"]),
            Challenge::from_lines(["C"]),
        ];
        let output = formatter.format(&challenges);

        let headings: Vec<&str> = output.lines().filter(|l| l.starts_with("# ")).collect();
        assert_eq!(headings, vec!["# Challenge 1", "# Challenge 2", "# Challenge 3"]);
        assert!(output.find("A\n").unwrap() < output.find("B\n").unwrap());
        assert!(output.find("B\n").unwrap() < output.find("C\n").unwrap());
    }

    #[test]
    fn test_heading() {
        let formatter = SlidyFormatter::new();
        assert_eq!(formatter.heading(1), "# Challenge 1");
        assert_eq!(formatter.heading(12), "# Challenge 12");
    }

    #[test]
    fn test_format_empty_challenge() {
        let formatter = SlidyFormatter::new();
        let output = formatter.format(&[Challenge::new()]);
        assert!(output.ends_with("---\n\n# Challenge 1\n\n\n"));
    }

    #[test]
    fn test_end_to_end_sections() {
        let text = "> ### Challenge\n> Do the thing.\n>\nSome other text.\n";
        let challenges = ChallengeExtractor::new().extract_str(text);
        let output = SlidyFormatter::new().format(&challenges);

        let sections: Vec<&str> = output.split("---\n").collect();
        // Leading empty piece, the header, then one section per slide.
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1], "output: slidy_presentation\n");
        assert_eq!(sections[2], "\n# Challenge 1\n\nDo the thing.\n\n\n");
        assert!(!output.contains("Some other text."));
    }

    #[test]
    fn test_write_slides_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesson_slides.Rmd");
        std::fs::write(&path, "stale content that is much longer than the deck\n").unwrap();

        write_slides(&path, &[]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "---\noutput: slidy_presentation\n");
    }

    #[test]
    fn test_write_slides_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out_slides.Rmd");

        let err = write_slides(&path, &[Challenge::from_lines(["x"])]).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
