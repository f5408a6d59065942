//! Domain types for extracted challenge content.

/// A single challenge block pulled out of a lesson document.
///
/// Lines are stored with the blockquote marker already stripped and without
/// trailing newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Challenge {
    /// Body lines in document order.
    pub lines: Vec<String>,
}

impl Challenge {
    /// Create an empty challenge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a challenge from already-normalized lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a normalized body line.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Whether the challenge has no body lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The body as text, every line terminated by a newline.
    pub fn body(&self) -> String {
        self.lines.iter().fold(String::new(), |mut body, line| {
            body.push_str(line);
            body.push('\n');
            body
        })
    }
}
