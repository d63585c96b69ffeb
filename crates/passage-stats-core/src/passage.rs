//! The input passage and its line-joining loader.

use std::io::BufRead;

/// The full input text as one immutable string.
///
/// Lines read from a source are joined so that every line is followed by a
/// single space, which means sentence and word splitting never sees a raw
/// line break between two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passage {
    text: String,
}

impl Passage {
    /// Read a passage line by line, appending a single space after each line.
    ///
    /// A line ends at `\n`, `\r\n`, or a lone `\r`. Any read error is
    /// returned as-is; no partially read text escapes.
    #[tracing::instrument(skip_all)]
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;

        let mut text = String::with_capacity(raw.len() + 1);
        for line in lines(&raw) {
            text.push_str(line);
            text.push(' ');
        }
        tracing::debug!(text_len = text.len(), "passage loaded");
        Ok(Self { text })
    }

    /// Borrow the passage text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the passage has no characters at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split on every line terminator. A trailing terminator does not start an
/// extra empty line.
fn lines(raw: &str) -> impl Iterator<Item = &str> {
    let mut rest = raw;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}
