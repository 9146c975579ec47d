//! Frame Locator - finds frame lines inside free-form trace text.
//!
//! A rendered stack trace interleaves frame lines with noise: the leading
//! "exception type: message" header, wrapped continuation text, inner
//! exception banners, blank lines. The locator scans line by line, yields
//! only the frame lines, and does so lazily so arbitrarily large traces can
//! be walked without buffering.

use std::str::Lines;

/// Marker word opening a frame line in the conventional rendering
const DEFAULT_MARKER: &str = "at";

/// Lazy iterator over the frame lines of a rendered stack trace
///
/// Yields each frame's payload (the text after the marker word) with
/// surrounding whitespace trimmed, one item per frame line, in document
/// order. Every other line is skipped without error. Each fresh
/// construction re-scans from the start; nothing is cached.
pub struct FrameLines<'a> {
    lines: Lines<'a>,
    marker: &'a str,
}

impl<'a> FrameLines<'a> {
    /// Scan `text` with the conventional `at` marker
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            marker: DEFAULT_MARKER,
        }
    }

    /// Scan `text` with a non-default frame marker
    ///
    /// Localized runtimes print a translated marker word ("bei", "em");
    /// the rest of the line grammar is unchanged.
    pub fn with_marker(text: &'a str, marker: &'a str) -> Self {
        Self {
            lines: text.lines(),
            marker,
        }
    }

    /// A line is a frame line iff its trimmed text starts with the marker
    /// word followed by at least one space or tab. The marker appearing as
    /// a substring elsewhere in a line never matches.
    fn payload_of(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.trim_start().strip_prefix(self.marker)?;
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some(rest.trim_start_matches([' ', '\t']).trim_end())
    }
}

impl<'a> Iterator for FrameLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let line = self.lines.next()?;
            if let Some(payload) = self.payload_of(line) {
                tracing::trace!(frame = payload, "located frame line");
                return Some(payload);
            }
        }
    }
}
