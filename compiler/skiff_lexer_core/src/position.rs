//! Line and offset bookkeeping for the scanner.
//!
//! Positions are folded in lazily: the source hands the tracker a whole
//! consumed region when the next scan attempt starts, instead of paying a
//! per-byte cost inside the automaton's hot loop. Column values are derived
//! at token emission as `offset - line_start`.
//!
//! # Line Terminators
//!
//! A `\r` counts as a terminator on its own. A `\n` counts unless it
//! immediately follows a `\r`, so `\r\n` advances the line counter exactly
//! once. The CR flag survives across region boundaries, which matters when
//! a CRLF pair is split between two consumed regions.

/// Running line number, line-start offset, and absolute byte offset.
///
/// Lines are 0-based. `line_start` is the absolute offset of the first byte
/// of the current line; it is updated by the scanner's newline actions, not
/// by [`consume()`](Self::consume), so that column arithmetic matches the
/// offsets the scanner reports.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PositionTracker {
    line: usize,
    line_start: usize,
    offset: usize,
    /// Last consumed byte was `\r` (suppresses the count for a following `\n`).
    last_was_cr: bool,
}

impl PositionTracker {
    /// Fold a consumed region into the line counter and absolute offset.
    ///
    /// Uses `memchr` to jump between terminator bytes; everything else in
    /// the region is skipped without inspection.
    pub(crate) fn consume(&mut self, bytes: &[u8]) {
        for at in memchr::memchr2_iter(b'\r', b'\n', bytes) {
            if bytes[at] == b'\r' {
                self.line += 1;
            } else {
                let after_cr = if at == 0 {
                    self.last_was_cr
                } else {
                    bytes[at - 1] == b'\r'
                };
                if !after_cr {
                    self.line += 1;
                }
            }
        }
        if let Some(&last) = bytes.last() {
            self.last_was_cr = last == b'\r';
        }
        self.offset += bytes.len();
    }

    /// 0-based line number at the current offset.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Column at the current offset, relative to the most recent line start.
    pub(crate) fn column(&self) -> usize {
        self.offset.saturating_sub(self.line_start)
    }

    /// Absolute byte offset from the start of the stream.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Record `offset` as the start of a new line.
    ///
    /// Called by the scanner's newline actions with the offset one past the
    /// matched line terminator.
    pub(crate) fn set_line_start(&mut self, offset: usize) {
        self.line_start = offset;
    }
}
