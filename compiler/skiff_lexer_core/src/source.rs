//! Incremental buffered character source with match marks.
//!
//! Feeds the scanner one byte at a time from any [`io::Read`], keeping just
//! enough of the stream buffered to support maximal-munch backtracking. The
//! buffer holds everything from the current token's start mark to the
//! furthest byte read ahead; the consumed prefix is discarded on refill and
//! the buffer doubles when a single token outgrows it.
//!
//! # Marks
//!
//! Three positions partition the buffer:
//!
//! ```text
//! [discardable | lexeme-so-far | lookahead]
//!  0            start   end     index      filled
//! ```
//!
//! `start` marks the first byte of the current scan attempt, `end` the
//! rightmost confirmed match boundary, and `index` the read cursor. After a
//! trap, [`rewind_to_mark()`](CharSource::rewind_to_mark) drops the
//! over-read lookahead by moving `index` back to `end`.

use std::io::{self, Read};

use crate::position::PositionTracker;

/// Initial buffer capacity in bytes.
const DEFAULT_CAPACITY: usize = 512;

/// Growable buffered reader over a byte stream, with token marks.
///
/// Owned by exactly one [`Scanner`](crate::Scanner); never shared. Offsets
/// only ever increase. End-of-input is idempotent: once
/// [`advance()`](Self::advance) returns `None`, every later call returns
/// `None` without touching the underlying reader.
#[derive(Debug)]
pub struct CharSource<R> {
    reader: R,
    buf: Vec<u8>,
    /// Filled portion of `buf`.
    filled: usize,
    /// Read cursor.
    index: usize,
    /// First byte of the current scan attempt.
    start: usize,
    /// One past the last byte of the best confirmed match.
    end: usize,
    /// Underlying reader returned end-of-stream.
    exhausted: bool,
    /// The next attempt starts at a logical beginning of line.
    at_bol: bool,
    pos: PositionTracker,
}

impl<R: Read> CharSource<R> {
    /// Create a source with the default buffer capacity.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_CAPACITY)
    }

    /// Create a source with a specific initial capacity (minimum 1 byte).
    ///
    /// The capacity only affects how soon the buffer grows; lexemes longer
    /// than the buffer are handled transparently by doubling.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buf: vec![0; capacity.max(1)],
            filled: 0,
            index: 0,
            start: 0,
            end: 0,
            exhausted: false,
            at_bol: true,
            pos: PositionTracker::default(),
        }
    }

    /// Read the next byte, refilling (and if necessary growing) the buffer.
    ///
    /// Returns `Ok(None)` at end of input, forever after. The byte is
    /// consumed: the read cursor moves past it. Backtracking is only
    /// possible down to the last [`mark_end()`](Self::mark_end).
    pub fn advance(&mut self) -> io::Result<Option<u8>> {
        if self.index < self.filled {
            let byte = self.buf[self.index];
            self.index += 1;
            return Ok(Some(byte));
        }
        if self.exhausted {
            return Ok(None);
        }
        // Everything before the start mark is unreachable by any rewind;
        // slide the live region down before reading more.
        if self.start > 0 {
            self.buf.copy_within(self.start..self.filled, 0);
            self.filled -= self.start;
            self.index -= self.start;
            self.end -= self.start;
            self.start = 0;
        }
        while self.index >= self.filled {
            if self.filled == self.buf.len() {
                // A single token has outgrown the buffer.
                self.buf.resize(self.buf.len() * 2, 0);
            }
            let n = self.reader.read(&mut self.buf[self.filled..])?;
            if n == 0 {
                self.exhausted = true;
                return Ok(None);
            }
            self.filled += n;
        }
        let byte = self.buf[self.index];
        self.index += 1;
        Ok(Some(byte))
    }

    /// Begin a new scan attempt at the read cursor.
    ///
    /// Folds the previously consumed region (the last finalized lexeme)
    /// into the position tracker, then moves the start mark up.
    pub fn mark_start(&mut self) {
        self.pos.consume(&self.buf[self.start..self.index]);
        self.start = self.index;
    }

    /// Record the read cursor as the rightmost confirmed match boundary.
    pub fn mark_end(&mut self) {
        self.end = self.index;
    }

    /// Discard over-read lookahead: move the read cursor back to the end
    /// mark, so the next attempt resumes exactly after the confirmed match.
    ///
    /// Also updates the beginning-of-line flag: true iff the confirmed
    /// match is non-empty and ends in a line terminator.
    pub fn rewind_to_mark(&mut self) {
        self.index = self.end;
        self.at_bol =
            self.end > self.start && matches!(self.buf[self.end - 1], b'\n' | b'\r');
    }

    /// The confirmed lexeme: bytes between the start and end marks.
    pub fn lexeme(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    /// Length of the confirmed lexeme in bytes.
    pub fn lexeme_len(&self) -> usize {
        self.end - self.start
    }

    /// Exclude a trailing line terminator from the confirmed match.
    ///
    /// Removes one trailing `\n`, then one trailing `\r`, mirroring how a
    /// trailing-context match hands the terminator back for re-scanning.
    /// Line counting is unaffected: the terminator is consumed (and
    /// counted) by whichever attempt reads it next.
    pub fn trim_trailing_newline(&mut self) {
        if self.end > self.start && self.buf[self.end - 1] == b'\n' {
            self.end -= 1;
        }
        if self.end > self.start && self.buf[self.end - 1] == b'\r' {
            self.end -= 1;
        }
    }

    /// Whether the next attempt starts at a logical beginning of line.
    pub fn at_bol(&self) -> bool {
        self.at_bol
    }

    /// Absolute offset of the current attempt's start mark.
    pub fn offset(&self) -> usize {
        self.pos.offset()
    }

    /// 0-based line number at the current attempt's start mark.
    pub fn line(&self) -> usize {
        self.pos.line()
    }

    /// Column of the current attempt's start mark within its line.
    pub fn column(&self) -> usize {
        self.pos.column()
    }

    /// Record the position just past the confirmed lexeme as a line start.
    ///
    /// Invoked by newline actions; later columns are measured from here.
    pub fn begin_line_after_match(&mut self) {
        let line_start = self.pos.offset() + self.lexeme_len();
        self.pos.set_line_start(line_start);
    }
}
