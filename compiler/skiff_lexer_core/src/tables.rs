//! Compressed DFA transition tables.
//!
//! A [`TransitionTable`] is the read-only description of one automaton:
//! a character-class map collapsing the 258 input symbols down to a few
//! dozen equivalence classes, a row map sharing matrix rows between states
//! with identical outgoing transitions, the row-major transition matrix
//! itself, an accept classification per state, and one start state per
//! lexical mode.
//!
//! The engine trusts a table completely once constructed; producers (and
//! the grammar's own tests) call [`validate()`](TransitionTable::validate)
//! to check internal consistency up front instead of bounds-checking in
//! the hot loop.

use crate::error::ScanError;

/// Synthetic input column for the beginning-of-line symbol.
pub const BOL_COLUMN: usize = 256;
/// Synthetic input column for the end-of-input symbol.
pub const END_COLUMN: usize = 257;
/// Total input symbols: 256 byte values plus the two synthetic symbols.
pub const SYMBOLS: usize = 258;

/// Accept classification of a DFA state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptKind {
    /// Not an accepting state; reaching it never moves the match mark.
    Not,
    /// Plain accepting state.
    Plain,
    /// Accepting, but the match ends before a trailing line terminator,
    /// which is handed back to the input for re-scanning.
    TrailingContext,
}

/// Lexical mode, selecting the DFA start state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Ordinary token scanning.
    #[default]
    Normal,
    /// Inside a (possibly nested) block comment.
    Comment,
}

/// A complete compressed transition table.
///
/// All slices are `'static`: tables are generated data, baked into the
/// binary. Indexing invariants (every row-map entry addresses a full row,
/// every matrix entry names a real state or `-1`) are checked by
/// [`validate()`](Self::validate), not per lookup.
#[derive(Debug)]
pub struct TransitionTable {
    /// Input symbol to character class, indexed by byte value then the two
    /// synthetic symbols.
    class_map: &'static [u8; SYMBOLS],
    /// State id to transition-matrix row.
    row_map: &'static [u16],
    /// Row-major transition matrix; `-1` is the trap.
    next: &'static [i16],
    /// Columns per matrix row (number of character classes).
    width: usize,
    /// Accept classification, indexed by state id.
    accept: &'static [AcceptKind],
    /// Start state per mode: `[Normal, Comment]`.
    start_states: [u16; 2],
}

impl TransitionTable {
    /// Assemble a table from its parts. No validation happens here; call
    /// [`validate()`](Self::validate) on untrusted data.
    #[must_use]
    pub const fn new(
        class_map: &'static [u8; SYMBOLS],
        row_map: &'static [u16],
        next: &'static [i16],
        width: usize,
        accept: &'static [AcceptKind],
        start_states: [u16; 2],
    ) -> Self {
        Self { class_map, row_map, next, width, accept, start_states }
    }

    /// Character class of an input byte.
    #[inline]
    pub fn class_of_byte(&self, byte: u8) -> u8 {
        self.class_map[usize::from(byte)]
    }

    /// Character class of the synthetic beginning-of-line symbol.
    #[inline]
    pub fn bol_class(&self) -> u8 {
        self.class_map[BOL_COLUMN]
    }

    /// Character class of the synthetic end-of-input symbol.
    #[inline]
    pub fn end_class(&self) -> u8 {
        self.class_map[END_COLUMN]
    }

    /// Successor of `state` on input class `class`, or `None` at the trap.
    #[inline]
    pub fn next(&self, state: u16, class: u8) -> Option<u16> {
        let row = usize::from(self.row_map[usize::from(state)]);
        let entry = self.next[row * self.width + usize::from(class)];
        u16::try_from(entry).ok()
    }

    /// Accept classification of `state`.
    #[inline]
    pub fn accept(&self, state: u16) -> AcceptKind {
        self.accept[usize::from(state)]
    }

    /// Start state for a lexical mode.
    #[inline]
    pub fn start_state(&self, mode: Mode) -> u16 {
        self.start_states[mode as usize]
    }

    /// Number of DFA states.
    pub fn states(&self) -> usize {
        self.row_map.len()
    }

    /// Check internal consistency: map and matrix dimensions line up,
    /// every class, row, and successor is in range, and both start states
    /// exist.
    pub fn validate(&self) -> Result<(), ScanError> {
        let states = self.row_map.len();
        if self.accept.len() != states {
            return Err(ScanError::MalformedTable {
                detail: format!(
                    "accept table has {} entries for {states} states",
                    self.accept.len()
                ),
            });
        }
        if self.width == 0 || self.next.len() % self.width != 0 {
            return Err(ScanError::MalformedTable {
                detail: format!(
                    "matrix length {} is not a multiple of width {}",
                    self.next.len(),
                    self.width
                ),
            });
        }
        let rows = self.next.len() / self.width;
        for (symbol, &class) in self.class_map.iter().enumerate() {
            if usize::from(class) >= self.width {
                return Err(ScanError::MalformedTable {
                    detail: format!("symbol {symbol} maps to class {class}, width is {}", self.width),
                });
            }
        }
        for (state, &row) in self.row_map.iter().enumerate() {
            if usize::from(row) >= rows {
                return Err(ScanError::MalformedTable {
                    detail: format!("state {state} maps to row {row}, matrix has {rows} rows"),
                });
            }
        }
        for (i, &entry) in self.next.iter().enumerate() {
            if entry != -1 && usize::try_from(entry).map_or(true, |s| s >= states) {
                return Err(ScanError::MalformedTable {
                    detail: format!("matrix entry {i} names state {entry}, table has {states} states"),
                });
            }
        }
        for start in self.start_states {
            if usize::from(start) >= states {
                return Err(ScanError::MalformedTable {
                    detail: format!("start state {start} out of range ({states} states)"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TINY_CLASS_MAP: [u8; SYMBOLS] = {
        let mut map = [0u8; SYMBOLS];
        map[b'a' as usize] = 1;
        map
    };
    static TINY_ROW_MAP: [u16; 2] = [0, 1];
    // State 0: 'a' -> 1, else trap. State 1: trap everywhere.
    static TINY_NEXT: [i16; 4] = [-1, 1, -1, -1];
    static TINY_ACCEPT: [AcceptKind; 2] = [AcceptKind::Not, AcceptKind::Plain];

    fn tiny() -> TransitionTable {
        TransitionTable::new(&TINY_CLASS_MAP, &TINY_ROW_MAP, &TINY_NEXT, 2, &TINY_ACCEPT, [0, 0])
    }

    #[test]
    fn next_follows_transitions_and_traps() {
        let t = tiny();
        let a = t.class_of_byte(b'a');
        assert_eq!(t.next(0, a), Some(1));
        assert_eq!(t.next(0, t.class_of_byte(b'b')), None);
        assert_eq!(t.next(1, a), None);
    }

    #[test]
    fn accept_classification() {
        let t = tiny();
        assert_eq!(t.accept(0), AcceptKind::Not);
        assert_eq!(t.accept(1), AcceptKind::Plain);
    }

    #[test]
    fn tiny_table_validates() {
        assert!(tiny().validate().is_ok());
    }

    #[test]
    fn validate_rejects_wrong_accept_length() {
        static SHORT_ACCEPT: [AcceptKind; 1] = [AcceptKind::Not];
        let t = TransitionTable::new(
            &TINY_CLASS_MAP, &TINY_ROW_MAP, &TINY_NEXT, 2, &SHORT_ACCEPT, [0, 0],
        );
        assert!(matches!(t.validate(), Err(ScanError::MalformedTable { .. })));
    }

    #[test]
    fn validate_rejects_out_of_range_successor() {
        static BAD_NEXT: [i16; 4] = [-1, 7, -1, -1];
        let t = TransitionTable::new(
            &TINY_CLASS_MAP, &TINY_ROW_MAP, &BAD_NEXT, 2, &TINY_ACCEPT, [0, 0],
        );
        assert!(matches!(t.validate(), Err(ScanError::MalformedTable { .. })));
    }

    #[test]
    fn validate_rejects_out_of_range_start_state() {
        let t = TransitionTable::new(
            &TINY_CLASS_MAP, &TINY_ROW_MAP, &TINY_NEXT, 2, &TINY_ACCEPT, [0, 9],
        );
        assert!(matches!(t.validate(), Err(ScanError::MalformedTable { .. })));
    }
}
