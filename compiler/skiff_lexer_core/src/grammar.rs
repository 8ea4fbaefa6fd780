//! The built-in Skiff grammar tables.
//!
//! Generated from the language's scanner description; do not edit the
//! arrays by hand. The matrix is row-compressed: states with identical
//! outgoing transitions share a row through `ROW_MAP`, and the 258 input
//! symbols collapse to 56 character classes through `CLASS_MAP`.
//!
//! Lexical modes: index 0 scans ordinary tokens, index 1 the interior of
//! (possibly nested) block comments.

use crate::action::ScanAction;
use crate::tables::{AcceptKind, TransitionTable};
use crate::token::TokenKind;

/// Character-class map: one column id per byte value, plus the two
/// synthetic symbols (beginning-of-line at 256, end-of-input at 257).
/// Bytes outside 7-bit ASCII fold into the catch-all class.
#[rustfmt::skip]
static CLASS_MAP: [u8; 258] = [
    46, 46, 46, 46, 46, 46, 46, 46, 3, 3, 2, 46, 46, 1, 46, 46, 46, 46, 46, 46, 46,
    46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 3, 4, 48, 46, 46, 28, 10, 46, 13,
    16, 26, 29, 8, 30, 7, 27, 51, 50, 50, 50, 50, 50, 50, 50, 50, 50, 15, 14, 31,
    32, 33, 47, 46, 52, 52, 52, 52, 53, 52, 54, 54, 54, 54, 54, 54, 54, 54, 54, 54,
    54, 54, 54, 54, 54, 54, 54, 54, 54, 54, 6, 49, 11, 34, 55, 46, 18, 44, 17, 20,
    41, 35, 39, 40, 22, 54, 54, 36, 43, 23, 37, 21, 54, 19, 38, 24, 54, 54, 42, 45,
    54, 54, 5, 12, 9, 25, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46,
    46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46,
    46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46,
    46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46,
    46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46,
    46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46,
    46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 46, 0, 0,
];

/// State-compaction map: DFA state id to transition-matrix row.
#[rustfmt::skip]
static ROW_MAP: [u16; 123] = [
    0, 1, 2, 3, 4, 5, 1, 1, 6, 1, 1, 7, 1, 1, 1, 1, 1, 8, 1, 1, 9, 1, 1, 1, 10, 11,
    12, 1, 13, 14, 1, 15, 1, 1, 16, 17, 1, 1, 1, 1, 1, 18, 17, 17, 17, 1, 17, 17,
    17, 17, 17, 17, 17, 17, 17, 17, 19, 1, 1, 2, 20, 21, 1, 22, 23, 24, 13, 25, 26,
    1, 27, 28, 29, 6, 25, 30, 31, 32, 33, 17, 24, 34, 35, 36, 37, 38, 39, 40, 41,
    42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61,
    62, 17, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74,
];

/// Transition matrix, row-major, 75 rows of 56 columns.
/// `-1` means no transition (trap).
#[rustfmt::skip]
static NEXT: [i16; 4200] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 60, 13, 14, 15, 16, 17, 110, 110, 114,
    115, 63, 110, 116, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 117, 118, 110, 119,
    110, 110, 120, 121, 110, 110, 110, 62, 69, 28, 62, 29, 64, 110, 110, 110, 110,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, 61, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 59, 3, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, 4, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 30, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 31, 31, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 32, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 71,
    110, 76, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, 36, 68, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 37, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 38, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 39, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 40, 111, 28, 28, 28, 28, 28, 28,
    -1, -1, -1, -1, -1, -1, -1, 73, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 29, 29, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 78, -1, -1, -1, -1, -1, -1, -1, -1, 31, 31, -1, 78, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 41, 41, -1,
    41, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 41, -1, -1, -1, -1,
    -1, 41, -1, -1, 41, -1, -1, -1, -1, -1, 41, 41, 41, 41, -1, -1,
    1, 69, 69, 67, 67, 67, 67, 67, 67, 67, 67, 67, 74, 74, 67, 67, 74, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 70, 75, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 74, 67, 67, 67, 67, 67, 67, 67, 67,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 33, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 59, 61, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 34, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 35, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, 73, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, 41, -1, -1, -1, -1, 29, 29, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 65, 65, -1, -1, -1, -1,
    -1, -1, -1, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 82, 84, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    -1, -1, 45, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68,
    68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68,
    68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68, 68,
    -1, -1, -1, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 72, 57, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    42, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 72, 84, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    -1, -1, -1, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 58, 77, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    43, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 82, 77, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, 80, 80, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 65, 65, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 122, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 72, -1, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 92, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, -1, 77, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 93, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    94, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 95, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 46, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    96, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 97, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 98, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 100, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 47, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 101,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 102, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 103, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 48, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    104, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 105,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 49, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 50, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 107, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 108, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    109, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 51, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 52, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 53,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 54, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 55, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 66, 111, 28, 28, 28, 28, 28, 28,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 99, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 106, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 81, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    83, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 85, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 86,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 87,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 88, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 89, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 90,
    110, 110, 110, 110, 110, 110, 110, 110, 91, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 112, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 113, 110, 110, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 110, 110,
    110, 110, 110, 110, 110, 110, 110, 110, 110, -1, -1, -1, -1, 79, 79, 110, 110,
    110, 79,
];

/// Accepting-state classification, indexed by DFA state id.
#[rustfmt::skip]
static ACCEPT: [AcceptKind; 123] = [
    AcceptKind::Not, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Not,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Not, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Not, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Not, AcceptKind::Plain,
    AcceptKind::Not, AcceptKind::Plain, AcceptKind::Not, AcceptKind::Plain,
    AcceptKind::Not, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
    AcceptKind::Plain, AcceptKind::Plain, AcceptKind::Plain,
];

/// Semantic action for each accepting state.
/// Non-accepting states carry `Skip`; the engine never dispatches them.
#[rustfmt::skip]
static ACTIONS: [ScanAction; 123] = [
    ScanAction::Skip,
    ScanAction::Skip,
    ScanAction::Newline,
    ScanAction::Newline,
    ScanAction::Skip,
    ScanAction::Emit(TokenKind::Bang),
    ScanAction::Emit(TokenKind::LeftBrace),
    ScanAction::Emit(TokenKind::LeftBracket),
    ScanAction::Emit(TokenKind::Dot),
    ScanAction::Emit(TokenKind::Comma),
    ScanAction::Emit(TokenKind::RightBrace),
    ScanAction::IllegalChar,
    ScanAction::Emit(TokenKind::RightBracket),
    ScanAction::Emit(TokenKind::LeftParen),
    ScanAction::Emit(TokenKind::Semicolon),
    ScanAction::Emit(TokenKind::Colon),
    ScanAction::Emit(TokenKind::RightParen),
    ScanAction::Ident,
    ScanAction::Emit(TokenKind::Tilde),
    ScanAction::Emit(TokenKind::Star),
    ScanAction::Emit(TokenKind::Slash),
    ScanAction::Emit(TokenKind::Percent),
    ScanAction::Emit(TokenKind::Plus),
    ScanAction::Emit(TokenKind::Minus),
    ScanAction::Emit(TokenKind::Less),
    ScanAction::Emit(TokenKind::Equal),
    ScanAction::Emit(TokenKind::Greater),
    ScanAction::Emit(TokenKind::Caret),
    ScanAction::UnterminatedStr,
    ScanAction::Int,
    ScanAction::Emit(TokenKind::BangEqual),
    ScanAction::Float,
    ScanAction::Emit(TokenKind::AmpersandAmpersand),
    ScanAction::Emit(TokenKind::PipePipe),
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::CommentOpen,
    ScanAction::Emit(TokenKind::LessEqual),
    ScanAction::Emit(TokenKind::EqualEqual),
    ScanAction::Emit(TokenKind::GreaterEqual),
    ScanAction::Str,
    ScanAction::HexInt,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Newline,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Skip,
    ScanAction::CommentClose,
    ScanAction::CommentNested,
    ScanAction::Skip,
    ScanAction::Newline,
    ScanAction::Newline,
    ScanAction::IllegalChar,
    ScanAction::Ident,
    ScanAction::Int,
    ScanAction::Float,
    ScanAction::Str,
    ScanAction::Skip,
    ScanAction::Skip,
    ScanAction::Newline,
    ScanAction::IllegalChar,
    ScanAction::Ident,
    ScanAction::Skip,
    ScanAction::Skip,
    ScanAction::Newline,
    ScanAction::IllegalChar,
    ScanAction::Ident,
    ScanAction::Skip,
    ScanAction::Skip,
    ScanAction::Ident,
    ScanAction::Skip,
    ScanAction::Ident,
    ScanAction::Skip,
    ScanAction::Ident,
    ScanAction::Skip,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::UnterminatedStr,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
    ScanAction::Ident,
];

/// DFA start state per lexical mode: `[Normal, Comment]`.
const START_STATES: [u16; 2] = [0, 56];

static TABLE: TransitionTable =
    TransitionTable::new(&CLASS_MAP, &ROW_MAP, &NEXT, 56, &ACCEPT, START_STATES);

/// The Skiff transition table.
pub fn transition_table() -> &'static TransitionTable {
    &TABLE
}

/// Per-state semantic actions for the Skiff table.
pub fn actions() -> &'static [ScanAction] {
    &ACTIONS
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
mod tests {
    use super::*;
    use crate::tables::Mode;

    #[test]
    fn table_is_internally_consistent() {
        transition_table().validate().unwrap();
    }

    #[test]
    fn every_state_has_an_action() {
        assert_eq!(actions().len(), transition_table().states());
    }

    #[test]
    fn start_states_per_mode() {
        let t = transition_table();
        assert_eq!(t.start_state(Mode::Normal), 0);
        assert_eq!(t.start_state(Mode::Comment), 56);
        // The comment start state matches empty and emits nothing, which
        // is what makes a zero-length beginning-of-line match harmless.
        assert_eq!(t.accept(56), AcceptKind::Plain);
        assert_eq!(ACTIONS[56], ScanAction::Skip);
    }

    #[test]
    fn synthetic_symbols_share_the_anchor_class() {
        let t = transition_table();
        assert_eq!(t.bol_class(), 0);
        assert_eq!(t.end_class(), 0);
    }

    #[test]
    fn high_bytes_fold_into_the_catch_all_class() {
        let t = transition_table();
        assert_eq!(t.class_of_byte(0x80), t.class_of_byte(0x01));
        assert_eq!(t.class_of_byte(0xFF), t.class_of_byte(0x01));
    }

    #[test]
    fn digit_transitions_exist_from_the_start_state() {
        let t = transition_table();
        for b in b'0'..=b'9' {
            assert!(t.next(0, t.class_of_byte(b)).is_some(), "digit {}", char::from(b));
        }
    }
}
