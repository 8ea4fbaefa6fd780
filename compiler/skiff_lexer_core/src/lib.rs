//! Table-driven DFA scanner core for Skiff.
//!
//! Turns a byte stream into [`Token`]s by simulating a compressed
//! deterministic automaton with maximal munch: the scanner follows
//! transitions as long as a longer match is still possible, then rewinds
//! to the last accepting state and runs that state's [`ScanAction`].
//!
//! The built-in [`grammar`] covers the Skiff surface language: keywords,
//! identifiers, integer / float / hex / string literals, operators, line
//! comments, and nested block comments (handled with a second lexical
//! mode plus a depth counter). Custom grammars plug in through
//! [`Scanner::with_grammar`].
//!
//! Recoverable problems (illegal characters, unterminated strings) are
//! reported to a [`DiagnosticSink`] and scanning continues; hard failures
//! surface as [`ScanError`].
//!
//! ```
//! use skiff_lexer_core::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new(&b"let x = 42"[..]);
//! let token = scanner.next_token()?;
//! assert_eq!(token.kind, TokenKind::Let);
//! # Ok::<(), skiff_lexer_core::ScanError>(())
//! ```

mod action;
mod diagnostic;
mod error;
pub mod grammar;
mod position;
mod scanner;
mod source;
mod tables;
mod token;

pub use action::ScanAction;
pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use error::ScanError;
pub use scanner::Scanner;
pub use source::CharSource;
pub use tables::{AcceptKind, Mode, TransitionTable, BOL_COLUMN, END_COLUMN, SYMBOLS};
pub use token::{Token, TokenKind};
