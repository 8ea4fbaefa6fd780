//! Hard scanner failures.

/// Errors that stop the scanner.
///
/// Recoverable problems (illegal characters, unterminated strings) go to
/// the [`DiagnosticSink`](crate::DiagnosticSink) instead; an error from
/// [`next_token()`](crate::Scanner::next_token) means scanning cannot
/// continue.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// No rule matched any prefix of the remaining input and no fallback
    /// rule exists. With a catch-all rule in the grammar this is
    /// unreachable; it guards hand-built tables.
    #[error("no rule matches input at offset {offset} (line {line})")]
    UnmatchedInput { offset: usize, line: usize },

    /// An accepting state had no action entry.
    #[error("accepting state {state} has no action")]
    InvalidAcceptState { state: u16 },

    /// A transition table failed validation.
    #[error("malformed transition table: {detail}")]
    MalformedTable { detail: String },
}
