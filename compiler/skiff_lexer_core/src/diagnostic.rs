//! Recoverable scan diagnostics and the sink they flow into.
//!
//! Illegal characters and unterminated strings do not stop the scanner;
//! they are reported here and scanning continues. Hard failures (I/O,
//! unmatched input) travel through [`ScanError`](crate::ScanError)
//! instead.

use std::fmt;

/// Receiver for recoverable diagnostics.
///
/// `Vec<Diagnostic>` is the everyday sink; a driver that wants streaming
/// reporting implements this on its own type.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// One recoverable problem, with the position of the offending lexeme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

/// The kinds of recoverable problems the scanner reports.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    /// A byte no rule matches. `rendered` is the printable form, with
    /// control bytes in caret notation (`^A` for 0x01).
    #[error("illegal character: <{rendered}>")]
    IllegalCharacter { rendered: String },
    /// A string literal ran into a line terminator or end of input before
    /// its closing quote. `partial` is the body scanned so far, without
    /// the opening quote.
    #[error("unterminated string literal: \"{partial}")]
    UnterminatedString { partial: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.kind)
    }
}

/// Render raw bytes printably: ASCII control bytes become caret notation
/// (`^A`, `^Z`, `^@`), everything else passes through as a character.
pub(crate) fn render_raw(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if b < 0x20 {
            out.push('^');
            out.push(char::from(b + 0x40));
        } else {
            out.push(char::from(b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_bytes_render_in_caret_notation() {
        assert_eq!(render_raw(&[0x01]), "^A");
        assert_eq!(render_raw(&[0x00]), "^@");
        assert_eq!(render_raw(&[0x1B]), "^[");
    }

    #[test]
    fn printable_bytes_pass_through() {
        assert_eq!(render_raw(b"a?"), "a?");
    }

    #[test]
    fn diagnostic_display_carries_position() {
        let d = Diagnostic {
            kind: DiagnosticKind::IllegalCharacter { rendered: "^A".into() },
            line: 2,
            column: 7,
            offset: 19,
        };
        assert_eq!(d.to_string(), "2:7: illegal character: <^A>");
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic {
            kind: DiagnosticKind::UnterminatedString { partial: "abc".into() },
            line: 0,
            column: 0,
            offset: 0,
        });
        assert_eq!(sink.len(), 1);
    }
}
