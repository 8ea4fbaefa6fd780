//! The scanner engine: maximal-munch DFA simulation plus action dispatch.
//!
//! [`Scanner::next_token`] runs one *attempt* per call (possibly several,
//! when matches like whitespace or comments emit nothing): starting from
//! the current mode's start state it follows transitions as far as any
//! could still lead to a longer match, remembering the last accepting
//! state passed through. On a trap it rewinds to that state's mark and
//! dispatches its action.
//!
//! Two synthetic input symbols drive edge behavior. Beginning-of-line is
//! presented once at each line start, before any real byte; end-of-input
//! is presented when the reader is exhausted, letting rules that must see
//! the end (unterminated strings, unterminated comments in a grammar that
//! has such a rule) fire like any other.
//!
//! Recoverable problems go to the [`DiagnosticSink`] and scanning
//! continues; only I/O failures and genuinely unmatchable input surface
//! as [`ScanError`].

use std::io::Read;

use tracing::trace;

use crate::action::{lookup, ScanAction};
use crate::diagnostic::{render_raw, Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::error::ScanError;
use crate::source::CharSource;
use crate::tables::{AcceptKind, Mode, TransitionTable};
use crate::token::{Token, TokenKind};

/// One input symbol as seen by the automaton.
enum Symbol {
    /// Synthetic beginning-of-line; consumes no byte.
    Bol,
    Byte(u8),
    /// Synthetic end-of-input.
    End,
}

/// A table-driven scanner over a byte stream.
///
/// Generic over the reader and the diagnostic sink; `Vec<Diagnostic>` is
/// the default sink for batch use.
pub struct Scanner<R, S = Vec<Diagnostic>> {
    table: &'static TransitionTable,
    actions: &'static [ScanAction],
    source: CharSource<R>,
    mode: Mode,
    comment_depth: u32,
    sink: S,
}

impl<R: Read> Scanner<R> {
    /// Scanner over `reader` using the built-in Skiff grammar, collecting
    /// diagnostics into a `Vec`.
    pub fn new(reader: R) -> Self {
        Self::with_grammar(
            crate::grammar::transition_table(),
            crate::grammar::actions(),
            reader,
            Vec::new(),
        )
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.sink
    }

    /// Consume the scanner, keeping the collected diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.sink
    }
}

impl<R: Read, S: DiagnosticSink> Scanner<R, S> {
    /// Scanner with an explicit grammar and diagnostic sink.
    ///
    /// `actions` is indexed by DFA state id and must cover every accepting
    /// state of `table`; a missing entry surfaces as
    /// [`ScanError::InvalidAcceptState`] if that state ever wins a match.
    pub fn with_grammar(
        table: &'static TransitionTable,
        actions: &'static [ScanAction],
        reader: R,
        sink: S,
    ) -> Self {
        Self {
            table,
            actions,
            source: CharSource::new(reader),
            mode: Mode::default(),
            comment_depth: 0,
            sink,
        }
    }

    /// Current lexical mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current block-comment nesting depth.
    pub fn comment_depth(&self) -> u32 {
        self.comment_depth
    }

    /// Scan and return the next token.
    ///
    /// Returns [`TokenKind::Eof`] at end of input, and keeps returning it
    /// on every later call. Skipped matches (whitespace, comments,
    /// recovered errors) never surface; the call loops internally until a
    /// token or end of input.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        loop {
            self.source.mark_start();
            self.source.mark_end();
            let mut state = self.table.start_state(self.mode);
            let mut initial = true;
            let mut last_accept = if self.table.accept(state) == AcceptKind::Not {
                None
            } else {
                Some(state)
            };
            loop {
                let symbol = if initial && self.source.at_bol() {
                    Symbol::Bol
                } else {
                    match self.source.advance()? {
                        Some(byte) => Symbol::Byte(byte),
                        None => Symbol::End,
                    }
                };
                if initial && matches!(symbol, Symbol::End) {
                    return Ok(self.token(TokenKind::Eof, String::new()));
                }
                let class = match symbol {
                    Symbol::Bol => self.table.bol_class(),
                    Symbol::Byte(byte) => self.table.class_of_byte(byte),
                    Symbol::End => self.table.end_class(),
                };
                match self.table.next(state, class) {
                    Some(next) => {
                        state = next;
                        initial = false;
                        if self.table.accept(state) != AcceptKind::Not {
                            last_accept = Some(state);
                            self.source.mark_end();
                        }
                    }
                    None => {
                        let Some(accepted) = last_accept else {
                            return Err(ScanError::UnmatchedInput {
                                offset: self.source.offset(),
                                line: self.source.line(),
                            });
                        };
                        if self.table.accept(accepted) == AcceptKind::TrailingContext {
                            self.source.trim_trailing_newline();
                        }
                        self.source.rewind_to_mark();
                        if let Some(token) = self.dispatch(accepted)? {
                            return Ok(token);
                        }
                        // Skipped match; start a fresh attempt. A
                        // zero-length match is safe here because the
                        // rewind cleared the beginning-of-line flag.
                        break;
                    }
                }
            }
        }
    }

    /// Run the winning state's action. `Ok(None)` means the match emitted
    /// nothing and the engine should scan again.
    fn dispatch(&mut self, state: u16) -> Result<Option<Token>, ScanError> {
        let action = self
            .actions
            .get(usize::from(state))
            .copied()
            .ok_or(ScanError::InvalidAcceptState { state })?;
        let token = match action {
            ScanAction::Emit(kind) => Some(self.token(kind, self.text())),
            ScanAction::Ident => {
                let text = self.text();
                let kind = lookup(&text).unwrap_or(TokenKind::Ident);
                Some(self.token(kind, text))
            }
            ScanAction::Int => Some(self.token(TokenKind::Int, self.text())),
            ScanAction::Float => Some(self.token(TokenKind::Float, self.text())),
            ScanAction::HexInt => Some(self.token(TokenKind::HexInt, self.text())),
            ScanAction::Str => Some(self.token(TokenKind::Str, self.text())),
            ScanAction::UnterminatedStr => {
                let text = self.text();
                let partial = text.strip_prefix('"').unwrap_or(&text).to_owned();
                self.report(DiagnosticKind::UnterminatedString {
                    partial: partial.clone(),
                });
                Some(self.token(TokenKind::UnterminatedStr, partial))
            }
            ScanAction::Newline => {
                self.source.begin_line_after_match();
                None
            }
            ScanAction::Skip => None,
            ScanAction::CommentOpen => {
                self.comment_depth += 1;
                self.mode = Mode::Comment;
                trace!(depth = self.comment_depth, "comment opened");
                None
            }
            ScanAction::CommentNested => {
                self.comment_depth += 1;
                trace!(depth = self.comment_depth, "comment nested");
                None
            }
            ScanAction::CommentClose => {
                self.comment_depth = self.comment_depth.saturating_sub(1);
                if self.comment_depth == 0 {
                    self.mode = Mode::Normal;
                    trace!("comment closed");
                }
                None
            }
            ScanAction::IllegalChar => {
                let rendered = render_raw(self.source.lexeme());
                self.report(DiagnosticKind::IllegalCharacter { rendered });
                None
            }
        };
        Ok(token)
    }

    /// Build a token at the current lexeme's start position.
    fn token(&self, kind: TokenKind, text: String) -> Token {
        Token {
            kind,
            text,
            line: self.source.line(),
            column: self.source.column(),
            offset: self.source.offset(),
        }
    }

    /// The current lexeme as text. Bytes outside UTF-8 can only reach the
    /// catch-all rule, but lossy conversion keeps every path total.
    fn text(&self) -> String {
        String::from_utf8_lossy(self.source.lexeme()).into_owned()
    }

    fn report(&mut self, kind: DiagnosticKind) {
        let diagnostic = Diagnostic {
            kind,
            line: self.source.line(),
            column: self.source.column(),
            offset: self.source.offset(),
        };
        trace!(%diagnostic, "recovered");
        self.sink.report(diagnostic);
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
mod tests;
