//! Semantic actions attached to accepting DFA states.

use crate::token::TokenKind;

/// What the dispatcher does when an accepting state wins.
///
/// One entry per DFA state lives alongside the transition table; the
/// variants that carry no payload get their data (the lexeme, positions)
/// from the scanner at dispatch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanAction {
    /// Emit a token with a fixed kind (punctuation, operators).
    Emit(TokenKind),
    /// Emit an identifier, or the keyword it spells.
    Ident,
    /// Emit a decimal integer literal.
    Int,
    /// Emit a floating-point literal.
    Float,
    /// Emit a hexadecimal integer literal.
    HexInt,
    /// Emit a string literal.
    Str,
    /// Report an unterminated string and emit the partial body.
    UnterminatedStr,
    /// Count a line terminator and emit nothing.
    Newline,
    /// Emit nothing (whitespace, comment interior).
    Skip,
    /// Enter comment mode (or deepen it) on `/*`.
    CommentOpen,
    /// Deepen comment nesting on `/*` inside a comment.
    CommentNested,
    /// Close one comment level on `*/`; depth zero resumes normal mode.
    CommentClose,
    /// Report an illegal character and emit nothing.
    IllegalChar,
}

/// Resolve an identifier lexeme to its keyword kind, if it is one.
///
/// Bucketed by length first: Skiff keywords are 2 to 6 bytes, so most
/// identifiers fall through on the length check alone.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let kind = match text.len() {
        2 => match text {
            "in" => TokenKind::In,
            "if" => TokenKind::If,
            _ => return None,
        },
        3 => match text {
            "car" => TokenKind::Car,
            "cdr" => TokenKind::Cdr,
            "int" => TokenKind::IntTy,
            "let" => TokenKind::Let,
            _ => return None,
        },
        4 => match text {
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            _ => return None,
        },
        5 => match text {
            "print" => TokenKind::Print,
            "float" => TokenKind::FloatTy,
            "while" => TokenKind::While,
            _ => return None,
        },
        6 => match text {
            "define" => TokenKind::Define,
            "lambda" => TokenKind::Lambda,
            "string" => TokenKind::StringTy,
            "export" => TokenKind::Export,
            _ => return None,
        },
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_resolves_to_its_kind() {
        for kind in [
            TokenKind::In,
            TokenKind::If,
            TokenKind::Car,
            TokenKind::Cdr,
            TokenKind::IntTy,
            TokenKind::Let,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Print,
            TokenKind::FloatTy,
            TokenKind::While,
            TokenKind::Define,
            TokenKind::Lambda,
            TokenKind::StringTy,
            TokenKind::Export,
        ] {
            let spelling = kind.fixed_lexeme().unwrap();
            assert_eq!(lookup(spelling), Some(kind), "keyword {spelling:?}");
        }
    }

    #[test]
    fn non_keywords_fall_through() {
        assert_eq!(lookup("iffy"), None);
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup("lets"), None);
        assert_eq!(lookup("exported"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(lookup("If"), None);
        assert_eq!(lookup("WHILE"), None);
    }
}
