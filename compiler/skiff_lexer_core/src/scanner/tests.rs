use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::action::ScanAction;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ScanError;
use crate::tables::{AcceptKind, Mode, TransitionTable, SYMBOLS};
use crate::token::{Token, TokenKind};
use crate::Scanner;

// Helpers

/// Scan everything, Eof token included.
fn scan_bytes(input: &[u8]) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token().unwrap();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    let diagnostics = scanner.into_diagnostics();
    (tokens, diagnostics)
}

/// Scan clean input; any diagnostic is a test failure.
fn scan(input: &str) -> Vec<Token> {
    let (tokens, diagnostics) = scan_bytes(input.as_bytes());
    assert_eq!(diagnostics, vec![], "unexpected diagnostics for {input:?}");
    tokens
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

// === Basic tokens ===

#[test]
fn empty_input_is_just_eof() {
    let tokens = scan("");
    assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    assert_eq!(tokens[0].text, "");
    assert_eq!((tokens[0].line, tokens[0].column, tokens[0].offset), (0, 0, 0));
}

#[test]
fn whitespace_only_input_is_just_eof() {
    assert_eq!(kinds(&scan("  \t  ")), vec![TokenKind::Eof]);
}

#[test]
fn identifiers_and_literals() {
    let tokens = scan("foo 42 1.5 .5 0x1F \"hi\"");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Ident,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::HexInt,
            TokenKind::Str,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        texts(&tokens),
        vec!["foo", "42", "1.5", ".5", "0x1F", "\"hi\"", ""]
    );
}

#[test]
fn string_text_keeps_its_quotes() {
    let tokens = scan("\"a b\"");
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, "\"a b\"");
}

#[test]
fn keywords_resolve_identifiers_pass_through() {
    let tokens = scan("if iffy then lets while");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::If,
            TokenKind::Ident,
            TokenKind::Then,
            TokenKind::Ident,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn punctuation() {
    let tokens = scan("( ) [ ] { } ; : , . ~ ^ %");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Tilde,
            TokenKind::Caret,
            TokenKind::Percent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn operators() {
    let tokens = scan("+ - * / < > = ! != == <= >= && ||");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equal,
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::EqualEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::AmpersandAmpersand,
            TokenKind::PipePipe,
            TokenKind::Eof,
        ]
    );
}

// === Maximal munch ===

#[test]
fn two_char_operators_win_over_their_prefixes() {
    let tokens = scan("a<=b");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Ident, TokenKind::LessEqual, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(texts(&tokens), vec!["a", "<=", "b", ""]);
}

#[test]
fn hex_literal_stops_at_the_first_non_hex_digit() {
    let tokens = scan("0x1G");
    assert_eq!(kinds(&tokens), vec![TokenKind::HexInt, TokenKind::Ident, TokenKind::Eof]);
    assert_eq!(texts(&tokens), vec!["0x1", "G", ""]);
}

#[test]
fn unfinished_line_comment_backtracks_to_the_slash() {
    // "//000" at end of input never completes a line comment, so the
    // scanner rewinds four bytes to the longest accepted match.
    let tokens = scan("//000");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Slash, TokenKind::Slash, TokenKind::Int, TokenKind::Eof]
    );
    assert_eq!(texts(&tokens), vec!["/", "/", "000", ""]);
}

#[test]
fn float_requires_digits_after_the_dot() {
    let tokens = scan("2.x");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Int, TokenKind::Dot, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(texts(&tokens), vec!["2", ".", "x", ""]);
}

#[test]
fn float_takes_the_trailing_dot_digits() {
    let tokens = scan("1.5.x");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Float, TokenKind::Dot, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(texts(&tokens), vec!["1.5", ".", "x", ""]);
}

// === Positions ===

#[test]
fn positions_across_a_newline() {
    let tokens = scan("x\ny");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!((tokens[0].line, tokens[0].column, tokens[0].offset), (0, 0, 0));
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!((tokens[1].line, tokens[1].column, tokens[1].offset), (1, 0, 2));
}

#[test]
fn columns_measure_from_the_line_start() {
    let tokens = scan("ab\ncd ef");
    assert_eq!((tokens[1].line, tokens[1].column, tokens[1].offset), (1, 0, 3));
    assert_eq!((tokens[2].line, tokens[2].column, tokens[2].offset), (1, 3, 6));
}

#[test]
fn crlf_counts_as_one_line_terminator() {
    let tokens = scan("a\r\nb");
    assert_eq!((tokens[1].line, tokens[1].column, tokens[1].offset), (1, 0, 3));
}

#[test]
fn lone_cr_counts_as_a_line_terminator() {
    let tokens = scan("a\rb");
    assert_eq!((tokens[1].line, tokens[1].column, tokens[1].offset), (1, 0, 2));
}

// === Comments ===

#[test]
fn block_comment_is_skipped() {
    let tokens = scan("1 /* anything */ 2");
    assert_eq!(kinds(&tokens), vec![TokenKind::Int, TokenKind::Int, TokenKind::Eof]);
}

#[test]
fn block_comments_nest() {
    let tokens = scan("1 /* a /* b */ c */ 2");
    assert_eq!(kinds(&tokens), vec![TokenKind::Int, TokenKind::Int, TokenKind::Eof]);
    assert_eq!(texts(&tokens), vec!["1", "2", ""]);
}

#[test]
fn comment_spanning_lines_keeps_positions_straight() {
    let tokens = scan("/* line\nline\n*/ x");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!((tokens[0].line, tokens[0].column), (2, 3));
}

#[test]
fn unclosed_comment_swallows_the_rest() {
    let mut scanner = Scanner::new(&b"x /* y"[..]);
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Ident);
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(scanner.mode(), Mode::Comment);
    assert_eq!(scanner.comment_depth(), 1);
}

#[test]
fn line_comment_is_skipped_through_its_terminator() {
    let tokens = scan("// hello\nx");
    assert_eq!(kinds(&tokens), vec![TokenKind::Ident, TokenKind::Eof]);
    assert_eq!((tokens[0].line, tokens[0].column, tokens[0].offset), (1, 0, 9));
}

#[test]
fn star_and_slash_inside_comment_do_not_close_it() {
    let tokens = scan("/* * / ** // */ x");
    assert_eq!(kinds(&tokens), vec![TokenKind::Ident, TokenKind::Eof]);
}

// === Error recovery ===

#[test]
fn illegal_byte_is_reported_and_skipped() {
    let (tokens, diagnostics) = scan_bytes(b"a \x01 b");
    assert_eq!(kinds(&tokens), vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::IllegalCharacter { rendered: "^A".into() }
    );
    assert_eq!((diagnostics[0].line, diagnostics[0].column, diagnostics[0].offset), (0, 2, 2));
}

#[test]
fn high_bytes_hit_the_catch_all_rule() {
    let (tokens, diagnostics) = scan_bytes(b"\xFF");
    assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn unterminated_string_at_end_of_input() {
    let (tokens, diagnostics) = scan_bytes(b"\"abc");
    assert_eq!(tokens[0].kind, TokenKind::UnterminatedStr);
    // The opening quote is stripped from the reported text.
    assert_eq!(tokens[0].text, "abc");
    assert_eq!((tokens[0].line, tokens[0].column, tokens[0].offset), (0, 0, 0));
    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::UnterminatedString { partial: "abc".into() }
    );
}

#[test]
fn unterminated_string_swallows_the_rest_of_the_input() {
    // The string rule only gives up at end of input, so everything after
    // the orphan quote lands in one error token.
    let (tokens, diagnostics) = scan_bytes(b"\"abc\nx");
    assert_eq!(kinds(&tokens), vec![TokenKind::UnterminatedStr, TokenKind::Eof]);
    assert_eq!(tokens[0].text, "abc\nx");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn string_literals_may_span_lines() {
    let tokens = scan("\"a\n\"b");
    assert_eq!(kinds(&tokens), vec![TokenKind::Str, TokenKind::Ident, TokenKind::Eof]);
    assert_eq!(tokens[0].text, "\"a\n\"");
    // Columns measure from the last newline *rule* match; the terminator
    // here is inside the string, so the column keeps counting through it.
    assert_eq!((tokens[1].line, tokens[1].column, tokens[1].offset), (1, 4, 4));
}

// === Fatal errors ===

// A table whose single state traps on every input.
static TRAP_CLASS_MAP: [u8; SYMBOLS] = [0; SYMBOLS];
static TRAP_ROW_MAP: [u16; 1] = [0];
static TRAP_NEXT: [i16; 1] = [-1];
static TRAP_ACCEPT: [AcceptKind; 1] = [AcceptKind::Not];
static TRAP_TABLE: TransitionTable =
    TransitionTable::new(&TRAP_CLASS_MAP, &TRAP_ROW_MAP, &TRAP_NEXT, 1, &TRAP_ACCEPT, [0, 0]);
static TRAP_ACTIONS: [ScanAction; 1] = [ScanAction::Skip];

#[test]
fn missing_action_entry_is_a_fatal_error() {
    // The real table with an empty action slice: the first winning state
    // has no action, which means the artifact is inconsistent.
    let mut scanner =
        Scanner::with_grammar(crate::grammar::transition_table(), &[], &b"x"[..], Vec::new());
    assert!(matches!(
        scanner.next_token(),
        Err(ScanError::InvalidAcceptState { .. })
    ));
}

#[test]
fn unmatchable_input_is_a_fatal_error() {
    // No rule ever accepts, so there is no state to fall back to.
    let mut scanner = Scanner::with_grammar(&TRAP_TABLE, &TRAP_ACTIONS, &b"z"[..], Vec::new());
    assert!(matches!(
        scanner.next_token(),
        Err(ScanError::UnmatchedInput { .. })
    ));
}

// === End of input ===

#[test]
fn eof_is_idempotent() {
    let mut scanner = Scanner::new(&b"x"[..]);
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Ident);
    let first = scanner.next_token().unwrap();
    assert_eq!(first.kind, TokenKind::Eof);
    for _ in 0..3 {
        assert_eq!(scanner.next_token().unwrap(), first);
    }
}

// === Buffer behavior ===

#[test]
fn identifier_longer_than_the_buffer() {
    // Default capacity is 512; one token forces the buffer to double.
    let input = "x".repeat(2000);
    let tokens = scan(&input);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].text.len(), 2000);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    assert_eq!(tokens[1].offset, 2000);
}

#[test]
fn many_tokens_through_a_small_window() {
    let input = "a b ".repeat(1000);
    let tokens = scan(&input);
    assert_eq!(tokens.len(), 2001);
    assert_eq!(tokens[1999].offset, 3998);
}

// === Properties ===

proptest! {
    #[test]
    fn scanning_terminates_and_never_errors(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut scanner = Scanner::new(&input[..]);
        let mut count = 0usize;
        loop {
            let token = scanner.next_token().unwrap();
            if token.kind == TokenKind::Eof {
                break;
            }
            count += 1;
            prop_assert!(count <= input.len() + 1, "scanner failed to make progress");
        }
    }

    #[test]
    fn scanning_is_deterministic(input in "[ -~\n]{0,200}") {
        let first = scan_bytes(input.as_bytes());
        let second = scan_bytes(input.as_bytes());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn offsets_are_strictly_increasing(input in "[a-z0-9 ]{0,200}") {
        let (tokens, _) = scan_bytes(input.as_bytes());
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].offset < pair[1].offset || pair[1].kind == TokenKind::Eof);
        }
    }
}
