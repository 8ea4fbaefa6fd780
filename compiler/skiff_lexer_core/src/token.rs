//! Token kinds and the token record the scanner emits.

/// The kind of a scanned token.
///
/// Discriminants are grouped by category: literals and identifiers first,
/// then keywords, then punctuation, with error/sentinel kinds at the top of
/// the range. The gaps leave room for new members without renumbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // ─── Identifiers & literals ───
    /// Identifier: letter followed by letters, digits, or underscores.
    Ident = 0,
    /// Decimal integer literal.
    Int = 1,
    /// Floating-point literal (`1.5`, `.5`); digits after the dot are
    /// required, so `2.` scans as an integer followed by a dot.
    Float = 2,
    /// Hexadecimal integer literal (`0x1F`).
    HexInt = 3,
    /// String literal, quotes included in the text.
    Str = 4,

    // ─── Keywords ───
    In = 16,
    If = 17,
    Car = 18,
    Cdr = 19,
    IntTy = 20,
    Let = 21,
    Then = 22,
    Else = 23,
    Print = 24,
    FloatTy = 25,
    While = 26,
    Define = 27,
    Lambda = 28,
    StringTy = 29,
    Export = 30,

    // ─── Punctuation & operators ───
    Bang = 40,
    LeftBrace = 41,
    LeftBracket = 42,
    Dot = 43,
    Comma = 44,
    RightBrace = 45,
    RightBracket = 46,
    LeftParen = 47,
    Semicolon = 48,
    Colon = 49,
    RightParen = 50,
    Tilde = 51,
    Star = 52,
    Slash = 53,
    Percent = 54,
    Plus = 55,
    Minus = 56,
    Less = 57,
    Equal = 58,
    Greater = 59,
    Caret = 60,
    BangEqual = 61,
    AmpersandAmpersand = 62,
    PipePipe = 63,
    LessEqual = 64,
    EqualEqual = 65,
    GreaterEqual = 66,

    // ─── Errors & sentinels ───
    /// String literal missing its closing quote; text is the partial body.
    UnterminatedStr = 240,
    /// End of input. Emitted once per call thereafter; text is empty.
    Eof = 255,
}

impl TokenKind {
    /// The fixed source spelling of keywords and punctuation, or `None`
    /// for kinds whose lexeme varies.
    #[must_use]
    pub fn fixed_lexeme(self) -> Option<&'static str> {
        Some(match self {
            Self::In => "in",
            Self::If => "if",
            Self::Car => "car",
            Self::Cdr => "cdr",
            Self::IntTy => "int",
            Self::Let => "let",
            Self::Then => "then",
            Self::Else => "else",
            Self::Print => "print",
            Self::FloatTy => "float",
            Self::While => "while",
            Self::Define => "define",
            Self::Lambda => "lambda",
            Self::StringTy => "string",
            Self::Export => "export",
            Self::Bang => "!",
            Self::LeftBrace => "{",
            Self::LeftBracket => "[",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::RightBrace => "}",
            Self::RightBracket => "]",
            Self::LeftParen => "(",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::RightParen => ")",
            Self::Tilde => "~",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Less => "<",
            Self::Equal => "=",
            Self::Greater => ">",
            Self::Caret => "^",
            Self::BangEqual => "!=",
            Self::AmpersandAmpersand => "&&",
            Self::PipePipe => "||",
            Self::LessEqual => "<=",
            Self::EqualEqual => "==",
            Self::GreaterEqual => ">=",
            Self::Ident
            | Self::Int
            | Self::Float
            | Self::HexInt
            | Self::Str
            | Self::UnterminatedStr
            | Self::Eof => return None,
        })
    }

    /// Whether this kind is a reserved word.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        (Self::In as u8..=Self::Export as u8).contains(&(self as u8))
    }
}

/// One scanned token: kind, lexeme text, and source position.
///
/// Positions are 0-based. `column` is a byte column measured from the most
/// recent line start; `offset` is absolute from the start of the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The matched lexeme. Empty for [`TokenKind::Eof`]; for
    /// [`TokenKind::UnterminatedStr`] the opening quote is stripped.
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

// Tokens travel through every downstream pass; keep the record small.
const _: () = assert!(std::mem::size_of::<Token>() <= 56);
