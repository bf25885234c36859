use std::fmt;
use std::str::FromStr;

/// Kind name carried by every error token.
pub const LEXICAL_ERROR: &str = "lexical error";

/// 1-based location of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        debug_assert!(row >= 1 && column >= 1, "positions are 1-based");
        Self { row, column }
    }
}

/// Reserved words. The variant name is the exact, case-sensitive spelling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
pub enum Keyword {
    TextWindow,
    If,
    Or,
    And,
    Array,
    Sub,
    Else,
    ElseIf,
    For,
    EndFor,
    While,
    EndWhile,
    EndIf,
    Goto,
    To,
    True,
    False,
    Then,
    EndSub,
    Program,
    Step,
    Stack,
    Clock,
    File,
    Flickr,
    GraphicsWindow,
    Dictionary,
    Desktop,
    ImageList,
    Math,
    Mouse,
    Network,
    Shapes,
    Sound,
    Text,
    Timer,
    Turtle,
}

pub fn keyword_kind(word: &str) -> Option<Keyword> {
    Keyword::from_str(word).ok()
}

/// Fixed operator symbols. `Display` gives the token kind name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::VariantArray,
)]
pub enum Operator {
    #[strum(serialize = "equals")]
    Equals,
    #[strum(serialize = "period")]
    Period,
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "colon")]
    Colon,
    #[strum(serialize = "left-bracket")]
    LeftBracket,
    #[strum(serialize = "right-bracket")]
    RightBracket,
    #[strum(serialize = "left-paren")]
    LeftParen,
    #[strum(serialize = "right-paren")]
    RightParen,
    #[strum(serialize = "plus")]
    Plus,
    #[strum(serialize = "minus")]
    Minus,
    #[strum(serialize = "times")]
    Times,
    #[strum(serialize = "divide")]
    Divide,
    #[strum(serialize = "not-equal")]
    NotEqual,
    #[strum(serialize = "less")]
    Less,
    #[strum(serialize = "less-or-equal")]
    LessEqual,
    #[strum(serialize = "greater")]
    Greater,
    #[strum(serialize = "greater-or-equal")]
    GreaterEqual,
}

impl Operator {
    /// Source spelling, one or two characters.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::Period => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Divide => "/",
            Self::NotEqual => "<>",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Equals),
            "." => Some(Self::Period),
            "," => Some(Self::Comma),
            ":" => Some(Self::Colon),
            "[" => Some(Self::LeftBracket),
            "]" => Some(Self::RightBracket),
            "(" => Some(Self::LeftParen),
            ")" => Some(Self::RightParen),
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Times),
            "/" => Some(Self::Divide),
            "<>" => Some(Self::NotEqual),
            "<" => Some(Self::Less),
            "<=" => Some(Self::LessEqual),
            ">" => Some(Self::Greater),
            ">=" => Some(Self::GreaterEqual),
            _ => None,
        }
    }
}

/// Payload-free token kinds: reserved words and operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Keyword(Keyword),
    Operator(Operator),
}

impl Symbol {
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyword(k) => k.into(),
            Self::Operator(op) => op.into(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum LiteralKind {
    #[strum(serialize = "identifier")]
    Identifier,
    #[strum(serialize = "number")]
    Number,
    #[strum(serialize = "text literal")]
    Text,
}

/// A classified, positioned lexeme.
///
/// An [`Token::Error`] is terminal: nothing follows it in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Symbol {
        kind: Symbol,
        position: Position,
    },
    /// Identifiers, numbers (raw decimal text) and text literals (quotes stripped).
    Literal {
        kind: LiteralKind,
        value: String,
        position: Position,
    },
    Error {
        position: Position,
    },
}

impl Token {
    pub fn keyword(keyword: Keyword, position: Position) -> Self {
        Self::Symbol {
            kind: Symbol::Keyword(keyword),
            position,
        }
    }

    pub fn operator(operator: Operator, position: Position) -> Self {
        Self::Symbol {
            kind: Symbol::Operator(operator),
            position,
        }
    }

    pub fn literal(kind: LiteralKind, value: impl Into<String>, position: Position) -> Self {
        Self::Literal {
            kind,
            value: value.into(),
            position,
        }
    }

    pub fn error(position: Position) -> Self {
        Self::Error { position }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Symbol { kind, .. } => kind.name(),
            Self::Literal { kind, .. } => (*kind).into(),
            Self::Error { .. } => LEXICAL_ERROR,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Symbol { position, .. }
            | Self::Literal { position, .. }
            | Self::Error { position } => *position,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol { kind, position } => {
                write!(f, "<{kind}, {}, {}>", position.row, position.column)
            }
            Self::Literal {
                kind,
                value,
                position,
            } => write!(
                f,
                "<{kind}, {value}, {}, {}>",
                position.row, position.column
            ),
            Self::Error { position } => write!(
                f,
                "{LEXICAL_ERROR} (Line: {}, Position: {})",
                position.row, position.column
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::VariantArray;

    #[test]
    fn symbol_rendering() {
        let token = Token::operator(Operator::LessEqual, Position::new(2, 7));
        assert_eq!(token.to_string(), "<less-or-equal, 2, 7>");
    }

    #[test]
    fn keyword_rendering_uses_exact_spelling() {
        let token = Token::keyword(Keyword::GraphicsWindow, Position::new(1, 1));
        assert_eq!(token.to_string(), "<GraphicsWindow, 1, 1>");
    }

    #[test]
    fn literal_rendering() {
        let token = Token::literal(LiteralKind::Identifier, "total", Position::new(3, 5));
        assert_eq!(token.to_string(), "<identifier, total, 3, 5>");
    }

    #[test]
    fn empty_text_literal_rendering() {
        let token = Token::literal(LiteralKind::Text, "", Position::new(1, 4));
        assert_eq!(token.to_string(), "<text literal, , 1, 4>");
    }

    #[test]
    fn error_rendering() {
        let token = Token::error(Position::new(4, 12));
        assert_eq!(token.to_string(), "lexical error (Line: 4, Position: 12)");
        assert_eq!(token.kind(), "lexical error");
        assert!(token.is_error());
        assert_eq!(token.value(), None);
    }

    #[rstest]
    #[case("If", Some(Keyword::If))]
    #[case("ElseIf", Some(Keyword::ElseIf))]
    #[case("TextWindow", Some(Keyword::TextWindow))]
    #[case("Text", Some(Keyword::Text))]
    #[case("if", None)]
    #[case("IF", None)]
    #[case("Iffy", None)]
    #[case("", None)]
    fn keyword_lookup_is_exact(#[case] word: &str, #[case] expected: Option<Keyword>) {
        assert_eq!(keyword_kind(word), expected);
    }

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        assert_eq!(Keyword::VARIANTS.len(), 37);
        for &kw in Keyword::VARIANTS {
            assert_eq!(keyword_kind(&kw.to_string()), Some(kw));
        }
    }

    #[test]
    fn operator_table_is_consistent() {
        for &op in Operator::VARIANTS {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert!((1..=2).contains(&op.symbol().len()));
        }
        assert_eq!(Operator::from_symbol("=="), None);
        assert_eq!(Operator::from_symbol("{"), None);
    }

    #[rstest]
    #[case(Operator::Equals, "equals")]
    #[case(Operator::Period, "period")]
    #[case(Operator::NotEqual, "not-equal")]
    #[case(Operator::GreaterEqual, "greater-or-equal")]
    fn operator_kind_names(#[case] op: Operator, #[case] name: &str) {
        assert_eq!(Token::operator(op, Position::new(1, 1)).kind(), name);
    }

    #[test]
    fn position_is_shared_across_variants() {
        let pos = Position::new(5, 9);
        let tokens = [
            Token::keyword(Keyword::For, pos),
            Token::literal(LiteralKind::Number, "10", pos),
            Token::error(pos),
        ];
        assert!(tokens.iter().all(|t| t.position() == pos));
    }
}
