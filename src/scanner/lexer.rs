use winnow::combinator::{alt, delimited, opt, peek};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};
use winnow::token::{any, one_of, take, take_till, take_while};

use crate::scanner::token::{LiteralKind, Operator, Position, Token, keyword_kind};

type Input<'a> = LocatingSlice<&'a str>;

/// Characters that can never start or continue a lexeme.
const INVALID: [char; 4] = ['{', '}', '!', '_'];

/// What a single scanning step recognized at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Lexeme<'a> {
    Comment,
    Word(&'a str),
    Text(&'a str),
    Number(&'a str),
    Operator(Operator),
    Invalid,
    Skip,
}

/// Letters only (`L*` categories); letter-numbers such as `Ⅻ` and combining
/// marks do not start a word.
fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Any Unicode digit, not only ASCII, but never a letter-number.
fn is_digit(c: char) -> bool {
    c.is_numeric() && !c.is_alphabetic()
}

fn is_word_char(c: char) -> bool {
    is_letter(c) || c.is_numeric() || c == '_'
}

fn word<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (
        any.verify(|c: &char| is_letter(*c)),
        take_while(0.., is_word_char),
    )
        .take()
        .parse_next(input)
}

/// Digits with at most one period; a second period ends the number.
fn number<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (
        take_while(1.., is_digit),
        opt(('.', take_while(0.., is_digit))),
    )
        .take()
        .parse_next(input)
}

/// Quoted text, quotes stripped. An unterminated literal runs to end of line.
fn text_literal<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    delimited('"', take_till(0.., '"'), opt('"')).parse_next(input)
}

fn operator(input: &mut Input<'_>) -> ModalResult<Operator> {
    alt((
        take(2usize).verify_map(Operator::from_symbol),
        take(1usize).verify_map(Operator::from_symbol),
    ))
    .parse_next(input)
}

fn lexeme<'a>(input: &mut Input<'a>) -> ModalResult<Lexeme<'a>> {
    let c = peek(any::<_, ErrMode<ContextError>>).parse_next(input)?;
    match c {
        '\'' => Ok(Lexeme::Comment),
        '"' => text_literal.map(Lexeme::Text).parse_next(input),
        c if is_letter(c) => word.map(Lexeme::Word).parse_next(input),
        c if is_digit(c) => number.map(Lexeme::Number).parse_next(input),
        c if INVALID.contains(&c) => one_of(INVALID).value(Lexeme::Invalid).parse_next(input),
        _ => alt((operator.map(Lexeme::Operator), any.value(Lexeme::Skip))).parse_next(input),
    }
}

/// Converts byte locations into character columns, walking forward only.
struct Columns<'a> {
    text: &'a str,
    byte: usize,
    column: usize,
}

impl<'a> Columns<'a> {
    fn new(text: &'a str, column: usize) -> Self {
        Self {
            text,
            byte: 0,
            column,
        }
    }

    fn at(&mut self, byte: usize) -> usize {
        self.column += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.column
    }
}

/// Scan one line (without its terminator) starting at the 0-based character
/// `start_column`. `row` is the 0-based line index; emitted positions are 1-based.
///
/// Scanning stops at a comment, at the end of the line, or right after an
/// error token.
pub fn scan_line(line: &str, row: usize, start_column: usize) -> Vec<Token> {
    let Some((offset, _)) = line.char_indices().nth(start_column) else {
        return Vec::new();
    };
    let rest = &line[offset..];
    let mut input = LocatingSlice::new(rest);
    let mut columns = Columns::new(rest, start_column);
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let column = columns.at(input.current_token_start());
        let position = Position::new(row + 1, column + 1);
        let Ok(step) = lexeme(&mut input) else {
            break;
        };
        match step {
            Lexeme::Comment => break,
            Lexeme::Word(word) => tokens.push(match keyword_kind(word) {
                Some(keyword) => Token::keyword(keyword, position),
                None => Token::literal(LiteralKind::Identifier, word, position),
            }),
            Lexeme::Text(text) => tokens.push(Token::literal(LiteralKind::Text, text, position)),
            Lexeme::Number(digits) => {
                tokens.push(Token::literal(LiteralKind::Number, digits, position))
            }
            Lexeme::Operator(op) => tokens.push(Token::operator(op, position)),
            Lexeme::Invalid => {
                tokens.push(Token::error(position));
                break;
            }
            Lexeme::Skip => {}
        }
    }

    tokens
}
