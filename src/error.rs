use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::scanner::token::Position;

/// Human-facing report for the error token that stopped a document.
///
/// The token stream itself never fails; this only exists so front ends can
/// point at the offending character.
#[derive(Error, Debug, Diagnostic)]
#[error("lexical error at line {}, position {}: unexpected '{character}'", .position.row, .position.column)]
#[diagnostic(
    code(sbtok::lexical),
    help("braces, `!` and a bare `_` are only allowed inside text literals")
)]
pub struct LexicalError {
    position: Position,
    character: char,
    #[label("here")]
    span: SourceSpan,
    #[source_code]
    src: NamedSource<String>,
}

impl LexicalError {
    /// Build from the offending line alone. `None` if `position` is not on it.
    pub fn in_line(line: &str, position: Position) -> Option<Self> {
        let (offset, character) = line.char_indices().nth(position.column.checked_sub(1)?)?;
        Some(Self {
            position,
            character,
            span: SourceSpan::new(offset.into(), character.len_utf8()),
            src: NamedSource::new(format!("line {}", position.row), line.to_owned()),
        })
    }

    /// Build against the whole document so reports show real line numbers.
    pub fn in_source(name: impl AsRef<str>, source: &str, position: Position) -> Option<Self> {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(position.row.checked_sub(1)?)
            .map(str::len)
            .sum();
        let line = source[line_start..].lines().next()?;
        let (offset, character) = line.char_indices().nth(position.column.checked_sub(1)?)?;
        Some(Self {
            position,
            character,
            span: SourceSpan::new((line_start + offset).into(), character.len_utf8()),
            src: NamedSource::new(name, source.to_owned()),
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}
