use crate::error::LexicalError;
use crate::scanner::lexer::scan_line;
use crate::scanner::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Reading,
    StoppedEof,
    StoppedError,
}

impl DriverState {
    pub fn is_stopped(self) -> bool {
        self != Self::Reading
    }
}

/// Accumulates tokens for a whole document, one line at a time.
///
/// The first error token stops the driver; lines fed afterwards are ignored.
#[derive(Debug, Clone)]
pub struct Driver {
    tokens: Vec<Token>,
    row: usize,
    state: DriverState,
    error_line: Option<String>,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            row: 0,
            state: DriverState::Reading,
            error_line: None,
        }
    }

    pub fn feed_line(&mut self, line: &str) -> DriverState {
        if self.state.is_stopped() {
            return self.state;
        }
        self.tokens.extend(scan_line(line, self.row, 0));
        self.row += 1;
        if self.tokens.last().is_some_and(Token::is_error) {
            self.state = DriverState::StoppedError;
            self.error_line = Some(line.to_owned());
        }
        self.state
    }

    /// Signal that the line source is exhausted.
    pub fn finish_input(&mut self) -> DriverState {
        if self.state == DriverState::Reading {
            self.state = DriverState::StoppedEof;
        }
        self.state
    }

    /// Feed lines until the source runs dry or an error stops the driver.
    /// No line is pulled from `lines` after the stop.
    pub fn run<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if self.feed_line(line.as_ref()).is_stopped() {
                return self;
            }
        }
        self.finish_input();
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Number of lines scanned so far.
    pub fn rows(&self) -> usize {
        self.row
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Diagnostic for the error that stopped the driver, if any.
    pub fn lexical_error(&self) -> Option<LexicalError> {
        let line = self.error_line.as_deref()?;
        let position = self.tokens.last()?.position();
        LexicalError::in_line(line, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::token::{LiteralKind, Operator, Position};
    use std::cell::Cell;

    #[test]
    fn starts_reading() {
        let driver = Driver::new();
        assert_eq!(driver.state(), DriverState::Reading);
        assert!(driver.tokens().is_empty());
    }

    #[test]
    fn rows_advance_per_line() {
        let driver = Driver::new().run(["x = 5", "y = x + 2"]);
        assert_eq!(driver.state(), DriverState::StoppedEof);
        assert_eq!(driver.rows(), 2);
        let tokens = driver.into_tokens();
        assert_eq!(tokens.len(), 8);
        assert_eq!(
            tokens[3],
            Token::literal(LiteralKind::Identifier, "y", Position::new(2, 1))
        );
        assert_eq!(
            tokens[6],
            Token::operator(Operator::Plus, Position::new(2, 7))
        );
    }

    #[test]
    fn blank_lines_count_as_rows() {
        let tokens = Driver::new().run(["", "  ", "z"]).into_tokens();
        assert_eq!(
            tokens,
            vec![Token::literal(
                LiteralKind::Identifier,
                "z",
                Position::new(3, 1)
            )]
        );
    }

    #[test]
    fn error_stops_the_document() {
        let driver = Driver::new().run(["a = 1 { b", "c = 2"]);
        assert_eq!(driver.state(), DriverState::StoppedError);
        assert_eq!(driver.rows(), 1);
        let rendered: Vec<String> = driver.tokens().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "<identifier, a, 1, 1>",
                "<equals, 1, 3>",
                "<number, 1, 1, 5>",
                "lexical error (Line: 1, Position: 7)",
            ]
        );
    }

    #[test]
    fn no_lines_pulled_after_error() {
        let pulled = Cell::new(0);
        let lines = ["ok", "!", "never", "scanned"].into_iter().inspect(|_| {
            pulled.set(pulled.get() + 1);
        });
        let driver = Driver::new().run(lines);
        assert_eq!(driver.state(), DriverState::StoppedError);
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn stopped_states_are_terminal() {
        let mut driver = Driver::new();
        driver.feed_line("}");
        assert_eq!(driver.feed_line("x"), DriverState::StoppedError);
        assert_eq!(driver.finish_input(), DriverState::StoppedError);
        assert_eq!(driver.tokens().len(), 1);

        let mut driver = Driver::new();
        assert_eq!(driver.finish_input(), DriverState::StoppedEof);
        assert_eq!(driver.feed_line("x"), DriverState::StoppedEof);
        assert!(driver.tokens().is_empty());
    }

    #[test]
    fn lexical_error_points_at_character() {
        let driver = Driver::new().run(["x = 1", "total = a!"]);
        let err = driver.lexical_error().expect("driver stopped on an error");
        assert_eq!(err.position(), Position::new(2, 10));
        assert_eq!(err.character(), '!');
    }

    #[test]
    fn no_lexical_error_on_clean_input() {
        let driver = Driver::new().run(["If x Then", "EndIf"]);
        assert!(driver.lexical_error().is_none());
    }
}
