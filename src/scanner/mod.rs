pub mod driver;
pub mod lexer;
pub mod token;

pub use driver::{Driver, DriverState};
pub use lexer::scan_line;
use token::Token;

/// Tokenize an ordered sequence of lines, stopping after the first error token.
pub fn tokenize_lines<I, S>(lines: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Driver::new().run(lines).into_tokens()
}

/// Tokenize a whole source text. Lines end at `\n` or `\r\n`.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_lines(source.lines())
}
