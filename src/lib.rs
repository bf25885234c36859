pub mod error;
pub mod output;
pub mod scanner;

pub use error::LexicalError;
pub use scanner::token::{Position, Token};
pub use scanner::{scan_line, tokenize, tokenize_lines};
