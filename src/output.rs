use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::scanner::token::{Position, Token};

/// One token per line, in its textual rendering, NFKD-normalized.
pub fn render_text(tokens: &[Token]) -> String {
    let mut buf = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        buf.push_str(&token.to_string());
    }
    normalize(&buf)
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(flatten)]
    position: Position,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind(),
            value: token.value(),
            position: token.position(),
        }
    }
}

/// Pretty JSON array of `{kind, value?, row, column}` records, NFKD-normalized.
pub fn render_json(tokens: &[Token]) -> String {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    let json = serde_json::to_string_pretty(&records).expect("token records should be serializable");
    normalize(&json)
}

fn normalize(text: &str) -> String {
    text.nfkd().collect()
}
