use std::fmt::Display;

use crate::lexer::tokens::{Category, Token};

pub const RESET: &str = "\x1b[0m";

/// An ANSI SGR prefix written before a token's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style(pub &'static str);

impl Style {
    pub const NEUTRAL: Style = Style("");

    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self.0, text, RESET)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn style_for(kind: Category) -> Style {
    match kind {
        Category::Number => Style("\x1b[33m"),
        Category::StringLiteral => Style("\x1b[32m"),
        Category::PreprocessorDirective => Style("\x1b[33m"),
        Category::Comment => Style("\x1b[34m"),
        Category::ReservedWord => Style("\x1b[35m"),
        Category::Operator => Style("\x1b[36m"),
        Category::Punctuation => Style("\x1b[31m"),
        Category::Identifier => Style(RESET),
        // red background
        Category::Error => Style("\x1b[41m"),
        Category::NewLine | Category::Space => Style::NEUTRAL,
    }
}

/// Concatenates token texts. With `color`, every token is wrapped in its
/// category's style and followed by a reset.
pub fn render(tokens: &[Token], color: bool) -> String {
    if !color {
        return tokens.iter().map(|token| token.value.as_str()).collect();
    }

    tokens
        .iter()
        .map(|token| style_for(token.kind).paint(&token.value))
        .collect()
}
