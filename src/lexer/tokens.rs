use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("class");
        set.insert("int");
        set.insert("float");
        set.insert("string");
        set.insert("using");
        set.insert("namespace");
        set.insert("return");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("continue");
        set.insert("break");
        set.insert("switch");
        set.insert("case");
        set.insert("default");
        set
    };
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub enum Category {
    Number,
    StringLiteral,
    PreprocessorDirective,
    Comment,
    ReservedWord,
    Operator,
    Punctuation,
    Identifier,
    Error,
    NewLine,
    Space,
}

impl Category {
    /// Every category, in declaration order. Reports list categories in this order.
    pub const ALL: [Category; 11] = [
        Category::Number,
        Category::StringLiteral,
        Category::PreprocessorDirective,
        Category::Comment,
        Category::ReservedWord,
        Category::Operator,
        Category::Punctuation,
        Category::Identifier,
        Category::Error,
        Category::NewLine,
        Category::Space,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Number => "Number",
            Category::StringLiteral => "StringLiteral",
            Category::PreprocessorDirective => "PreprocessorDirective",
            Category::Comment => "Comment",
            Category::ReservedWord => "ReservedWord",
            Category::Operator => "Operator",
            Category::Punctuation => "Punctuation",
            Category::Identifier => "Identifier",
            Category::Error => "Error",
            Category::NewLine => "NewLine",
            Category::Space => "Space",
        }
    }

    /// Whitespace-like categories are reported by count only.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Category::NewLine | Category::Space)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: Category,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

impl Token {
    pub fn is_error(&self) -> bool {
        self.kind == Category::Error
    }
}
