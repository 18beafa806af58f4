use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Category, Token},
    Span,
};

/// Token values grouped by category, each group in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    groups: BTreeMap<Category, Vec<String>>,
}

#[derive(Debug, Serialize)]
struct CategoryReport<'a> {
    category: Category,
    count: usize,
    values: &'a [String],
}

impl TokenTable {
    pub fn from_tokens(tokens: &[Token]) -> TokenTable {
        let mut groups: BTreeMap<Category, Vec<String>> = BTreeMap::new();

        for token in tokens {
            groups.entry(token.kind).or_default().push(token.value.clone());
        }

        TokenTable { groups }
    }

    pub fn count(&self, kind: Category) -> usize {
        self.groups.get(&kind).map_or(0, Vec::len)
    }

    pub fn values(&self, kind: Category) -> &[String] {
        self.groups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories with at least one token, in `Category::ALL` order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn report(&self) -> String {
        let mut out = String::new();

        for (kind, values) in &self.groups {
            out.push_str(&format!("{} tokens (count: {}):\n", kind, values.len()));

            if !kind.is_whitespace() {
                for value in values {
                    out.push_str(&format!("  {} ", value));
                }
            }
            out.push('\n');
        }

        out
    }

    pub fn to_json(&self) -> Result<String, Error> {
        let reports = self
            .groups
            .iter()
            .map(|(kind, values)| CategoryReport {
                category: *kind,
                count: values.len(),
                values: if kind.is_whitespace() { &[] } else { values.as_slice() },
            })
            .collect::<Vec<_>>();

        serde_json::to_string_pretty(&reports).map_err(|err| {
            Error::new(
                ErrorImpl::ReportSerialization {
                    reason: err.to_string(),
                },
                Span::default(),
            )
        })
    }
}
