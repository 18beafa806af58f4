#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod aggregate;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod render;
pub mod source;

/// Byte offsets `[start, end)` into the scanned source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the 1-based line number, the line's text and the column of `position`.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


/// Formats an error as a source excerpt with a caret under the offending column.
pub fn format_error(error: &Error, content: &str, file: &Path) -> String {
    /*
        Error: name (tip)
        -> input.txt
          |
        2 | int b = @;
          | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

    let Some((line, line_text, line_pos)) = get_line_at_position(content, error.get_position().start)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (excerpt, removed_whitespace) = remove_starting_whitespace(&line_text, line_pos);
    out.push_str(&format!("{} | {}\n", line_string, excerpt.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, content: &str, file: &Path) {
    eprint!("{}", format_error(error, content, file));
}

// Drops leading whitespace unless `keep_from` falls inside it. Returns the
// excerpt with tabs shown as single spaces, so one column is one character,
// and the number of characters removed.
fn remove_starting_whitespace(string: &str, keep_from: usize) -> (String, usize) {
    let trimmed = string.trim_start();
    let removed_bytes = string.len() - trimmed.len();

    let (excerpt, removed) = if keep_from < removed_bytes {
        (string, 0)
    } else {
        (trimmed, string[..removed_bytes].chars().count())
    };

    (excerpt.replace('\t', " "), removed)
}
