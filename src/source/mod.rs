//! Loading the text to scan.
//!
//! Reads a whole file up front and normalizes its line endings to `\n`,
//! the only newline the tokenizer recognises.

pub mod source;
