//! Lexical analysis.
//!
//! This module contains the tokenizer that classifies source text into a
//! flat stream of tokens. It handles:
//!
//! - An ordered table of regex rules, first match wins at each offset
//! - Recognition of numbers, strings, directives, comments, reserved words,
//!   operators, punctuation, identifiers, newlines and spaces
//! - Recovery from unrecognised characters as single-character Error tokens
//! - Byte spans for every token, covering the input without gaps

pub mod lexer;
pub mod tokens;
