//! Error types and error reporting.
//!
//! The tokenizer itself never fails: unrecognised characters become Error
//! tokens. This module covers what surrounds it:
//!
//! - Error structures carrying the source span they refer to
//! - Reading the source file and serializing reports
//! - Promoting an Error token to a reportable error in strict mode
//! - Helpful tips for the printed diagnostic

pub mod errors;
