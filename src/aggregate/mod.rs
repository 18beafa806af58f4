//! Per-category token table.
//!
//! Groups token values by category and reports counts and values, as text
//! or as JSON. Space and NewLine groups are reported by count only.

pub mod aggregate;
