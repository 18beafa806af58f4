//! Terminal rendering of a token stream.
//!
//! Maps every category to an ANSI style and writes the styled source back
//! out. Error tokens get a highlighted background.

pub mod render;
