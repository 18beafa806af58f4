use std::{fs, path::Path};

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span,
};

/// Re-terminates every line with `\n`, dropping a `\r` before it. A final
/// line without a terminator gains one.
pub fn normalize_newlines(content: &str) -> String {
    let mut normalized = String::with_capacity(content.len() + 1);

    for line in content.lines() {
        normalized.push_str(line);
        normalized.push('\n');
    }

    normalized
}

pub fn load_source(path: &Path) -> Result<String, Error> {
    let content = fs::read_to_string(path).map_err(|err| {
        Error::new(
            ErrorImpl::SourceUnreadable {
                path: path.to_string_lossy().into_owned(),
                reason: err.to_string(),
            },
            Span::default(),
        )
    })?;

    debug!(path = %path.display(), bytes = content.len(), "loaded source");
    Ok(normalize_newlines(&content))
}
