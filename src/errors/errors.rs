use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Span};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Span) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Promotes an Error token to an error pointing at the token's span.
    pub fn from_token(token: &Token) -> Self {
        Error::new(
            ErrorImpl::UnrecognisedCharacter {
                token: token.value.clone(),
            },
            token.span,
        )
    }

    pub fn get_position(&self) -> &Span {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::SourceUnreadable { .. } => "SourceUnreadable",
            ErrorImpl::ReportSerialization { .. } => "ReportSerialization",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { token } => ErrorTip::Suggestion(format!(
                "Unrecognised character: `{}`",
                token.escape_debug()
            )),
            ErrorImpl::SourceUnreadable { path, reason } => {
                ErrorTip::Suggestion(format!("Unable to open {}: {}", path, reason))
            }
            ErrorImpl::ReportSerialization { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedCharacter { token: String },
    #[error("unable to read {path:?}: {reason}")]
    SourceUnreadable { path: String, reason: String },
    #[error("error serializing token table: {reason}")]
    ReportSerialization { reason: String },
}
