use thiserror::Error;

/// Returned when parsing a [`Language`](crate::Language) from a code or name
/// that no stemmer supports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);
