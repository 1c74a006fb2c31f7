use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgoError {
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),

    #[error("invalid duration: {0}s is in the future")]
    InvalidDuration(i64),
}
