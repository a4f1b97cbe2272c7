use thiserror::Error;

/// Errors raised while decoding a utility class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("empty utility class")]
    Empty,

    #[error("unknown variant prefix '{0}'")]
    UnknownVariant(String),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("invalid spacing value '{0}'")]
    InvalidSpacing(String),

    #[error("unknown utility class '{0}'")]
    UnknownUtility(String),
}
