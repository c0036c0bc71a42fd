pub mod classification;
pub mod constructors;
pub mod types;

pub use constructors::*;
pub use types::{Error, Inner, Kind, Result};

/// Detail errors from challenge parsing, carried as the `source` of a
/// `Kind::MalformedChallenge` error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeError {
    #[error("challenge is empty")]
    Empty,
    #[error("challenge has no scheme token")]
    MissingScheme,
    #[error("scheme `{found}` is not handled by the {expected} scheme")]
    SchemeMismatch { expected: String, found: String },
    #[error("unterminated quoted string in parameter `{0}`")]
    UnterminatedQuote(String),
    #[error("parameter has an empty name")]
    EmptyParamName,
    #[error("parameter `{0}` has no value")]
    MissingValue(String),
    #[error("`{0}` is not a challenge header")]
    NotAChallengeHeader(String),
}
