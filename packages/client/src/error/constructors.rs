use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for a challenge that could not be parsed or accepted.
pub fn malformed_challenge<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::MalformedChallenge).with(e.into())
}

/// Creates an `Error` for credentials the scheme cannot encode.
pub fn incompatible_credentials<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::IncompatibleCredentials).with(e.into())
}

/// Creates an `Error` for a render attempted on an incomplete scheme.
pub fn scheme_not_ready(scheme: &str) -> Error {
    Error::new(Kind::SchemeNotReady).with(format!("{scheme} scheme has no challenge yet"))
}

/// Creates an `Error` for a scheme name with no implementation.
pub fn unsupported_scheme(scheme: &str) -> Error {
    Error::new(Kind::UnsupportedScheme).with(format!("no implementation for `{scheme}`"))
}

pub fn invalid_route<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidRoute).with(e.into())
}

pub fn invalid_header<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidHeader).with(e.into())
}
