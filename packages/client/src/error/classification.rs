use super::types::{Error, Kind};

impl Error {
    /// Returns true if a challenge header could not be accepted.
    #[must_use]
    pub fn is_malformed_challenge(&self) -> bool {
        matches!(self.inner.kind, Kind::MalformedChallenge)
    }

    /// Returns true if the credentials did not fit the scheme.
    #[must_use]
    pub fn is_incompatible_credentials(&self) -> bool {
        matches!(self.inner.kind, Kind::IncompatibleCredentials)
    }

    /// Returns true if a scheme was asked to render before it was complete.
    ///
    /// This is a contract violation in the calling pipeline and should not be retried.
    #[must_use]
    pub fn is_scheme_not_ready(&self) -> bool {
        matches!(self.inner.kind, Kind::SchemeNotReady)
    }

    #[must_use]
    pub fn is_unsupported_scheme(&self) -> bool {
        matches!(self.inner.kind, Kind::UnsupportedScheme)
    }

    #[must_use]
    pub fn is_invalid_route(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidRoute)
    }

    #[must_use]
    pub fn is_invalid_header(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidHeader)
    }

    /// Returns true when retrying the request without authentication could
    /// still succeed. Contract violations are never recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.inner.kind,
            Kind::IncompatibleCredentials | Kind::UnsupportedScheme | Kind::MalformedChallenge
        )
    }
}
