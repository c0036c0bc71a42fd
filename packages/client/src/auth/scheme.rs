//! Authentication schemes as a closed set of variants
//!
//! `Basic` is implemented. Other schemes are represented by a placeholder that
//! records the challenge but never becomes complete.

use http::{HeaderName, HeaderValue};

use super::basic::BasicScheme;
use super::challenge::{AuthChallenge, ChallengeTarget};
use super::credentials::Credentials;
use crate::error::{self, ChallengeError, Result};
use crate::http::HttpRequest;

/// Schemes whose credentials are bound to a single connection.
const CONNECTION_BASED: [&str; 3] = ["ntlm", "negotiate", "kerberos"];

/// A scheme with no local implementation (Digest, NTLM, Negotiate, ...).
#[derive(Debug, Clone)]
pub struct UnsupportedScheme {
    name: String,
    challenge: Option<AuthChallenge>,
    target: ChallengeTarget,
}

impl UnsupportedScheme {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_ascii_lowercase(),
            challenge: None,
            target: ChallengeTarget::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn process_challenge(&mut self, value: &str) -> Result<()> {
        let challenge = AuthChallenge::parse(value)?;
        if !challenge.is_scheme(&self.name) {
            return Err(error::malformed_challenge(ChallengeError::SchemeMismatch {
                expected: self.name.clone(),
                found: challenge.scheme().to_owned(),
            }));
        }
        self.challenge = Some(challenge);
        Ok(())
    }
}

/// A stateful authentication scheme.
///
/// Created fresh per authentication context, fed challenges through
/// [`AuthScheme::process_challenge`], and asked to [`AuthScheme::render`]
/// once complete.
#[derive(Debug, Clone)]
pub enum AuthScheme {
    Basic(BasicScheme),
    Unsupported(UnsupportedScheme),
}

impl AuthScheme {
    #[must_use]
    pub fn basic() -> Self {
        Self::Basic(BasicScheme::new())
    }

    pub fn unsupported(name: impl AsRef<str>) -> Self {
        Self::Unsupported(UnsupportedScheme::new(name))
    }

    #[must_use]
    pub fn scheme_name(&self) -> &str {
        match self {
            Self::Basic(_) => "basic",
            Self::Unsupported(scheme) => scheme.name(),
        }
    }

    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.parameter("realm")
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        match self {
            Self::Basic(scheme) => scheme.parameter(name),
            Self::Unsupported(scheme) => scheme.challenge.as_ref()?.param(name),
        }
    }

    #[must_use]
    pub fn challenge_target(&self) -> ChallengeTarget {
        match self {
            Self::Basic(scheme) => scheme.challenge_target(),
            Self::Unsupported(scheme) => scheme.target,
        }
    }

    /// Whether credentials rendered by this scheme are bound to one connection.
    #[must_use]
    pub fn is_connection_based(&self) -> bool {
        match self {
            Self::Basic(_) => false,
            Self::Unsupported(scheme) => CONNECTION_BASED.contains(&scheme.name.as_str()),
        }
    }

    /// Whether the scheme holds enough state to render a header.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Basic(scheme) => scheme.is_complete(),
            Self::Unsupported(_) => false,
        }
    }

    /// Feed a challenge header value.
    ///
    /// # Errors
    ///
    /// Returns `Kind::MalformedChallenge` if the value cannot be parsed or is
    /// for a different scheme.
    pub fn process_challenge(&mut self, value: &str) -> Result<()> {
        match self {
            Self::Basic(scheme) => scheme.process_challenge(value),
            Self::Unsupported(scheme) => scheme.process_challenge(value),
        }
    }

    /// Feed a challenge together with the header it arrived in, so the
    /// response goes out under the matching header name.
    ///
    /// # Errors
    ///
    /// Returns `Kind::MalformedChallenge` for a header other than
    /// `WWW-Authenticate`/`Proxy-Authenticate`, or a bad value.
    pub fn process_challenge_header(&mut self, name: &HeaderName, value: &str) -> Result<()> {
        let target = ChallengeTarget::from_header_name(name)?;
        self.process_challenge(value)?;
        match self {
            Self::Basic(scheme) => scheme.set_target(target),
            Self::Unsupported(scheme) => scheme.target = target,
        }
        Ok(())
    }

    /// Produce the authorization value for `credentials`.
    ///
    /// # Errors
    ///
    /// - `Kind::SchemeNotReady` if no challenge has been processed
    /// - `Kind::IncompatibleCredentials` if the credentials do not fit the scheme
    /// - `Kind::UnsupportedScheme` for placeholder schemes
    pub fn render(&self, credentials: &Credentials, request: &HttpRequest) -> Result<HeaderValue> {
        match self {
            Self::Basic(scheme) => scheme.render(credentials, request),
            Self::Unsupported(scheme) => Err(error::unsupported_scheme(scheme.name())),
        }
    }

    /// Render and pair the value with the header name for the challenging party.
    ///
    /// # Errors
    ///
    /// Same as [`AuthScheme::render`].
    pub fn authenticate(
        &self,
        credentials: &Credentials,
        request: &HttpRequest,
    ) -> Result<(HeaderName, HeaderValue)> {
        let value = self.render(credentials, request)?;
        Ok((self.challenge_target().response_header(), value))
    }
}

impl From<BasicScheme> for AuthScheme {
    fn from(scheme: BasicScheme) -> Self {
        Self::Basic(scheme)
    }
}
