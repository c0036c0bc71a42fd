//! Basic authentication scheme (RFC 7617)

use std::io::Write;

use base64::prelude::BASE64_STANDARD;
use base64::{Engine, write::EncoderWriter};
use http::HeaderValue;
use zeroize::Zeroizing;

use super::challenge::{AuthChallenge, ChallengeTarget};
use super::credentials::Credentials;
use crate::config::CredentialCharset;
use crate::error::{self, ChallengeError, Result};
use crate::http::HttpRequest;

/// Build `Basic base64(username:password)` with the pair encoded in `charset`.
///
/// The value is marked sensitive.
///
/// # Errors
///
/// Returns `Kind::IncompatibleCredentials` if `username` contains `:` (RFC 7617
/// forbids it in the user-id) or the pair is not representable in `charset`.
pub fn basic_auth(
    username: &str,
    password: &str,
    charset: CredentialCharset,
) -> Result<HeaderValue> {
    if username.contains(':') {
        return Err(error::incompatible_credentials("Basic user-id must not contain ':'"));
    }
    let pair = Zeroizing::new(format!("{username}:{password}"));
    let bytes = Zeroizing::new(charset.encode(&pair)?);

    let mut buf = Zeroizing::new(b"Basic ".to_vec());
    {
        let mut encoder = EncoderWriter::new(&mut *buf, &BASE64_STANDARD);
        encoder.write_all(&bytes).map_err(error::invalid_header)?;
        encoder.finish().map_err(error::invalid_header)?;
    }
    let mut header = HeaderValue::from_bytes(&buf).map_err(error::invalid_header)?;
    header.set_sensitive(true);
    Ok(header)
}

/// Decode the base64 part of a `Basic` credential into `(username, password)`.
///
/// # Errors
///
/// Returns `Kind::InvalidHeader` for invalid base64, non UTF-8 content or a
/// missing `:` separator.
pub fn decode_basic_auth(encoded: &str) -> Result<(String, String)> {
    let decoded = BASE64_STANDARD
        .decode(encoded)
        .map_err(|_| error::invalid_header("invalid base64 in basic credentials"))?;

    let credentials = String::from_utf8(decoded)
        .map_err(|_| error::invalid_header("invalid UTF-8 in basic credentials"))?;

    credentials
        .split_once(':')
        .map(|(user, pass)| (user.to_owned(), pass.to_owned()))
        .ok_or_else(|| error::invalid_header("basic credentials have no ':' separator"))
}

/// Stateful Basic scheme: complete after a single challenge.
#[derive(Debug, Clone, Default)]
pub struct BasicScheme {
    challenge: Option<AuthChallenge>,
    target: ChallengeTarget,
    charset: CredentialCharset,
}

impl BasicScheme {
    pub const NAME: &'static str = "Basic";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_charset(charset: CredentialCharset) -> Self {
        Self {
            charset,
            ..Self::default()
        }
    }

    /// Record a challenge. Processing the same challenge again leaves the
    /// scheme in the same state.
    ///
    /// # Errors
    ///
    /// Returns `Kind::MalformedChallenge` if the value cannot be parsed or names
    /// another scheme. The scheme state is left untouched in that case.
    pub fn process_challenge(&mut self, value: &str) -> Result<()> {
        let challenge = AuthChallenge::parse(value)?;
        if !challenge.is_scheme(Self::NAME) {
            return Err(error::malformed_challenge(ChallengeError::SchemeMismatch {
                expected: Self::NAME.to_owned(),
                found: challenge.scheme().to_owned(),
            }));
        }
        if challenge
            .param("charset")
            .is_some_and(|charset| charset.eq_ignore_ascii_case("utf-8"))
        {
            self.charset = CredentialCharset::Utf8;
        }
        tracing::trace!(realm = ?challenge.realm(), "basic challenge processed");
        self.challenge = Some(challenge);
        Ok(())
    }

    pub(crate) fn set_target(&mut self, target: ChallengeTarget) {
        self.target = target;
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.challenge.is_some()
    }

    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.challenge.as_ref()?.realm()
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.challenge.as_ref()?.param(name)
    }

    #[must_use]
    pub fn challenge_target(&self) -> ChallengeTarget {
        self.target
    }

    #[must_use]
    pub fn charset(&self) -> CredentialCharset {
        self.charset
    }

    /// Render `Basic base64(principal:secret)`. Deterministic for the same
    /// credentials and scheme state.
    ///
    /// # Errors
    ///
    /// - `Kind::SchemeNotReady` if no challenge was processed
    /// - `Kind::IncompatibleCredentials` for credentials that are not a
    ///   principal/secret pair, a principal containing `:`, or a pair not
    ///   encodable in the scheme charset
    pub fn render(
        &self,
        credentials: &Credentials,
        _request: &HttpRequest,
    ) -> Result<HeaderValue> {
        if !self.is_complete() {
            return Err(error::scheme_not_ready(Self::NAME));
        }
        let creds = credentials.as_username_password().ok_or_else(|| {
            error::incompatible_credentials(format!(
                "Basic requires username/password credentials, got {}",
                credentials.kind()
            ))
        })?;

        basic_auth(creds.username(), creds.password(), self.charset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest::get("/").unwrap()
    }

    fn ready_scheme() -> BasicScheme {
        let mut scheme = BasicScheme::new();
        scheme.process_challenge("BASIC realm=auth-realm").unwrap();
        scheme
    }

    #[test]
    fn test_basic_auth_header() {
        let header = basic_auth("user", "secret", CredentialCharset::Utf8).unwrap();
        assert_eq!(header, "Basic dXNlcjpzZWNyZXQ=");
        assert!(header.is_sensitive());

        let header = basic_auth("user", "", CredentialCharset::Utf8).unwrap();
        assert_eq!(header, "Basic dXNlcjo=");
    }

    #[test]
    fn test_known_value() {
        // RFC 7617: Aladdin:open sesame
        let header = basic_auth("Aladdin", "open sesame", CredentialCharset::Utf8).unwrap();
        assert_eq!(header, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn test_decode_basic_auth() {
        let header = basic_auth("user@domain", "p@ss:word!", CredentialCharset::Utf8).unwrap();
        let encoded = header.to_str().unwrap().trim_start_matches("Basic ");
        let (user, pass) = decode_basic_auth(encoded).unwrap();
        assert_eq!(user, "user@domain");
        assert_eq!(pass, "p@ss:word!");
        assert!(decode_basic_auth("!@#invalid").is_err());
    }

    #[test]
    fn test_colon_in_username_is_incompatible() {
        let err = basic_auth("us:er", "pw", CredentialCharset::Utf8).unwrap_err();
        assert!(err.is_incompatible_credentials());

        let err = ready_scheme()
            .render(&Credentials::basic("us:er", "pw"), &request())
            .unwrap_err();
        assert!(err.is_incompatible_credentials());
    }

    #[test]
    fn test_render_after_challenge() {
        let scheme = ready_scheme();
        assert!(scheme.is_complete());
        assert_eq!(scheme.realm(), Some("auth-realm"));

        let header = scheme.render(&Credentials::basic("user", "secret"), &request()).unwrap();
        assert_eq!(header, "Basic dXNlcjpzZWNyZXQ=");
        assert!(header.is_sensitive());
    }

    #[test]
    fn test_render_is_deterministic() {
        let scheme = ready_scheme();
        let creds = Credentials::basic("user", "secret");
        let first = scheme.render(&creds, &request()).unwrap();
        let second = scheme.render(&creds, &request()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_before_challenge_is_not_ready() {
        let err = BasicScheme::new()
            .render(&Credentials::basic("user", "secret"), &request())
            .unwrap_err();
        assert!(err.is_scheme_not_ready());
    }

    #[test]
    fn test_token_credentials_are_incompatible() {
        let err = ready_scheme()
            .render(&Credentials::token("abc"), &request())
            .unwrap_err();
        assert!(err.is_incompatible_credentials());
    }

    #[test]
    fn test_repeated_challenge_is_idempotent() {
        let mut scheme = ready_scheme();
        let before = format!("{scheme:?}");
        scheme.process_challenge("BASIC realm=auth-realm").unwrap();
        assert_eq!(format!("{scheme:?}"), before);
        assert!(scheme.is_complete());
    }

    #[test]
    fn test_foreign_scheme_is_rejected_and_state_kept() {
        let mut scheme = BasicScheme::new();
        let err = scheme.process_challenge(r#"Digest realm="x", nonce="y""#).unwrap_err();
        assert!(err.is_malformed_challenge());
        assert!(!scheme.is_complete());

        let err = scheme.process_challenge(r#"realm="x""#).unwrap_err();
        assert!(err.is_malformed_challenge());
        assert!(!scheme.is_complete());
    }

    #[test]
    fn test_latin1_charset_and_utf8_override() {
        let mut scheme = BasicScheme::with_charset(CredentialCharset::Iso8859_1);
        scheme.process_challenge(r#"Basic realm="r""#).unwrap();
        let header = scheme.render(&Credentials::basic("jos\u{e9}", "pw"), &request()).unwrap();
        assert_eq!(header, "Basic am9z6Tpwdw==");

        let err = scheme
            .render(&Credentials::basic("euro\u{20ac}", "pw"), &request())
            .unwrap_err();
        assert!(err.is_incompatible_credentials());

        scheme
            .process_challenge(r#"Basic realm="r", charset="UTF-8""#)
            .unwrap();
        assert_eq!(scheme.charset(), CredentialCharset::Utf8);
        assert!(scheme.render(&Credentials::basic("euro\u{20ac}", "pw"), &request()).is_ok());
    }
}
