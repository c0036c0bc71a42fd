//! Challenge parsing for `WWW-Authenticate` and `Proxy-Authenticate` values
//!
//! Accepts `Scheme name=value, name2="quoted value"` or `Scheme token68`.

use std::iter::Peekable;
use std::str::Chars;

use http::HeaderName;
use http::header::{AUTHORIZATION, PROXY_AUTHENTICATE, PROXY_AUTHORIZATION, WWW_AUTHENTICATE};

use crate::error::{self, ChallengeError, Result};

/// Which party issued a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengeTarget {
    /// The origin server (`WWW-Authenticate`)
    #[default]
    Target,
    /// A proxy (`Proxy-Authenticate`)
    Proxy,
}

impl ChallengeTarget {
    /// Classify a challenge header name.
    ///
    /// # Errors
    ///
    /// Returns `Kind::MalformedChallenge` for any other header.
    pub fn from_header_name(name: &HeaderName) -> Result<Self> {
        if name == PROXY_AUTHENTICATE {
            Ok(Self::Proxy)
        } else if name == WWW_AUTHENTICATE {
            Ok(Self::Target)
        } else {
            Err(error::malformed_challenge(ChallengeError::NotAChallengeHeader(
                name.as_str().to_owned(),
            )))
        }
    }

    /// Header that carries the response to a challenge from this party.
    #[must_use]
    pub fn response_header(self) -> HeaderName {
        match self {
            Self::Target => AUTHORIZATION,
            Self::Proxy => PROXY_AUTHORIZATION,
        }
    }
}

/// A parsed challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthChallenge {
    scheme: String,
    params: Vec<(String, String)>,
    token68: Option<String>,
}

impl AuthChallenge {
    /// Parse a single challenge header value.
    ///
    /// # Errors
    ///
    /// Returns `Kind::MalformedChallenge` if the scheme token is absent or a
    /// parameter is not well formed.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(error::malformed_challenge(ChallengeError::Empty));
        }

        let scheme_end = value
            .find(|c: char| c.is_ascii_whitespace() || c == ',')
            .unwrap_or(value.len());
        let scheme = &value[..scheme_end];
        if scheme.is_empty() || scheme.contains('=') || scheme.contains('"') {
            return Err(error::malformed_challenge(ChallengeError::MissingScheme));
        }

        let rest = value[scheme_end..].trim();
        let mut challenge = Self {
            scheme: scheme.to_owned(),
            params: Vec::new(),
            token68: None,
        };
        if rest.is_empty() {
            return Ok(challenge);
        }
        if is_token68(rest) {
            challenge.token68 = Some(rest.to_owned());
            return Ok(challenge);
        }
        challenge.params = parse_params(rest)?;
        Ok(challenge)
    }

    /// Scheme name as it appeared on the wire.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[must_use]
    pub fn is_scheme(&self, name: &str) -> bool {
        self.scheme.eq_ignore_ascii_case(name)
    }

    /// Parameter value by case-insensitive name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.param("realm")
    }

    #[must_use]
    pub fn token68(&self) -> Option<&str> {
        self.token68.as_deref()
    }
}

fn is_token68(rest: &str) -> bool {
    let unpadded = rest.trim_end_matches('=');
    !unpadded.is_empty()
        && unpadded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '+' | '/'))
}

fn parse_params(input: &str) -> Result<Vec<(String, String)>> {
    let mut chars = input.chars().peekable();
    let mut params = Vec::new();

    loop {
        skip_while(&mut chars, |c| c.is_ascii_whitespace() || c == ',');
        if chars.peek().is_none() {
            return Ok(params);
        }

        let name = take_while(&mut chars, |c| !(c == '=' || c == ',' || c.is_ascii_whitespace()));
        if name.is_empty() {
            return Err(error::malformed_challenge(ChallengeError::EmptyParamName));
        }
        skip_while(&mut chars, |c| c.is_ascii_whitespace());
        if chars.next_if_eq(&'=').is_none() {
            return Err(error::malformed_challenge(ChallengeError::MissingValue(name)));
        }
        skip_while(&mut chars, |c| c.is_ascii_whitespace());

        let value = if chars.next_if_eq(&'"').is_some() {
            quoted_string(&mut chars).ok_or_else(|| {
                error::malformed_challenge(ChallengeError::UnterminatedQuote(name.clone()))
            })?
        } else {
            take_while(&mut chars, |c| c != ',').trim_end().to_owned()
        };
        params.push((name.to_ascii_lowercase(), value));
    }
}

/// Reads up to the closing quote, honouring backslash escapes.
fn quoted_string(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut value = String::new();
    loop {
        match chars.next()? {
            '"' => return Some(value),
            '\\' => value.push(chars.next()?),
            c => value.push(c),
        }
    }
}

fn take_while(chars: &mut Peekable<Chars<'_>>, pred: impl Fn(char) -> bool) -> String {
    let mut out = String::new();
    while let Some(c) = chars.next_if(|c| pred(*c)) {
        out.push(c);
    }
    out
}

fn skip_while(chars: &mut Peekable<Chars<'_>>, pred: impl Fn(char) -> bool) {
    while chars.next_if(|c| pred(*c)).is_some() {}
}
