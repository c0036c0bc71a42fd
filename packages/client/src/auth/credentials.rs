//! Credentials used to produce authorization header values

use std::fmt;

use zeroize::Zeroizing;

/// A principal/secret pair.
#[derive(Clone)]
pub struct UsernamePasswordCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl UsernamePasswordCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Parse `user:password`, splitting on the first colon. A missing colon
    /// yields an empty password.
    pub fn parse(pair: &str) -> Self {
        match pair.split_once(':') {
            Some((username, password)) => Self::new(username, password),
            None => Self::new(pair, String::new()),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for UsernamePasswordCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsernamePasswordCredentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// An opaque bearer-style token with no principal.
#[derive(Clone)]
pub struct TokenCredentials {
    token: Zeroizing<String>,
}

impl TokenCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Zeroizing::new(token.into()),
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for TokenCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCredentials")
            .field("token", &"[redacted]")
            .finish()
    }
}

/// Credentials held by an auth state. Immutable once created.
#[derive(Debug, Clone)]
pub enum Credentials {
    UsernamePassword(UsernamePasswordCredentials),
    Token(TokenCredentials),
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::UsernamePassword(UsernamePasswordCredentials::new(username, password))
    }

    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(TokenCredentials::new(token))
    }

    /// Principal name, if these credentials carry one.
    #[must_use]
    pub fn principal(&self) -> Option<&str> {
        match self {
            Self::UsernamePassword(creds) => Some(creds.username()),
            Self::Token(_) => None,
        }
    }

    /// The principal/secret pair, if these credentials are one.
    #[must_use]
    pub fn as_username_password(&self) -> Option<&UsernamePasswordCredentials> {
        match self {
            Self::UsernamePassword(creds) => Some(creds),
            Self::Token(_) => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UsernamePassword(_) => "username/password",
            Self::Token(_) => "token",
        }
    }
}

impl From<UsernamePasswordCredentials> for Credentials {
    fn from(creds: UsernamePasswordCredentials) -> Self {
        Self::UsernamePassword(creds)
    }
}

impl From<TokenCredentials> for Credentials {
    fn from(creds: TokenCredentials) -> Self {
        Self::Token(creds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_colon() {
        let creds = UsernamePasswordCredentials::parse("user:p@ss:word");
        assert_eq!(creds.username(), "user");
        assert_eq!(creds.password(), "p@ss:word");

        let creds = UsernamePasswordCredentials::parse("lonely");
        assert_eq!(creds.username(), "lonely");
        assert_eq!(creds.password(), "");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", Credentials::basic("user", "secret"));
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("secret"));

        let rendered = format!("{:?}", Credentials::token("tok-123"));
        assert!(!rendered.contains("tok-123"));
    }

    #[test]
    fn test_token_has_no_principal() {
        let creds = Credentials::token("abc");
        assert_eq!(creds.principal(), None);
        assert!(creds.as_username_password().is_none());
    }
}
