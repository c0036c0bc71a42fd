//! Authentication configuration
//!
//! Switches for the request interceptors and the byte encoding applied to
//! credentials before they are base64 encoded.

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Byte encoding of `principal:secret` prior to base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialCharset {
    #[default]
    Utf8,
    #[serde(rename = "iso-8859-1")]
    Iso8859_1,
}

impl CredentialCharset {
    /// Encode `text` in this charset.
    ///
    /// # Errors
    ///
    /// Returns `Kind::IncompatibleCredentials` if `text` holds a character the
    /// charset cannot represent.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Iso8859_1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        error::incompatible_credentials(format!(
                            "character U+{:04X} is not representable in ISO-8859-1",
                            u32::from(c)
                        ))
                    })
                })
                .collect(),
        }
    }
}

/// Configuration shared by the authentication interceptors and scheme registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Attach `Proxy-Authorization` on plain proxied routes
    pub proxy_auth_enabled: bool,

    /// Attach `Authorization` from the target auth state
    pub target_auth_enabled: bool,

    /// Encoding of credentials before base64
    pub credential_charset: CredentialCharset,

    /// Flag rendered header values as sensitive
    pub mark_sensitive: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            proxy_auth_enabled: true,
            target_auth_enabled: true,
            credential_charset: CredentialCharset::Utf8,
            mark_sensitive: true,
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn with_proxy_auth(mut self, enabled: bool) -> Self {
        self.proxy_auth_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_target_auth(mut self, enabled: bool) -> Self {
        self.target_auth_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_credential_charset(mut self, charset: CredentialCharset) -> Self {
        self.credential_charset = charset;
        self
    }

    #[must_use]
    pub fn with_mark_sensitive(mut self, mark_sensitive: bool) -> Self {
        self.mark_sensitive = mark_sensitive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert!(config.proxy_auth_enabled);
        assert!(config.target_auth_enabled);
        assert!(config.mark_sensitive);
        assert_eq!(config.credential_charset, CredentialCharset::Utf8);
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let json = r#"{"proxy_auth_enabled": false, "credential_charset": "iso-8859-1"}"#;
        let config: AuthConfig = serde_json::from_str(json).unwrap();
        assert!(!config.proxy_auth_enabled);
        assert!(config.target_auth_enabled);
        assert_eq!(config.credential_charset, CredentialCharset::Iso8859_1);
    }

    #[test]
    fn test_latin1_encoding() {
        assert_eq!(CredentialCharset::Iso8859_1.encode("é").unwrap(), vec![0xE9]);
        assert_eq!(CredentialCharset::Utf8.encode("é").unwrap(), vec![0xC3, 0xA9]);
        let err = CredentialCharset::Iso8859_1.encode("€").unwrap_err();
        assert!(err.is_incompatible_credentials());
    }
}
