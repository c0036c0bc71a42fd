//! Registry of scheme constructors keyed by case-insensitive name

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use http::HeaderName;

use super::basic::BasicScheme;
use super::challenge::AuthChallenge;
use super::scheme::AuthScheme;
use crate::config::AuthConfig;
use crate::error::{self, Result};

type SchemeFactory = Arc<dyn Fn() -> AuthScheme + Send + Sync>;

/// Maps scheme names to constructors of fresh scheme instances.
#[derive(Clone)]
pub struct AuthSchemeRegistry {
    factories: HashMap<String, SchemeFactory>,
}

impl AuthSchemeRegistry {
    /// An empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with `basic` configured from `config`.
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        let charset = config.credential_charset;
        let mut registry = Self::empty();
        registry.register("basic", move || {
            AuthScheme::Basic(BasicScheme::with_charset(charset))
        });
        registry
    }

    /// Register or replace the constructor for `name`.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> AuthScheme + Send + Sync + 'static,
    {
        self.factories
            .insert(name.to_ascii_lowercase(), Arc::new(factory));
    }

    /// Register a placeholder that records challenges for `name` without
    /// ever rendering.
    pub fn register_placeholder(&mut self, name: &str) {
        let owned = name.to_owned();
        self.register(name, move || AuthScheme::unsupported(&owned));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_ascii_lowercase())
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// A fresh instance of the scheme registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Kind::UnsupportedScheme` if nothing is registered for `name`.
    pub fn create(&self, name: &str) -> Result<AuthScheme> {
        self.factories
            .get(&name.to_ascii_lowercase())
            .map(|factory| factory())
            .ok_or_else(|| error::unsupported_scheme(name))
    }

    /// Build the scheme named by `challenge` and feed it the challenge.
    ///
    /// # Errors
    ///
    /// `Kind::MalformedChallenge` for an unparsable challenge,
    /// `Kind::UnsupportedScheme` for an unregistered scheme.
    pub fn select(&self, challenge: &str) -> Result<AuthScheme> {
        let parsed = AuthChallenge::parse(challenge)?;
        let mut scheme = self.create(parsed.scheme())?;
        scheme.process_challenge(challenge)?;
        Ok(scheme)
    }

    /// Like [`AuthScheme::process_challenge_header`] on a freshly selected scheme.
    ///
    /// # Errors
    ///
    /// Same as [`AuthSchemeRegistry::select`], plus a non-challenge header name.
    pub fn select_for_header(&self, name: &HeaderName, challenge: &str) -> Result<AuthScheme> {
        let parsed = AuthChallenge::parse(challenge)?;
        let mut scheme = self.create(parsed.scheme())?;
        scheme.process_challenge_header(name, challenge)?;
        Ok(scheme)
    }
}

impl Default for AuthSchemeRegistry {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

impl fmt::Debug for AuthSchemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSchemeRegistry")
            .field("schemes", &self.names())
            .finish()
    }
}
