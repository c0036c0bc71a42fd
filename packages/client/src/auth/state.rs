//! Per-connection authentication state

use super::credentials::Credentials;
use super::scheme::AuthScheme;
use super::scope::AuthScope;

/// Scheme, scope and credentials bound for one party (target or proxy).
///
/// Advanced by challenge negotiation between requests; interceptors only read it.
/// Unset fields mean no authentication is configured.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    scheme: Option<AuthScheme>,
    scope: Option<AuthScope>,
    credentials: Option<Credentials>,
}

impl AuthState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: AuthScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: AuthScope) -> Self {
        self.scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn set_scheme(&mut self, scheme: Option<AuthScheme>) {
        self.scheme = scheme;
    }

    pub fn set_scope(&mut self, scope: Option<AuthScope>) {
        self.scope = scope;
    }

    pub fn set_credentials(&mut self, credentials: Option<Credentials>) {
        self.credentials = credentials;
    }

    #[must_use]
    pub fn scheme(&self) -> Option<&AuthScheme> {
        self.scheme.as_ref()
    }

    /// Mutable access for feeding further challenges.
    pub fn scheme_mut(&mut self) -> Option<&mut AuthScheme> {
        self.scheme.as_mut()
    }

    #[must_use]
    pub fn scope(&self) -> Option<&AuthScope> {
        self.scope.as_ref()
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Drop the scheme, scope and credentials.
    pub fn invalidate(&mut self) {
        self.scheme = None;
        self.scope = None;
        self.credentials = None;
    }

    /// True when both a scheme and credentials are present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scheme.is_some() && self.credentials.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_not_valid() {
        assert!(!AuthState::new().is_valid());
        assert!(!AuthState::new().with_scheme(AuthScheme::basic()).is_valid());
        assert!(
            !AuthState::new()
                .with_credentials(Credentials::basic("user", "secret"))
                .is_valid()
        );
    }

    #[test]
    fn test_invalidate_clears_everything() {
        let mut state = AuthState::new()
            .with_scheme(AuthScheme::basic())
            .with_scope(AuthScope::ANY)
            .with_credentials(Credentials::basic("user", "secret"));
        assert!(state.is_valid());

        state.invalidate();
        assert!(state.scheme().is_none());
        assert!(state.scope().is_none());
        assert!(state.credentials().is_none());
    }

    #[test]
    fn test_scheme_mut_advances_state() {
        let mut state = AuthState::new().with_scheme(AuthScheme::basic());
        if let Some(scheme) = state.scheme_mut() {
            scheme.process_challenge("Basic realm=r").unwrap();
        }
        assert!(state.scheme().is_some_and(AuthScheme::is_complete));
    }
}
