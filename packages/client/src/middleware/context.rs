//! Typed execution context passed to request interceptors

use std::sync::Arc;

use crate::auth::AuthState;
use crate::connect::{HttpRoute, RoutedConnection};

/// Per-request execution state: the active connection and the auth states
/// for the origin server and the proxy.
///
/// Interceptors borrow it for one call and never keep references past it.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    connection: Option<Arc<dyn RoutedConnection>>,
    target_auth_state: Option<AuthState>,
    proxy_auth_state: Option<AuthState>,
}

impl ExecutionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_connection(mut self, connection: Arc<dyn RoutedConnection>) -> Self {
        self.connection = Some(connection);
        self
    }

    #[must_use]
    pub fn with_target_auth_state(mut self, state: AuthState) -> Self {
        self.target_auth_state = Some(state);
        self
    }

    #[must_use]
    pub fn with_proxy_auth_state(mut self, state: AuthState) -> Self {
        self.proxy_auth_state = Some(state);
        self
    }

    pub fn set_connection(&mut self, connection: Option<Arc<dyn RoutedConnection>>) {
        self.connection = connection;
    }

    #[must_use]
    pub fn connection(&self) -> Option<&Arc<dyn RoutedConnection>> {
        self.connection.as_ref()
    }

    /// Route of the active connection, if both are known.
    #[must_use]
    pub fn route(&self) -> Option<&HttpRoute> {
        self.connection.as_deref()?.route()
    }

    #[must_use]
    pub fn target_auth_state(&self) -> Option<&AuthState> {
        self.target_auth_state.as_ref()
    }

    /// Mutable target state, created empty on first access.
    pub fn target_auth_state_mut(&mut self) -> &mut AuthState {
        self.target_auth_state.get_or_insert_with(AuthState::default)
    }

    #[must_use]
    pub fn proxy_auth_state(&self) -> Option<&AuthState> {
        self.proxy_auth_state.as_ref()
    }

    /// Mutable proxy state, created empty on first access.
    pub fn proxy_auth_state_mut(&mut self) -> &mut AuthState {
        self.proxy_auth_state.get_or_insert_with(AuthState::default)
    }
}
