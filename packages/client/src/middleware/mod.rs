//! Request interceptors run on each outgoing request before dispatch
//!
//! Interceptors run synchronously and in order on the thread issuing the request.

use std::sync::Arc;

use crate::error::Result;
use crate::http::HttpRequest;

pub mod context;
pub mod proxy_auth;
pub mod target_auth;

pub use context::ExecutionContext;
pub use proxy_auth::ProxyAuthInterceptor;
pub use target_auth::TargetAuthInterceptor;

/// Why an authentication interceptor left a request untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Switched off in `AuthConfig`
    Disabled,
    /// No connection or route in the context, so the request cannot be classified
    RouteUnavailable,
    /// Auth state absent, or without scheme or credentials
    NoAuthConfigured,
    /// The route has no proxy
    DirectRoute,
    /// The proxy tunnels the traffic and no longer reads request headers
    Tunnelled,
    /// Connection-based scheme with no scope bound yet
    UnscopedConnectionScheme,
    /// CONNECT requests only carry proxy credentials
    ConnectRequest,
}

/// A step that may inspect or modify an outgoing request.
pub trait RequestInterceptor: Send + Sync {
    /// Process `request` in `context`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request must not be sent as is.
    fn process(&self, request: &mut HttpRequest, context: &ExecutionContext) -> Result<()>;
}

/// Interceptor chain for sequential processing
#[derive(Default, Clone)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl InterceptorChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain with the target and proxy authentication interceptors.
    #[must_use]
    pub fn authentication(config: &crate::config::AuthConfig) -> Self {
        Self::new()
            .add(TargetAuthInterceptor::with_config(config))
            .add(ProxyAuthInterceptor::with_config(config))
    }

    #[must_use]
    pub fn add<I: RequestInterceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl RequestInterceptor for InterceptorChain {
    /// Runs every interceptor in insertion order, stopping at the first error.
    fn process(&self, request: &mut HttpRequest, context: &ExecutionContext) -> Result<()> {
        self.interceptors
            .iter()
            .try_for_each(|interceptor| interceptor.process(request, context))
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("len", &self.interceptors.len())
            .finish()
    }
}
