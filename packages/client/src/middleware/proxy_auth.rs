//! `Proxy-Authorization` on requests forwarded in the clear by a proxy
//!
//! Only a plain (non-tunnelled) proxied route gets the header. Once a tunnel is
//! up the proxy relays opaque bytes, so a header would only reach the tunnel's
//! far end and leak the proxy credentials to it.

use http::header::PROXY_AUTHORIZATION;

use super::{ExecutionContext, RequestInterceptor, SkipReason};
use crate::auth::{AuthScheme, Credentials};
use crate::config::AuthConfig;
use crate::error::Result;
use crate::http::HttpRequest;

/// Outcome of classifying a request for proxy credentials.
#[derive(Debug, Clone, Copy)]
pub enum ProxyAuthDecision<'a> {
    Attach {
        scheme: &'a AuthScheme,
        credentials: &'a Credentials,
    },
    Skip(SkipReason),
}

/// Re-asserts proxy credentials on each request of a plain proxied route.
#[derive(Debug, Clone)]
pub struct ProxyAuthInterceptor {
    enabled: bool,
    mark_sensitive: bool,
}

impl Default for ProxyAuthInterceptor {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyAuthInterceptor {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&AuthConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &AuthConfig) -> Self {
        Self {
            enabled: config.proxy_auth_enabled,
            mark_sensitive: config.mark_sensitive,
        }
    }

    /// Decide whether `context` calls for a `Proxy-Authorization` header.
    /// Reads the context only.
    #[must_use]
    pub fn decide<'a>(&self, context: &'a ExecutionContext) -> ProxyAuthDecision<'a> {
        use ProxyAuthDecision::Skip;

        if !self.enabled {
            return Skip(SkipReason::Disabled);
        }
        let Some(route) = context.route() else {
            return Skip(SkipReason::RouteUnavailable);
        };
        let Some(state) = context.proxy_auth_state() else {
            return Skip(SkipReason::NoAuthConfigured);
        };
        let (Some(scheme), Some(credentials)) = (state.scheme(), state.credentials()) else {
            return Skip(SkipReason::NoAuthConfigured);
        };
        if route.proxy_host().is_none() {
            return Skip(SkipReason::DirectRoute);
        }
        if !route.requires_direct_proxy_credentials() {
            return Skip(SkipReason::Tunnelled);
        }
        if scheme.is_connection_based() && state.scope().is_none() {
            return Skip(SkipReason::UnscopedConnectionScheme);
        }
        ProxyAuthDecision::Attach {
            scheme,
            credentials,
        }
    }
}

impl RequestInterceptor for ProxyAuthInterceptor {
    fn process(&self, request: &mut HttpRequest, context: &ExecutionContext) -> Result<()> {
        let (scheme, credentials) = match self.decide(context) {
            ProxyAuthDecision::Attach {
                scheme,
                credentials,
            } => (scheme, credentials),
            ProxyAuthDecision::Skip(reason) => {
                tracing::debug!(?reason, "proxy authorization not attached");
                return Ok(());
            }
        };

        let mut value = scheme.render(credentials, request).inspect_err(|err| {
            tracing::warn!(
                scheme = scheme.scheme_name(),
                error = %err,
                "proxy authentication failed to render credentials"
            );
        })?;
        value.set_sensitive(self.mark_sensitive);

        tracing::trace!(
            scheme = scheme.scheme_name(),
            realm = ?scheme.realm(),
            "attaching proxy authorization"
        );
        request.set_header(PROXY_AUTHORIZATION, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use http::HeaderValue;

    use super::*;
    use crate::auth::{AuthScope, AuthState};
    use crate::connect::{Conn, HttpHost, HttpRoute};

    fn ready_basic() -> AuthScheme {
        let mut scheme = AuthScheme::basic();
        scheme.process_challenge("BASIC realm=auth-realm").unwrap();
        scheme
    }

    fn full_state() -> AuthState {
        AuthState::new()
            .with_scheme(ready_basic())
            .with_scope(AuthScope::new(
                Some("localhost"),
                Some(8080),
                Some("auth-realm"),
                Some("http"),
            ))
            .with_credentials(Credentials::basic("user", "secret"))
    }

    fn plain_route() -> HttpRoute {
        HttpRoute::via_proxy(
            HttpHost::new("localhost", Some(80), "https"),
            HttpHost::http("localhost", 8080),
            false,
        )
    }

    fn context(route: HttpRoute, state: AuthState) -> ExecutionContext {
        ExecutionContext::new()
            .with_connection(Arc::new(Conn::routed(route)))
            .with_proxy_auth_state(state)
    }

    fn skip_reason(decision: ProxyAuthDecision<'_>) -> Option<SkipReason> {
        match decision {
            ProxyAuthDecision::Skip(reason) => Some(reason),
            ProxyAuthDecision::Attach { .. } => None,
        }
    }

    #[test]
    fn test_attaches_on_plain_proxy_route() {
        let mut request = HttpRequest::get("/").unwrap();
        ProxyAuthInterceptor::new()
            .process(&mut request, &context(plain_route(), full_state()))
            .unwrap();
        let header = request.first_header(PROXY_AUTHORIZATION).unwrap();
        assert_eq!(header, "Basic dXNlcjpzZWNyZXQ=");
        assert!(header.is_sensitive());
    }

    #[test]
    fn test_overwrites_previous_value() {
        let mut request = HttpRequest::get("/")
            .unwrap()
            .header(PROXY_AUTHORIZATION, HeaderValue::from_static("Basic stale"));
        ProxyAuthInterceptor::new()
            .process(&mut request, &context(plain_route(), full_state()))
            .unwrap();
        let values: Vec<_> = request.headers().get_all(PROXY_AUTHORIZATION).iter().collect();
        assert_eq!(values, vec!["Basic dXNlcjpzZWNyZXQ="]);
    }

    #[test]
    fn test_skip_reasons() {
        let interceptor = ProxyAuthInterceptor::new();

        assert_eq!(
            skip_reason(interceptor.decide(&ExecutionContext::new())),
            Some(SkipReason::RouteUnavailable)
        );

        let no_state =
            ExecutionContext::new().with_connection(Arc::new(Conn::routed(plain_route())));
        assert_eq!(
            skip_reason(interceptor.decide(&no_state)),
            Some(SkipReason::NoAuthConfigured)
        );

        let tunnelled = HttpRoute::tunnelled(
            HttpHost::new("localhost", Some(80), "https"),
            HttpHost::http("localhost", 8080),
            true,
            true,
        );
        assert_eq!(
            skip_reason(interceptor.decide(&context(tunnelled, full_state()))),
            Some(SkipReason::Tunnelled)
        );

        let direct = HttpRoute::direct(HttpHost::http("localhost", 80), false);
        assert_eq!(
            skip_reason(interceptor.decide(&context(direct, full_state()))),
            Some(SkipReason::DirectRoute)
        );

        let disabled =
            ProxyAuthInterceptor::with_config(&AuthConfig::default().with_proxy_auth(false));
        assert_eq!(
            skip_reason(disabled.decide(&context(plain_route(), full_state()))),
            Some(SkipReason::Disabled)
        );
    }

    #[test]
    fn test_state_missing_scheme_or_credentials_is_skipped() {
        let credentials_only =
            AuthState::new().with_credentials(Credentials::basic("user", "secret"));
        let scheme_only = AuthState::new().with_scheme(ready_basic());
        for state in [credentials_only, scheme_only] {
            let ctx = context(plain_route(), state);
            assert_eq!(
                skip_reason(ProxyAuthInterceptor::new().decide(&ctx)),
                Some(SkipReason::NoAuthConfigured)
            );
            let mut request = HttpRequest::get("/").unwrap();
            ProxyAuthInterceptor::new().process(&mut request, &ctx).unwrap();
            assert!(request.first_header(PROXY_AUTHORIZATION).is_none());
        }
    }

    #[test]
    fn test_unscoped_connection_based_scheme_is_skipped() {
        let state = AuthState::new()
            .with_scheme(AuthScheme::unsupported("NTLM"))
            .with_credentials(Credentials::basic("user", "secret"));
        let ctx = context(plain_route(), state);
        assert_eq!(
            skip_reason(ProxyAuthInterceptor::new().decide(&ctx)),
            Some(SkipReason::UnscopedConnectionScheme)
        );
    }

    #[test]
    fn test_incomplete_scheme_is_surfaced() {
        let state = AuthState::new()
            .with_scheme(AuthScheme::basic())
            .with_credentials(Credentials::basic("user", "secret"));
        let mut request = HttpRequest::get("/").unwrap();
        let err = ProxyAuthInterceptor::new()
            .process(&mut request, &context(plain_route(), state))
            .unwrap_err();
        assert!(err.is_scheme_not_ready());
        assert!(request.first_header(PROXY_AUTHORIZATION).is_none());
    }

    #[test]
    fn test_sensitivity_follows_config() {
        let interceptor =
            ProxyAuthInterceptor::with_config(&AuthConfig::default().with_mark_sensitive(false));
        let mut request = HttpRequest::get("/").unwrap();
        interceptor
            .process(&mut request, &context(plain_route(), full_state()))
            .unwrap();
        assert!(!request.first_header(PROXY_AUTHORIZATION).unwrap().is_sensitive());
    }
}
