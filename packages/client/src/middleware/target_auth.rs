//! `Authorization` for the origin server from the target auth state

use http::Method;
use http::header::AUTHORIZATION;

use super::{ExecutionContext, RequestInterceptor, SkipReason};
use crate::config::AuthConfig;
use crate::error::Result;
use crate::http::HttpRequest;

/// Attaches origin credentials. Independent of the route: the origin sees the
/// header whether or not a tunnel is in between.
#[derive(Debug, Clone)]
pub struct TargetAuthInterceptor {
    enabled: bool,
    mark_sensitive: bool,
}

impl Default for TargetAuthInterceptor {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TargetAuthInterceptor {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&AuthConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &AuthConfig) -> Self {
        Self {
            enabled: config.target_auth_enabled,
            mark_sensitive: config.mark_sensitive,
        }
    }
}

impl RequestInterceptor for TargetAuthInterceptor {
    fn process(&self, request: &mut HttpRequest, context: &ExecutionContext) -> Result<()> {
        let skip = |reason: SkipReason| {
            tracing::debug!(?reason, "target authorization not attached");
            Ok(())
        };

        if !self.enabled {
            return skip(SkipReason::Disabled);
        }
        if request.method() == Method::CONNECT {
            return skip(SkipReason::ConnectRequest);
        }
        let Some(state) = context.target_auth_state() else {
            return skip(SkipReason::NoAuthConfigured);
        };
        let (Some(scheme), Some(credentials)) = (state.scheme(), state.credentials()) else {
            return skip(SkipReason::NoAuthConfigured);
        };
        if scheme.is_connection_based() && state.scope().is_none() {
            return skip(SkipReason::UnscopedConnectionScheme);
        }

        let mut value = scheme.render(credentials, request).inspect_err(|err| {
            tracing::warn!(
                scheme = scheme.scheme_name(),
                error = %err,
                "target authentication failed to render credentials"
            );
        })?;
        value.set_sensitive(self.mark_sensitive);
        request.set_header(AUTHORIZATION, value);
        Ok(())
    }
}
