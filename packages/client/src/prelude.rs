//! Essential types for wiring authentication into a request pipeline.

// Routing and connections
pub use crate::connect::{Conn, HttpHost, HttpRoute, LayerType, RoutedConnection, TunnelType};

// Authentication
pub use crate::auth::{
    AuthChallenge, AuthScheme, AuthSchemeRegistry, AuthScope, AuthState, BasicScheme,
    ChallengeTarget, Credentials, UsernamePasswordCredentials,
};

// Interceptors
pub use crate::middleware::{
    ExecutionContext, InterceptorChain, ProxyAuthInterceptor, RequestInterceptor, SkipReason,
    TargetAuthInterceptor,
};

pub use crate::config::{AuthConfig, CredentialCharset};
pub use crate::error::{Error, Kind};
pub use crate::http::HttpRequest;

// HTTP standard types from http crate
pub use ::http::header::{AUTHORIZATION, PROXY_AUTHENTICATE, PROXY_AUTHORIZATION, WWW_AUTHENTICATE};
pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method};
