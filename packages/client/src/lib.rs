//! # proxyauth
//!
//! Proxy authentication decision layer for HTTP clients.
//!
//! For each outgoing request a [`ProxyAuthInterceptor`] reads the route of the
//! active connection and the proxy [`AuthState`] from the [`ExecutionContext`],
//! and attaches `Proxy-Authorization` only when the proxy forwards the request
//! in the clear. Tunnelled routes never get the header.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use proxyauth::prelude::*;
//!
//! # fn main() -> proxyauth::Result<()> {
//! let route = HttpRoute::via_proxy(
//!     HttpHost::new("localhost", Some(80), "https"),
//!     HttpHost::http("localhost", 8080),
//!     false,
//! );
//!
//! let registry = AuthSchemeRegistry::default();
//! let state = AuthState::new()
//!     .with_scheme(registry.select("Basic realm=\"auth-realm\"")?)
//!     .with_credentials(Credentials::basic("user", "secret"));
//!
//! let context = ExecutionContext::new()
//!     .with_connection(Arc::new(Conn::routed(route)))
//!     .with_proxy_auth_state(state);
//!
//! let mut request = HttpRequest::get("/").expect("valid request target");
//! ProxyAuthInterceptor::new().process(&mut request, &context)?;
//!
//! assert_eq!(
//!     request.first_header(PROXY_AUTHORIZATION).unwrap(),
//!     "Basic dXNlcjpzZWNyZXQ="
//! );
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod connect;
pub mod error;
pub mod http;
pub mod middleware;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
pub use crate::error::Result;
