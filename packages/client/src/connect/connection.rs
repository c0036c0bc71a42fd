//! Connection handles as seen by request interceptors
//!
//! Interceptors only need the route a connection was established for.
//! Establishing and pooling connections is left to the surrounding client.

use std::fmt::Debug;

use super::route::HttpRoute;

/// A connection that knows the route it was established over.
pub trait RoutedConnection: Debug + Send + Sync {
    /// The route of this connection, if it has been resolved.
    fn route(&self) -> Option<&HttpRoute>;
}

/// Minimal connection handle carrying its route.
#[derive(Debug, Clone, Default)]
pub struct Conn {
    route: Option<HttpRoute>,
}

impl Conn {
    #[must_use]
    pub fn routed(route: HttpRoute) -> Self {
        Self { route: Some(route) }
    }

    /// A connection whose route is not known yet.
    #[must_use]
    pub fn unrouted() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_proxied(&self) -> bool {
        self.route
            .as_ref()
            .is_some_and(|route| route.proxy_host().is_some())
    }
}

impl RoutedConnection for Conn {
    fn route(&self) -> Option<&HttpRoute> {
        self.route.as_ref()
    }
}
