//! Route classification and connection handles

mod connection;
mod route;

pub use connection::{Conn, RoutedConnection};
pub use route::{HttpHost, HttpRoute, LayerType, TunnelType};
