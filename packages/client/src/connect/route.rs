//! Route model: the resolved path a connection takes to its target
//!
//! A route names the target host, an optional proxy, and how the connection
//! through that proxy is classified: tunnelled or plain, layered or not.

use std::fmt;
use std::net::IpAddr;

use crate::error::{self, Result};

/// Whether traffic to the target is relayed through a proxy-established tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TunnelType {
    /// Requests are forwarded in the clear by the proxy
    #[default]
    Plain,
    /// A CONNECT-style tunnel carries the traffic; the proxy no longer sees requests
    Tunnelled,
}

/// Whether a protocol (typically TLS) is layered over the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayerType {
    #[default]
    Plain,
    Layered,
}

/// A host endpoint: name, optional port and scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpHost {
    hostname: String,
    port: Option<u16>,
    scheme: String,
}

impl HttpHost {
    /// Host names and schemes are case-insensitive and stored lowercased.
    /// IPv6 literals are stored without brackets.
    pub fn new(hostname: impl AsRef<str>, port: Option<u16>, scheme: impl AsRef<str>) -> Self {
        let hostname = hostname.as_ref();
        let hostname = hostname
            .strip_prefix('[')
            .and_then(|host| host.strip_suffix(']'))
            .unwrap_or(hostname);
        Self {
            hostname: hostname.to_ascii_lowercase(),
            port,
            scheme: scheme.as_ref().to_ascii_lowercase(),
        }
    }

    /// Plain `http` host on the given port.
    pub fn http(hostname: impl AsRef<str>, port: u16) -> Self {
        Self::new(hostname, Some(port), "http")
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Explicit port, falling back to the scheme default.
    #[must_use]
    pub fn effective_port(&self) -> u16 {
        match (self.port, self.scheme.as_str()) {
            (Some(port), _) => port,
            (None, "https") => 443,
            (None, _) => 80,
        }
    }
}

impl fmt::Display for HttpHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hostname.contains(':') {
            write!(f, "{}://[{}]:{}", self.scheme, self.hostname, self.effective_port())
        } else {
            write!(f, "{}://{}:{}", self.scheme, self.hostname, self.effective_port())
        }
    }
}

/// The resolved route of a connection attempt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpRoute {
    target: HttpHost,
    local_address: Option<IpAddr>,
    proxy: Option<HttpHost>,
    secure: bool,
    tunnel_type: TunnelType,
    layer_type: LayerType,
}

impl HttpRoute {
    /// Build a route from all of its parts.
    ///
    /// # Errors
    ///
    /// Returns `Kind::InvalidRoute` if a tunnel is requested without a proxy.
    pub fn new(
        target: HttpHost,
        local_address: Option<IpAddr>,
        proxy: Option<HttpHost>,
        secure: bool,
        tunnel_type: TunnelType,
        layer_type: LayerType,
    ) -> Result<Self> {
        if proxy.is_none() && tunnel_type == TunnelType::Tunnelled {
            return Err(error::invalid_route(format!(
                "tunnel to {target} requires a proxy"
            )));
        }
        Ok(Self {
            target,
            local_address,
            proxy,
            secure,
            tunnel_type,
            layer_type,
        })
    }

    /// Direct connection to the target.
    #[must_use]
    pub fn direct(target: HttpHost, secure: bool) -> Self {
        let layer_type = if secure { LayerType::Layered } else { LayerType::Plain };
        Self {
            target,
            local_address: None,
            proxy: None,
            secure,
            tunnel_type: TunnelType::Plain,
            layer_type,
        }
    }

    /// Requests forwarded in the clear by `proxy`.
    #[must_use]
    pub fn via_proxy(target: HttpHost, proxy: HttpHost, secure: bool) -> Self {
        Self {
            target,
            local_address: None,
            proxy: Some(proxy),
            secure,
            tunnel_type: TunnelType::Plain,
            layer_type: LayerType::Plain,
        }
    }

    /// Traffic carried through a tunnel established by `proxy`.
    #[must_use]
    pub fn tunnelled(target: HttpHost, proxy: HttpHost, layered: bool, secure: bool) -> Self {
        let layer_type = if layered { LayerType::Layered } else { LayerType::Plain };
        Self {
            target,
            local_address: None,
            proxy: Some(proxy),
            secure,
            tunnel_type: TunnelType::Tunnelled,
            layer_type,
        }
    }

    #[must_use]
    pub fn target_host(&self) -> &HttpHost {
        &self.target
    }

    #[must_use]
    pub fn proxy_host(&self) -> Option<&HttpHost> {
        self.proxy.as_ref()
    }

    #[must_use]
    pub fn local_address(&self) -> Option<IpAddr> {
        self.local_address
    }

    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    #[must_use]
    pub fn tunnel_type(&self) -> TunnelType {
        self.tunnel_type
    }

    #[must_use]
    pub fn layer_type(&self) -> LayerType {
        self.layer_type
    }

    #[must_use]
    pub fn is_tunnelled(&self) -> bool {
        self.tunnel_type == TunnelType::Tunnelled
    }

    #[must_use]
    pub fn is_layered(&self) -> bool {
        self.layer_type == LayerType::Layered
    }

    /// Number of hops: 1 for a direct route, 2 through a proxy.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        if self.proxy.is_some() { 2 } else { 1 }
    }

    /// Host reached at hop `hop`; the last hop is always the target.
    #[must_use]
    pub fn hop_target(&self, hop: usize) -> Option<&HttpHost> {
        match (hop, self.proxy.as_ref()) {
            (0, Some(proxy)) => Some(proxy),
            (0, None) | (1, Some(_)) => Some(&self.target),
            _ => None,
        }
    }

    /// True when the proxy sees every request in the clear and therefore
    /// expects proxy credentials on each of them.
    ///
    /// Layering is not consulted: only the tunnel decides whether the proxy
    /// still inspects request headers.
    #[must_use]
    pub fn requires_direct_proxy_credentials(&self) -> bool {
        self.proxy.is_some() && self.tunnel_type != TunnelType::Tunnelled
    }
}

impl fmt::Display for HttpRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(local) = self.local_address {
            write!(f, "{local}->")?;
        }
        f.write_str("{")?;
        if self.is_tunnelled() {
            f.write_str("t")?;
        }
        if self.is_layered() {
            f.write_str("l")?;
        }
        if self.secure {
            f.write_str("s")?;
        }
        f.write_str("}->")?;
        if let Some(ref proxy) = self.proxy {
            write!(f, "{proxy}->")?;
        }
        write!(f, "{}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> HttpHost {
        HttpHost::new("localhost", Some(80), "https")
    }

    fn proxy() -> HttpHost {
        HttpHost::http("localhost", 8080)
    }

    #[test]
    fn test_plain_proxy_requires_credentials() {
        let route = HttpRoute::via_proxy(target(), proxy(), false);
        assert!(route.requires_direct_proxy_credentials());
        assert_eq!(route.hop_count(), 2);
        assert_eq!(route.hop_target(0), Some(&proxy()));
        assert_eq!(route.hop_target(1), Some(&target()));
        assert_eq!(route.hop_target(2), None);
    }

    #[test]
    fn test_tunnelled_route_never_requires_credentials() {
        for layered in [false, true] {
            let route = HttpRoute::tunnelled(target(), proxy(), layered, true);
            assert!(!route.requires_direct_proxy_credentials());
        }
    }

    #[test]
    fn test_direct_route_never_requires_credentials() {
        let route = HttpRoute::direct(target(), true);
        assert!(!route.requires_direct_proxy_credentials());
        assert_eq!(route.hop_count(), 1);
        assert_eq!(route.hop_target(0), Some(&target()));
    }

    #[test]
    fn test_tunnel_without_proxy_is_rejected() {
        let err = HttpRoute::new(
            target(),
            None,
            None,
            true,
            TunnelType::Tunnelled,
            LayerType::Layered,
        )
        .unwrap_err();
        assert!(err.is_invalid_route());
    }

    #[test]
    fn test_layered_plain_proxy_still_requires_credentials() {
        let route = HttpRoute::new(
            target(),
            None,
            Some(proxy()),
            false,
            TunnelType::Plain,
            LayerType::Layered,
        )
        .unwrap();
        assert!(route.requires_direct_proxy_credentials());
    }

    #[test]
    fn test_host_normalisation_and_ports() {
        let host = HttpHost::new("LocalHost", None, "HTTPS");
        assert_eq!(host.hostname(), "localhost");
        assert_eq!(host.effective_port(), 443);
        assert_eq!(HttpHost::new("a", None, "http").effective_port(), 80);
        assert_eq!(host.to_string(), "https://localhost:443");
    }

    #[test]
    fn test_ipv6_host_display_is_bracketed() {
        assert_eq!(HttpHost::http("::1", 8080).to_string(), "http://[::1]:8080");
        assert_eq!(HttpHost::new("FE80::1", None, "https").to_string(), "https://[fe80::1]:443");
        assert_eq!(HttpHost::new("[::1]", Some(3128), "http").hostname(), "::1");
    }

    #[test]
    fn test_route_display() {
        let route = HttpRoute::tunnelled(target(), proxy(), true, true);
        assert_eq!(
            route.to_string(),
            "{tls}->http://localhost:8080->https://localhost:80"
        );
    }
}
