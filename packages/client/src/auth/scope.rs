//! Authentication scope: where a set of credentials applies

use std::fmt;

/// Host, port, realm and scheme a credential binding applies to.
/// Unset fields match anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AuthScope {
    host: Option<String>,
    port: Option<u16>,
    realm: Option<String>,
    scheme: Option<String>,
}

impl AuthScope {
    /// Matches every host, port, realm and scheme.
    pub const ANY: AuthScope = AuthScope {
        host: None,
        port: None,
        realm: None,
        scheme: None,
    };

    pub fn new(
        host: Option<&str>,
        port: Option<u16>,
        realm: Option<&str>,
        scheme: Option<&str>,
    ) -> Self {
        Self {
            host: host.map(str::to_ascii_lowercase),
            port,
            realm: realm.map(str::to_owned),
            scheme: scheme.map(str::to_ascii_lowercase),
        }
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// How closely `other` matches this scope; higher is closer.
    ///
    /// Returns `None` when a field set on both sides differs. Realm comparison
    /// is case-sensitive, host and scheme are not.
    #[must_use]
    pub fn match_factor(&self, other: &AuthScope) -> Option<u32> {
        let mut factor = 0;
        if !Self::field_matches(&self.scheme, &other.scheme, &mut factor, 1) {
            return None;
        }
        if !Self::field_matches(&self.realm, &other.realm, &mut factor, 2) {
            return None;
        }
        if !Self::field_matches(&self.port, &other.port, &mut factor, 4) {
            return None;
        }
        if !Self::field_matches(&self.host, &other.host, &mut factor, 8) {
            return None;
        }
        Some(factor)
    }

    fn field_matches<T: PartialEq>(
        ours: &Option<T>,
        theirs: &Option<T>,
        factor: &mut u32,
        weight: u32,
    ) -> bool {
        match (ours, theirs) {
            (Some(a), Some(b)) if a == b => {
                *factor += weight;
                true
            }
            (Some(_), Some(_)) => false,
            _ => true,
        }
    }
}

impl fmt::Display for AuthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scheme {
            Some(ref scheme) => write!(f, "{} ", scheme.to_ascii_uppercase())?,
            None => f.write_str("<any scheme> ")?,
        }
        match self.realm {
            Some(ref realm) => write!(f, "'{realm}'")?,
            None => f.write_str("<any realm>")?,
        }
        match self.host {
            Some(ref host) => write!(f, "@{host}")?,
            None => f.write_str("@<any host>")?,
        }
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}
