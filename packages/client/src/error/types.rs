use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `proxyauth::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while producing authentication headers.
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Challenge header could not be parsed, or names a scheme this
    /// implementation does not handle
    MalformedChallenge,
    /// Credentials do not fit what the scheme needs
    IncompatibleCredentials,
    /// Render attempted before the scheme processed a challenge
    SchemeNotReady,
    /// No implementation is available for the named scheme
    UnsupportedScheme,
    /// Route construction violated a routing invariant
    InvalidRoute,
    /// Rendered value is not a legal header value
    InvalidHeader,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("proxyauth::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.inner.kind {
            Kind::MalformedChallenge => "malformed authentication challenge",
            Kind::IncompatibleCredentials => "credentials incompatible with auth scheme",
            Kind::SchemeNotReady => "auth scheme has not processed a challenge",
            Kind::UnsupportedScheme => "unsupported auth scheme",
            Kind::InvalidRoute => "invalid route",
            Kind::InvalidHeader => "invalid authorization header value",
        };
        match self.inner.source {
            Some(ref source) => write!(f, "{prefix}: {source}"),
            None => f.write_str(prefix),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
