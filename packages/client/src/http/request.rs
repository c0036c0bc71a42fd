//! Outgoing HTTP request as seen by request interceptors
//!
//! Interceptors only touch the request line and headers, so the body is not
//! represented here.

use http::header::AsHeaderName;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri, Version};

/// HTTP request head handed to interceptors before dispatch.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    version: Version,
}

impl HttpRequest {
    /// Create a request with an empty header set.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            headers: HeaderMap::new(),
            version: Version::HTTP_11,
        }
    }

    /// `GET` request for a request-target such as `/` or an absolute URI.
    ///
    /// # Errors
    ///
    /// Returns an error if `uri` is not a valid request-target.
    pub fn get(uri: &str) -> Result<Self, http::uri::InvalidUri> {
        Ok(Self::new(Method::GET, uri.parse()?))
    }

    /// `CONNECT` request for `authority` (`host:port`).
    ///
    /// # Errors
    ///
    /// Returns an error if `authority` is not a valid authority.
    pub fn connect(authority: &str) -> Result<Self, http::uri::InvalidUri> {
        Ok(Self::new(Method::CONNECT, authority.parse()?))
    }

    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Append a header, keeping existing values for the same name.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[inline]
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// First value of a header, if present.
    #[must_use]
    pub fn first_header<K: AsHeaderName>(&self, name: K) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Set a header, replacing every prior value for the name.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }
}
