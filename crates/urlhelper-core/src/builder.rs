//! Root-relative and absolute URL generation.

use crate::query::QueryParams;

const SCHEME_SEPARATOR: &str = "://";

/// URL generation operations.
///
/// Each operation takes at most one query source; passing more than one is a
/// programming error and implementations panic on it.
pub trait UrlHelper {
    /// Generates a root-relative URL (`/base/path?query`).
    fn relative(&self, path: &str, params: &[&dyn QueryParams]) -> String;

    /// Generates an absolute URL using the default scheme.
    fn absolute(&self, path: &str, params: &[&dyn QueryParams]) -> String;

    /// Generates an absolute URL using `scheme`; an empty `scheme` falls back
    /// to the default one.
    fn scheme(&self, path: &str, scheme: &str, params: &[&dyn QueryParams]) -> String;
}

/// Generates URLs under a fixed host and base path.
///
/// Construction normalizes the inputs once; every generation call only reads
/// them, so a builder can be shared across threads freely.
///
/// # Examples
///
/// ```
/// use urlhelper_core::{SimpleParams, UrlBuilder, UrlHelper};
///
/// let urls = UrlBuilder::new("http://example.org/", "base/url/", "https://");
/// assert_eq!(urls.relative("test/url", &[]), "/base/url/test/url");
/// assert_eq!(
///     urls.absolute("test/url", &[&SimpleParams::from([("foo", "bar/baz")])]),
///     "https://example.org/base/url/test/url?foo=bar%2Fbaz"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    /// Never has a trailing slash. May carry its own scheme prefix.
    host: String,
    /// Empty, or has a leading slash and no trailing slash.
    base_path: String,
    default_scheme: String,
}

impl UrlBuilder {
    /// Creates a builder.
    ///
    /// - Exactly one trailing `/` is stripped from `host` and `base_path`.
    /// - A non-empty `base_path` gets a leading `/` if it lacks one.
    /// - `default_scheme` is kept verbatim (`"http"` and `"http://"` both work).
    pub fn new(
        host: impl Into<String>,
        base_path: impl Into<String>,
        default_scheme: impl Into<String>,
    ) -> Self {
        let mut host = host.into();
        if host.ends_with('/') {
            host.pop();
        }

        let mut base_path = base_path.into();
        if base_path.ends_with('/') {
            base_path.pop();
        }
        if !base_path.is_empty() && !base_path.starts_with('/') {
            base_path.insert(0, '/');
        }

        let default_scheme = default_scheme.into();
        tracing::trace!(%host, %base_path, %default_scheme, "url builder configured");

        Self {
            host,
            base_path,
            default_scheme,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    /// `scheme` is `None` for root-relative output, otherwise the scheme to
    /// use for an absolute URL (empty = default scheme).
    fn generate(&self, path: &str, params: Option<&dyn QueryParams>, scheme: Option<&str>) -> String {
        let mut url = String::with_capacity(self.base_path.len() + path.len() + 1);
        url.push_str(&self.base_path);
        if !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path);

        if let Some(params) = params {
            let query = params.encode();
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }

        let Some(scheme) = scheme else {
            tracing::trace!(%url, "generated relative url");
            return url;
        };

        let scheme = if scheme.is_empty() {
            self.default_scheme.as_str()
        } else {
            scheme
        };
        let mut absolute = String::with_capacity(scheme.len() + 3 + self.host.len() + url.len());
        absolute.push_str(scheme);
        if !scheme.ends_with(SCHEME_SEPARATOR) {
            absolute.push_str(SCHEME_SEPARATOR);
        }
        match self.host.find(SCHEME_SEPARATOR) {
            Some(idx) => absolute.push_str(&self.host[idx + SCHEME_SEPARATOR.len()..]),
            None => absolute.push_str(&self.host),
        }
        absolute.push_str(&url);

        tracing::trace!(url = %absolute, "generated absolute url");
        absolute
    }
}

impl UrlHelper for UrlBuilder {
    fn relative(&self, path: &str, params: &[&dyn QueryParams]) -> String {
        assert!(
            params.len() <= 1,
            "UrlBuilder::relative called with multiple params"
        );
        self.generate(path, params.first().copied(), None)
    }

    fn absolute(&self, path: &str, params: &[&dyn QueryParams]) -> String {
        assert!(
            params.len() <= 1,
            "UrlBuilder::absolute called with multiple params"
        );
        self.generate(path, params.first().copied(), Some(""))
    }

    fn scheme(&self, path: &str, scheme: &str, params: &[&dyn QueryParams]) -> String {
        assert!(
            params.len() <= 1,
            "UrlBuilder::scheme called with multiple params"
        );
        self.generate(path, params.first().copied(), Some(scheme))
    }
}
