//! Incoming HTTP request type.

use std::borrow::Cow;
use std::collections::HashMap;

use http::HeaderMap;

use crate::method::Method;

/// An incoming HTTP request after routing.
///
/// The body is never read: every page on the site is a `GET`.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        parts: &http::request::Parts,
        params: HashMap<String, String>,
    ) -> Self {
        Self {
            method,
            path: parts.uri.path().to_owned(),
            query: parts.uri.query().map(str::to_owned),
            headers: parts.headers.clone(),
            params,
        }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn query(&self) -> Option<&str> { self.query.as_deref() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/blog/[slug]`, `req.param("slug")` on `/blog/hello`
    /// returns `Some("hello")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Splits a catch-all parameter into decoded path segments.
    ///
    /// `/docs/[...slug]` on `/docs/api/routing` gives `["api", "routing"]`.
    /// An optional catch-all that matched nothing gives an empty list, and
    /// empty pieces from doubled slashes are dropped. The value is decoded
    /// before splitting, so an encoded `%2F` separates segments too.
    pub fn segments(&self, key: &str) -> Vec<String> {
        let Some(raw) = self.param(key) else {
            return Vec::new();
        };
        let decoded = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
        decoded.split('/').filter(|s| !s.is_empty()).map(str::to_owned).collect()
    }

    /// True when the request came from a link inside this site: its
    /// `Referer` names the same authority as its `Host`.
    pub fn is_in_app_navigation(&self) -> bool {
        is_in_app_navigation(&self.headers)
    }
}

/// A browser sends `Referer` on in-app link clicks; when its authority
/// matches `Host` the navigation started on one of our pages. Direct visits,
/// bookmarks and external links carry no such referer and get the full page
/// instead of an intercepting route.
pub(crate) fn is_in_app_navigation(headers: &HeaderMap) -> bool {
    let header = |name: http::header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok());
    let (Some(referer), Some(host)) = (header(http::header::REFERER), header(http::header::HOST)) else {
        return false;
    };
    referer
        .parse::<http::Uri>()
        .ok()
        .and_then(|uri| uri.authority().map(|a| a.as_str().eq_ignore_ascii_case(host)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str, headers: &[(&str, &str)], params: &[(&str, &str)]) -> Request {
        let mut builder = http::Request::builder().uri(uri);
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        let params = params.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Request::new(Method::Get, &parts, params)
    }

    #[test]
    fn segments_split_and_decode() {
        let req = request("/docs/a%20b//c", &[], &[("slug", "a%20b//c")]);
        assert_eq!(req.segments("slug"), vec!["a b", "c"]);
        assert!(req.segments("missing").is_empty());
    }

    #[test]
    fn encoded_slash_separates_segments() {
        let req = request("/docs/api%2Frouting", &[], &[("slug", "api%2Frouting")]);
        assert_eq!(req.segments("slug"), vec!["api", "routing"]);
    }

    #[test]
    fn in_app_navigation_needs_matching_referer() {
        let inside = request("/gallery/3", &[("host", "localhost:3000"), ("referer", "http://localhost:3000/gallery")], &[]);
        assert!(inside.is_in_app_navigation());

        let outside = request("/gallery/3", &[("host", "localhost:3000"), ("referer", "https://example.com/")], &[]);
        assert!(!outside.is_in_app_navigation());

        let direct = request("/gallery/3", &[("host", "localhost:3000")], &[]);
        assert!(!direct.is_in_app_navigation());
    }
}
