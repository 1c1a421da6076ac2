//! Radix-tree request router.
//!
//! One tree per HTTP method for pages, and a second set of trees for
//! intercepting routes. Patterns are written in file-system notation (see
//! [`crate::route`]) and compiled to matchit paths at registration.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::{self, Request};
use crate::response::Response;
use crate::route::RoutePattern;
use crate::status::Status;

type Trees = HashMap<Method, MatchitRouter<BoxedHandler>>;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Every registration returns `self` so calls chain naturally.
pub struct Router {
    pages: Trees,
    intercepts: Trees,
    fallback: Option<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { pages: HashMap::new(), intercepts: HashMap::new(), fallback: None }
    }

    /// Register a page for a method + pattern pair.
    ///
    /// ```rust,no_run
    /// # use trailmap::{Method, Request, Response, Router};
    /// # async fn post(_: Request) -> Response { Response::text("") }
    /// # async fn docs(_: Request) -> Response { Response::text("") }
    /// # async fn shop(_: Request) -> Response { Response::text("") }
    /// # async fn about(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Get, "/blog/[slug]",        post)
    ///     .on(Method::Get, "/docs/[...slug]",     docs)
    ///     .on(Method::Get, "/shop/[[...slug]]",   shop)
    ///     .on(Method::Get, "/(marketing)/about",  about);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics on a malformed pattern, an intercept marker (use
    /// [`Router::intercept`]) or a pattern that conflicts with one already
    /// registered.
    pub fn on(self, method: Method, pattern: &str, handler: impl Handler) -> Self {
        let compiled = compile(pattern);
        if compiled.is_intercepting() {
            panic!("invalid route `{pattern}`: intercepting routes go through Router::intercept");
        }
        self.add(Tree::Pages, method, pattern, &compiled, handler)
    }

    /// Register an intercepting route.
    ///
    /// When a request for the target path arrives from a link inside the
    /// site, this handler answers instead of the page; direct visits still
    /// get the page.
    ///
    /// ```rust,no_run
    /// # use trailmap::{Method, Request, Response, Router};
    /// # async fn photo(_: Request) -> Response { Response::text("") }
    /// # async fn photo_modal(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Get,        "/gallery/[id]",          photo)
    ///     .intercept(Method::Get, "/@modal/(.)gallery/[id]", photo_modal);
    /// ```
    pub fn intercept(self, method: Method, pattern: &str, handler: impl Handler) -> Self {
        let compiled = compile(pattern);
        if !compiled.is_intercepting() {
            panic!("invalid route `{pattern}`: no intercept marker such as `(.)`");
        }
        self.add(Tree::Intercepts, method, pattern, &compiled, handler)
    }

    /// Handler for requests that match nothing. Defaults to a bare `404`.
    pub fn fallback(mut self, handler: impl Handler) -> Self {
        self.fallback = Some(handler.into_boxed_handler());
        self
    }

    fn add(
        mut self,
        tree: Tree,
        method: Method,
        pattern: &str,
        compiled: &RoutePattern,
        handler: impl Handler,
    ) -> Self {
        let handler = handler.into_boxed_handler();
        let trees = match tree {
            Tree::Pages => &mut self.pages,
            Tree::Intercepts => &mut self.intercepts,
        };
        let tree = trees.entry(method).or_default();
        for path in compiled.paths() {
            tree.insert(path.as_str(), Arc::clone(&handler))
                .unwrap_or_else(|e| panic!("invalid route `{pattern}`: {e}"));
        }
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
        in_app: bool,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let intercepted = in_app
            .then(|| self.intercepts.get(&method)?.at(path).ok())
            .flatten();
        let matched = match intercepted {
            Some(m) => m,
            None => self.pages.get(&method)?.at(path).ok()?,
        };
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Routes one request and produces one response.
    ///
    /// Never fails: unknown methods get `405`, a trailing slash gets a `301`
    /// to the canonical path, anything unmatched goes to the fallback.
    /// `HEAD` is answered by the `GET` handler with the body dropped.
    pub async fn handle<B>(&self, req: http::Request<B>) -> Response {
        let (parts, _) = req.into_parts();

        let Some(method) = Method::from_http(&parts.method) else {
            return Response::status(Status::MethodNotAllowed);
        };

        let path = parts.uri.path();
        if path.len() > 1 && path.ends_with('/') {
            return redirect_to_canonical(path, parts.uri.query());
        }

        let tree_method = if method == Method::Head { Method::Get } else { method };
        let in_app = request::is_in_app_navigation(&parts.headers);

        let (handler, params) = match self.lookup(tree_method, path, in_app) {
            Some(found) => found,
            None => match &self.fallback {
                Some(fallback) => (Arc::clone(fallback), HashMap::new()),
                None => return Response::status(Status::NotFound),
            },
        };

        let response = handler.call(Request::new(method, &parts, params)).await;
        if method == Method::Head { response.without_body() } else { response }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

enum Tree {
    Pages,
    Intercepts,
}

fn compile(pattern: &str) -> RoutePattern {
    RoutePattern::parse(pattern).unwrap_or_else(|e| panic!("invalid route `{pattern}`: {e}"))
}

/// The `301` for a path with a trailing slash.
///
/// Leading slashes are collapsed as well: `//host/` must not become the
/// protocol-relative `Location: //host`.
fn redirect_to_canonical(path: &str, query: Option<&str>) -> Response {
    let target = format!("/{}", path.trim_matches('/'));
    let location = match query {
        Some(q) => format!("{target}?{q}"),
        None => target,
    };
    Response::builder()
        .status(Status::MovedPermanently)
        .header("location", &location)
        .no_body()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn page(_: Request) -> &'static str { "page" }
    async fn modal(_: Request) -> &'static str { "modal" }
    async fn missing(_: Request) -> Status { Status::NotFound }

    async fn echo_slug(req: Request) -> String {
        req.segments("slug").join("|")
    }

    fn get(uri: &str) -> http::Request<()> {
        http::Request::builder().uri(uri).body(()).unwrap()
    }

    #[tokio::test]
    async fn optional_catch_all_matches_zero_or_more() {
        let router = Router::new().on(Method::Get, "/shop/[[...slug]]", echo_slug);

        assert_eq!(router.handle(get("/shop")).await.body_text(), "");
        assert_eq!(router.handle(get("/shop/a/b")).await.body_text(), "a|b");
    }

    #[tokio::test]
    async fn catch_all_needs_a_segment() {
        let router = Router::new().on(Method::Get, "/docs/[...slug]", echo_slug);

        assert_eq!(router.handle(get("/docs/api/routing")).await.body_text(), "api|routing");
        assert_eq!(router.handle(get("/docs")).await.status_code(), 404);
    }

    #[tokio::test]
    async fn intercept_only_applies_to_in_app_navigation() {
        let router = Router::new()
            .on(Method::Get, "/gallery/[id]", page)
            .intercept(Method::Get, "/@modal/(.)gallery/[id]", modal);

        assert_eq!(router.handle(get("/gallery/1")).await.body_text(), "page");

        let soft = http::Request::builder()
            .uri("/gallery/1")
            .header("host", "example.test")
            .header("referer", "http://example.test/gallery")
            .body(())
            .unwrap();
        assert_eq!(router.handle(soft).await.body_text(), "modal");
    }

    #[tokio::test]
    async fn trailing_slash_redirects() {
        let router = Router::new().on(Method::Get, "/docs", page);
        let res = router.handle(get("/docs/?tab=api")).await;
        assert_eq!(res.status_code(), 301);
        assert_eq!(res.header("location"), Some("/docs?tab=api"));
    }

    #[tokio::test]
    async fn redirect_never_leaves_the_site() {
        let router = Router::new().on(Method::Get, "/docs", page);

        let res = router.handle(get("//evil.example/")).await;
        assert_eq!(res.status_code(), 301);
        assert_eq!(res.header("location"), Some("/evil.example"));

        let res = router.handle(get("///docs//")).await;
        assert_eq!(res.header("location"), Some("/docs"));

        let res = router.handle(get("//")).await;
        assert_eq!(res.header("location"), Some("/"));
    }

    #[tokio::test]
    async fn head_uses_get_without_body() {
        let router = Router::new().on(Method::Get, "/", page);
        let head = http::Request::builder().method("HEAD").uri("/").body(()).unwrap();
        let res = router.handle(head).await;
        assert_eq!(res.status_code(), 200);
        assert!(res.body().is_empty());
    }

    #[tokio::test]
    async fn unknown_method_and_path() {
        let router = Router::new().on(Method::Get, "/", page).fallback(missing);

        let purge = http::Request::builder().method("PURGE").uri("/").body(()).unwrap();
        assert_eq!(router.handle(purge).await.status_code(), 405);
        assert_eq!(router.handle(get("/_utils/constants")).await.status_code(), 404);
    }

    #[test]
    #[should_panic(expected = "Router::intercept")]
    fn on_rejects_intercept_markers() {
        let _ = Router::new().on(Method::Get, "/@modal/(.)gallery/[id]", page);
    }

    #[test]
    #[should_panic(expected = "private folder")]
    fn private_folders_cannot_be_routed() {
        let _ = Router::new().on(Method::Get, "/_components/nav", page);
    }
}
