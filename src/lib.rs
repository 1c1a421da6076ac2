//! # trailmap
//!
//! A small site that demonstrates file-based routing: static pages, dynamic
//! segments, catch-all and optional catch-all segments, route groups,
//! private folders, parallel slots and intercepting routes.
//!
//! Routes are registered in file-system notation and compiled to a
//! [`matchit`] radix tree:
//!
//! ```rust,no_run
//! use trailmap::{Method, Request, Response, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .on(Method::Get, "/docs/[...slug]", docs)
//!         .on(Method::Get, "/(marketing)/about", about);
//!
//!     Server::bind(([127, 0, 0, 1], 3000).into()).serve(app).await.unwrap();
//! }
//!
//! async fn docs(req: Request) -> Response {
//!     Response::text(req.segments("slug").join(" / "))
//! }
//!
//! async fn about(_req: Request) -> Response {
//!     Response::text("about")
//! }
//! ```
//!
//! The content behind the pages lives in [`content`]: immutable trees walked
//! one segment at a time by [`content::tree::Tree::resolve`], plus the
//! breadcrumb and formatting helpers the pages share. [`app`] wires every
//! page of the site into one [`Router`].

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod content;
pub mod health;
pub mod middleware;
pub mod pages;
pub mod route;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use status::Status;

use content::dashboard::DashboardSource;

/// The whole site as one router.
pub fn app(config: &Config) -> Router {
    Router::new()
        .on(Method::Get, "/", pages::home::index)
        .on(Method::Get, "/(marketing)/about", pages::marketing::about)
        .on(Method::Get, "/(marketing)/pricing", pages::marketing::pricing)
        .on(Method::Get, "/blog", pages::blog::index)
        .on(Method::Get, "/blog/[slug]", pages::blog::post)
        .on(Method::Get, "/docs", pages::docs::index)
        .on(Method::Get, "/docs/[...slug]", pages::docs::doc)
        .on(Method::Get, "/shop/[[...slug]]", pages::shop::shop)
        .on(Method::Get, "/gallery", pages::gallery::index)
        .on(Method::Get, "/gallery/[id]", pages::gallery::photo)
        .intercept(Method::Get, "/@modal/(.)gallery/[id]", pages::gallery::modal)
        .on(Method::Get, "/dashboard", pages::dashboard::overview(DashboardSource::from_config(config)))
        .on(Method::Get, "/dashboard/analytics", pages::dashboard::analytics)
        .on(Method::Get, "/dashboard/settings", pages::dashboard::settings)
        .on(Method::Get, "/routing-demo", pages::routing::demo)
        .on(Method::Get, "/advanced-routing", pages::routing::advanced)
        .on(Method::Get, "/healthz", health::liveness)
        .on(Method::Get, "/readyz", health::readiness)
        .fallback(pages::fallback)
}
