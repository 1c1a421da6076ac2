//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Is the content loaded? |

use crate::content::{blog, catalog::CATALOG, docs::DOCS, gallery};
use crate::request::Request;
use crate::response::Response;

/// Always `200 OK` with body `"ok"`.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` once the content trees are built, with a one-line summary.
///
/// The trees are built on first touch, so the first readiness probe also
/// warms them before traffic arrives.
pub async fn readiness(_req: Request) -> Response {
    let docs = DOCS.paths().len();
    let categories = CATALOG.select::<&str>(&[]).map_or(0, |root| root.children().count());
    Response::text(format!(
        "ready docs={docs} posts={} photos={} categories={categories}",
        blog::POSTS.len(),
        gallery::PHOTOS.len(),
    ))
}
