//! Per-request tracing.
//!
//! Every request runs inside a `request` span carrying its method and path;
//! when the handler finishes, one `info` event records status and latency.
//! Logs emitted by pages (resolver misses, slot failures) nest under it.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span};

use crate::response::Response;

/// Runs `respond` inside a request span and logs its outcome.
pub async fn trace<F>(method: &http::Method, path: &str, respond: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", %method, path);
    let started = Instant::now();

    let response = respond.instrument(span.clone()).await;

    span.in_scope(|| {
        info!(
            status = response.status_code(),
            latency_ms = started.elapsed().as_millis() as u64,
            "request completed",
        );
    });
    response
}
