//! HTTP status codes the site actually sends.
//!
//! ```rust
//! use trailmap::{Response, Status};
//!
//! // status-only, no body
//! Response::status(Status::NotFound);
//!
//! // return Status directly from a handler, trailmap wraps it
//! async fn gone(_req: trailmap::Request) -> Status {
//!     Status::NotFound
//! }
//! ```

/// Status codes used by pages, probes and the router.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    MovedPermanently,    // 301
    NotFound,            // 404
    MethodNotAllowed,    // 405
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::MovedPermanently    => 301,
            Status::NotFound            => 404,
            Status::MethodNotAllowed    => 405,
        }
    }
}
