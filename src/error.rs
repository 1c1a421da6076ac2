//! Unified error type.

use std::path::PathBuf;

use thiserror::Error;

/// The error type returned by trailmap's fallible operations.
///
/// A path that does not resolve is not an error: resolvers return `None` and
/// the page renders a 404 [`Response`](crate::Response). This type surfaces
/// infrastructure failures only: reading configuration, binding a port,
/// accepting a connection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
