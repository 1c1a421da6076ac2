//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C the server stops accepting connections, lets every
//! in-flight connection finish, then returns from [`Server::serve`] so `main`
//! can exit cleanly.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::middleware;
use crate::router::Router;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// ```rust,no_run
    /// use trailmap::Server;
    /// let server = Server::bind(([127, 0, 0, 1], 3000).into());
    /// ```
    pub fn bind(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `router`.
    ///
    /// Returns only after a full graceful shutdown.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        let listener = TcpListener::bind(self.addr).await?;
        let router = Arc::new(router);
        info!(addr = %self.addr, "trailmap listening");

        let mut connections = JoinSet::new();
        let mut backoff = None;
        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown => break,

                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        backoff = None;
                        connections.spawn(serve_connection(Arc::clone(&router), stream, peer));
                    }
                    // Usually fd exhaustion; retrying at once would spin.
                    Err(e) => {
                        let wait = next_backoff(backoff);
                        backoff = Some(wait);
                        error!(retry_in_ms = wait.as_millis() as u64, "accept error: {e}");
                        tokio::time::sleep(wait).await;
                    }
                },

                Some(_) = connections.join_next(), if !connections.is_empty() => {}
            }
        }

        info!(in_flight = connections.len(), "shutdown signal received, draining connections");
        while connections.join_next().await.is_some() {}
        info!("trailmap stopped");
        Ok(())
    }
}

const MIN_ACCEPT_BACKOFF: Duration = Duration::from_millis(5);
const MAX_ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Doubles the accept backoff up to one second.
fn next_backoff(current: Option<Duration>) -> Duration {
    current.map_or(MIN_ACCEPT_BACKOFF, |d| (d * 2).min(MAX_ACCEPT_BACKOFF))
}

/// Serves every request on one connection, HTTP/1.1 or HTTP/2.
async fn serve_connection(router: Arc<Router>, stream: TcpStream, peer: SocketAddr) {
    debug!(%peer, "connection opened");
    let svc = service_fn(move |req| dispatch(Arc::clone(&router), req));

    match ConnBuilder::new(TokioExecutor::new())
        .serve_connection(TokioIo::new(stream), svc)
        .await
    {
        Ok(()) => debug!(%peer, "connection closed"),
        Err(e) => error!(%peer, "connection error: {e}"),
    }
}

/// Routes one request through the trace middleware.
///
/// Infallible: the router answers every failure with a status page, so hyper
/// never sees an error.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = middleware::trace(&method, &path, router.handle(req)).await;

    Ok(response.into_inner())
}

/// Resolves on the first SIGTERM or SIGINT. If a handler cannot be installed
/// that signal is logged and ignored.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => { signal.recv().await; }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_backoff_doubles_up_to_a_cap() {
        assert_eq!(next_backoff(None), MIN_ACCEPT_BACKOFF);
        assert_eq!(next_backoff(Some(Duration::from_millis(5))), Duration::from_millis(10));
        assert_eq!(next_backoff(Some(Duration::from_millis(800))), MAX_ACCEPT_BACKOFF);
        assert_eq!(next_backoff(Some(MAX_ACCEPT_BACKOFF)), MAX_ACCEPT_BACKOFF);
    }

    #[tokio::test]
    async fn serves_one_request_over_tcp() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        async fn hello(_req: crate::Request) -> &'static str { "hello" }
        let router = Arc::new(Router::new().on(crate::Method::Get, "/", hello));

        let server = tokio::spawn(async move {
            let (stream, peer) = listener.accept().await.unwrap();
            serve_connection(router, stream, peer).await;
        });

        let mut client = TcpStream::connect(addr).await.unwrap();
        client.write_all(b"GET / HTTP/1.1\r\nhost: test\r\nconnection: close\r\n\r\n").await.unwrap();
        let mut reply = String::new();
        client.read_to_string(&mut reply).await.unwrap();

        assert!(reply.starts_with("HTTP/1.1 200 OK"), "{reply}");
        assert!(reply.ends_with("hello"), "{reply}");
        server.await.unwrap();
    }
}
