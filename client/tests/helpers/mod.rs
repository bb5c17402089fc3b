use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use url::Url;

/// Handle to a canned-response API served on an ephemeral local port.
pub struct MockApi {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl MockApi {
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    /// Total requests the mock has answered, across all routes.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serves each `(path, body)` pair for both GET and POST and counts every
/// request.
pub async fn serve_routes(routes: &[(&'static str, Value)]) -> MockApi {
    let hits = Arc::new(AtomicUsize::new(0));

    let mut router = Router::new();
    for (path, body) in routes {
        let counted = hits.clone();
        let body = body.clone();
        let handler = move || {
            counted.fetch_add(1, Ordering::SeqCst);
            let body = body.clone();
            async move { Json(body) }
        };
        router = router.route(path, get(handler.clone()).post(handler));
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockApi { addr, hits }
}

pub async fn serve(path: &'static str, body: Value) -> MockApi {
    serve_routes(&[(path, body)]).await
}

/// A URL nothing listens on, for driving the transport-failure paths.
pub async fn unreachable_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}
