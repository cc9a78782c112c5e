use axum::{http::StatusCode, Router};
use tokio::net::TcpListener;

/// Serve a router on an ephemeral port; returns the hero api base URL.
pub async fn spawn_api(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}/api/heroes")
}

/// A base URL nothing listens on (bound then released).
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api/heroes")
}

/// A backend that answers 500 to everything.
pub fn failing_router() -> Router {
    Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR })
}
