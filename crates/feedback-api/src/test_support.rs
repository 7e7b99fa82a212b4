//! A fake messaging provider for tests: records every request it receives.

use std::time::Duration;

use axum::{
    Json, Router,
    http::{Method, StatusCode, Uri},
};
use serde_json::Value;
use tokio::sync::mpsc;

pub struct Received {
    pub method: String,
    pub path: String,
    pub body: Value,
}

pub struct FakeProvider {
    pub base: String,
    rx: mpsc::UnboundedReceiver<Received>,
}

impl FakeProvider {
    /// Next recorded request, or `None` if nothing arrives within a second.
    pub async fn next(&mut self) -> Option<Received> {
        self.within(Duration::from_secs(1)).await
    }

    pub async fn within(&mut self, wait: Duration) -> Option<Received> {
        tokio::time::timeout(wait, self.rx.recv()).await.ok().flatten()
    }
}

/// Bind a provider on an ephemeral local port that answers every request
/// with `status`.
pub async fn spawn_provider(status: StatusCode) -> FakeProvider {
    let (tx, rx) = mpsc::unbounded_channel();

    let app = Router::new().fallback(move |method: Method, uri: Uri, Json(body): Json<Value>| {
        let tx = tx.clone();
        async move {
            let _ = tx.send(Received {
                method: method.to_string(),
                path: uri.path().to_string(),
                body,
            });
            status
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    FakeProvider {
        base: format!("http://{}", addr),
        rx,
    }
}
