//! In-process mock of the catalog service, backed by axum.
//!
//! Serves whatever JSON value it is configured with, records every request
//! path, and can be flipped into a failing mode that answers 500s.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockCatalog {
    requests: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
    products: Arc<Mutex<serde_json::Value>>,
}

impl MockCatalog {
    pub fn new(products: serde_json::Value) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(AtomicBool::new(false)),
            products: Arc::new(Mutex::new(products)),
        }
    }

    /// Bind to an ephemeral port and return the base URL
    pub async fn serve(&self) -> String {
        let router = Router::new()
            .route("/products", get(list_products))
            .route("/products/category/:name", get(list_by_category))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock catalog");
        let addr = listener.local_addr().expect("mock catalog addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock catalog");
        });

        format!("http://{}", addr)
    }

    /// Request paths seen so far, with category names decoded
    pub fn request_log(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_products(&self, products: serde_json::Value) {
        *self.products.lock().unwrap() = products;
    }

    fn respond(&self) -> Response {
        if self.failing.load(Ordering::SeqCst) {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        } else {
            Json(self.products.lock().unwrap().clone()).into_response()
        }
    }
}

async fn list_products(State(mock): State<MockCatalog>) -> Response {
    mock.requests.lock().unwrap().push("/products".to_string());
    mock.respond()
}

async fn list_by_category(
    Path(name): Path<String>,
    State(mock): State<MockCatalog>,
) -> Response {
    mock.requests
        .lock()
        .unwrap()
        .push(format!("/products/category/{}", name));
    mock.respond()
}
