//! In-memory transport double for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{LookupError, Result};
use crate::resolver::{HttpResponse, HttpTransport};

/// A request the mock has served.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Serves canned responses keyed by method and URL; unknown routes fail
/// as transport errors.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(&'static str, String), HttpResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(self, url: &str, response: HttpResponse) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(("GET", url.to_string()), response);
        self
    }

    pub fn on_post(self, url: &str, response: HttpResponse) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(("POST", url.to_string()), response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn serve(&self, request: RecordedRequest) -> Result<HttpResponse> {
        let key = (request.method, request.url.clone());
        self.requests.lock().unwrap().push(request);
        self.routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| LookupError::Transport(format!("connection refused: {}", key.1)))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.serve(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            content_type: None,
            body: Vec::new(),
        })
    }

    async fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<HttpResponse> {
        self.serve(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            content_type: Some(content_type.to_string()),
            body,
        })
    }
}
