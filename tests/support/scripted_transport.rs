//! In-process transport double: answers from a script and records requests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use rosette_api::{HttpTransport, HttpTransportRequest, HttpTransportResponse, RosetteError};
use serde_json::Value;

#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpTransportResponse, RosetteError>>>,
    requests: Mutex<Vec<HttpTransportRequest>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: Value) {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("x-rosetteapi-concurrency", HeaderValue::from_static("5"));
        self.script.lock().unwrap().push_back(Ok(HttpTransportResponse {
            status,
            headers,
            body: serde_json::to_vec(&body).unwrap(),
        }));
    }

    pub fn push_error(&self, error: RosetteError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpTransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpTransportRequest {
        self.requests().pop().expect("no request was sent")
    }

    /// Body of the last request decoded as JSON.
    pub fn last_json_body(&self) -> Value {
        let body = self.last_request().body.expect("request had no body");
        serde_json::from_slice(&body).unwrap()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, RosetteError> {
        self.requests.lock().unwrap().push(request);
        self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(HttpTransportResponse {
                status: 200,
                headers: HeaderMap::new(),
                body: b"{}".to_vec(),
            })
        })
    }
}
