use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use tracer_client::{BoxError, HttpRequest, HttpResponse, HttpTransport};

#[allow(dead_code)]
enum Reply {
    Respond(StatusCode, String),
    Fail(String),
}

/// In-memory transport that records every request and answers from a table
/// keyed by `"<METHOD> <path>"`. Unknown routes get an empty 200.
#[derive(Default)]
pub struct FakeTransport {
    replies: HashMap<String, Reply>,
    log: Mutex<Vec<HttpRequest>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, route: &str, status: StatusCode, body: &str) -> Self {
        self.replies
            .insert(route.to_string(), Reply::Respond(status, body.to_string()));
        self
    }

    pub fn fail(mut self, route: &str, message: &str) -> Self {
        self.replies
            .insert(route.to_string(), Reply::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn routes(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|request| format!("{} {}", request.method, request.url.path()))
            .collect()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let route = format!("{} {}", request.method, request.url.path());
        self.log.lock().unwrap().push(request);

        match self.replies.get(&route) {
            Some(Reply::Respond(status, body)) => Ok(HttpResponse::new(*status, body.clone())),
            Some(Reply::Fail(message)) => Err(message.clone().into()),
            None => Ok(HttpResponse::new(StatusCode::OK, "")),
        }
    }
}
