//! Scripted transport for unit tests

use crate::error::{Error, Result};
use crate::http::{GitHubResponse, PageLinks, Transport};
use crate::request::Request;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that replays queued responses and records every request
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<GitHubResponse>>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a page of elements linking to `next` page number
    pub(crate) fn page(self, body: Value, next: Option<u32>) -> Self {
        let links = next
            .map(|page| PageLinks::with_next(format!("https://api.github.com/items?page={page}")))
            .unwrap_or_default();
        self.respond(Ok(GitHubResponse::new(body).with_links(links)))
    }

    pub(crate) fn respond(self, response: Result<GitHubResponse>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn fail(self, error: Error) -> Self {
        self.respond(Err(error))
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, request: &Request) -> Result<GitHubResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::http_status(500, "unexpected request")))
    }
}
