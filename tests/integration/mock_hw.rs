//! Mock adapters for integration tests.
//!
//! `MockTransport` replays scripted HTTP outcomes per URL and records
//! every request so tests can assert on the full request history.

use soilwatch::app::events::AppEvent;
use soilwatch::app::ports::{EventSink, HttpTransport, TransportError};
use std::collections::{HashMap, VecDeque};

// ── Request record ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Get(String),
    Post { url: String, body: Option<String> },
}

// ── MockTransport ─────────────────────────────────────────────

/// Scripted responses keyed by URL.  An unscripted URL is unreachable.
#[derive(Default)]
pub struct MockTransport {
    pub requests: Vec<Request>,
    gets: HashMap<String, VecDeque<Result<String, TransportError>>>,
    posts: HashMap<String, VecDeque<Result<(), TransportError>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(mut self, url: &str, result: Result<&str, TransportError>) -> Self {
        self.gets
            .entry(url.to_owned())
            .or_default()
            .push_back(result.map(str::to_owned));
        self
    }

    pub fn on_post(mut self, url: &str, result: Result<(), TransportError>) -> Self {
        self.posts.entry(url.to_owned()).or_default().push_back(result);
        self
    }

    pub fn urls(&self) -> Vec<&str> {
        self.requests
            .iter()
            .map(|r| match r {
                Request::Get(url) | Request::Post { url, .. } => url.as_str(),
            })
            .collect()
    }
}

impl HttpTransport for MockTransport {
    fn get(&mut self, url: &str) -> Result<String, TransportError> {
        self.requests.push(Request::Get(url.to_owned()));
        self.gets
            .get_mut(url)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(TransportError::Unreachable))
    }

    fn post(&mut self, url: &str, body: Option<&str>) -> Result<(), TransportError> {
        self.requests.push(Request::Post {
            url: url.to_owned(),
            body: body.map(str::to_owned),
        });
        self.posts
            .get_mut(url)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(TransportError::Unreachable))
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
