//! Scripted stand-ins for the HTTP client and the user state

use std::{cell::RefCell, collections::VecDeque};

use http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    api::error::{ErrorDetail, FrontendError},
    utils::fetch::{encode_body, BearerAuth, HttpClient, RequestBody, ToRequestBody},
};

pub type MockResult = Result<Value, FrontendError<ErrorDetail>>;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<RequestBody>,
    pub bearer: Option<String>,
}

/// Replays queued responses in order and records every request made
#[derive(Debug, Default)]
pub struct MockClient {
    responses: RefCell<VecDeque<MockResult>>,
    requests: RefCell<Vec<RecordedRequest>>,
    bearer: Option<String>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: MockResult) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    fn handle<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<R, FrontendError<ErrorDetail>> {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            bearer: self.bearer.clone(),
        });

        let response = self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(FrontendError::Client { message: format!("No scripted response for {path}") })
        })?;

        Ok(serde_json::from_value(response)?)
    }
}

impl HttpClient for MockClient {
    type Error = FrontendError<ErrorDetail>;

    async fn get<R>(&self, path: &str) -> Result<R, Self::Error>
    where
        R: DeserializeOwned,
    {
        self.handle(Method::GET, path, None)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Self::Error>
    where
        B: ToRequestBody + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.handle(Method::POST, path, Some(body))
    }
}

impl BearerAuth for MockClient {
    fn set_bearer_token(&mut self, token: Option<String>) {
        self.bearer = token;
    }
}

/// Keeps every value it was given
#[derive(Debug)]
pub struct RecordingState<U> {
    calls: RefCell<Vec<Option<U>>>,
}

impl<U: Clone> RecordingState<U> {
    pub fn new() -> Self {
        Self { calls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<Option<U>> {
        self.calls.borrow().clone()
    }

    /// `None` if `set` was never called
    pub fn last(&self) -> Option<Option<U>> {
        self.calls.borrow().last().cloned()
    }
}

impl<U> crate::state::UserState<U> for RecordingState<U> {
    fn set(&self, user: Option<U>) {
        self.calls.borrow_mut().push(user);
    }
}
