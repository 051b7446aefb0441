use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "wasm")]
mod frontend {
    use gloo::net::Error as GlooNetError;

    use super::FrontendError;

    impl<T> From<GlooNetError> for FrontendError<T> {
        fn from(value: GlooNetError) -> Self {
            match value {
                // The body arrived but didn't match the expected shape
                GlooNetError::SerdeError(e) => Self::Decode { message: e.to_string() },
                other => Self::Client { message: format!("gloo-net error: {other}") },
            }
        }
    }
}

/// Error body the user API sends along with a non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{detail}")]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    pub fn new<V: Into<serde_json::Value>>(detail: V) -> Self {
        Self { detail: detail.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("Expected content-type {expected} but got {got:?} (body: {body})")]
pub struct WrongContentTypeError {
    pub expected: String,
    pub got: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontendError<T> {
    /// The server answered with a non-2xx status
    #[error("Server error ({status}): {inner}")]
    Server { status: u16, inner: T },
    /// The request never produced a response
    #[error("Client error: {message}")]
    Client { message: String },
    /// The response body couldn't be deserialized into the expected type
    #[error("Decode error: {message}")]
    Decode { message: String },
    /// The request body couldn't be serialized
    #[error("Encode error: {message}")]
    Encode { message: String },
    #[error("Wrong content type: {inner}")]
    WrongContentType { inner: WrongContentTypeError },
    #[error("Config error: {message}")]
    Config { message: String },

    #[error("{context}: {inner}")]
    WithContext { context: String, inner: Box<Self> },
}

impl<T> From<WrongContentTypeError> for FrontendError<T> {
    fn from(inner: WrongContentTypeError) -> Self {
        Self::WrongContentType { inner }
    }
}

impl<T> From<serde_json::Error> for FrontendError<T> {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode { message: value.to_string() }
    }
}

pub trait ErrorContext<E>: Sized {
    /// Add helpful context to errors
    ///
    /// `context` is provided as a closure to avoid potential formatting cost if
    /// the result isn't an error
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> E;
    /// Add helpful context to errors
    fn context<S: Into<String>>(self, context: S) -> E;
}

impl<T, E: Into<FrontendError<T>>> ErrorContext<FrontendError<T>> for E {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> FrontendError<T> {
        self.context(context())
    }
    fn context<S: Into<String>>(self, context: S) -> FrontendError<T> {
        FrontendError::WithContext { context: context.into(), inner: Box::new(self.into()) }
    }
}

pub trait ResultContext<T, E: ErrorContext<E>> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E>;
    fn context<S: Into<String>>(self, context: S) -> Result<T, E>;
}

impl<T, E: ErrorContext<E>> ResultContext<T, E> for Result<T, E> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E> {
        self.map_err(|e| e.with_context(context))
    }
    fn context<S: Into<String>>(self, context: S) -> Result<T, E> {
        self.map_err(|e| e.context(context))
    }
}
