use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::api::error::FrontendError;

#[cfg(feature = "wasm")]
pub use gloo_client::*;

/// A request body ready to be put on the wire
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/json`
    Json(Value),
    /// `application/x-www-form-urlencoded`, already encoded
    Form(String),
    /// Handed to fetch untouched (`FormData`, `URLSearchParams`, `Blob`, ...)
    /// so the browser picks the content type
    #[cfg(feature = "wasm")]
    Raw(wasm_bindgen::JsValue),
}

impl RequestBody {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Form(_) => "form",
            #[cfg(feature = "wasm")]
            Self::Raw(_) => "raw",
        }
    }
}

/// Values that know how they should be sent
pub trait ToRequestBody {
    fn to_request_body(&self) -> Result<RequestBody, serde_json::Error>;
}

impl ToRequestBody for Value {
    fn to_request_body(&self) -> Result<RequestBody, serde_json::Error> {
        Ok(RequestBody::Json(self.clone()))
    }
}

/// Sends any [`Serialize`] value as json
#[derive(Debug, Clone, PartialEq)]
pub struct Json<T>(pub T);

impl<T: Serialize> ToRequestBody for Json<T> {
    fn to_request_body(&self) -> Result<RequestBody, serde_json::Error> {
        Ok(RequestBody::Json(serde_json::to_value(&self.0)?))
    }
}

/// Encodes `body`, reporting failures as [`FrontendError::Encode`]
pub fn encode_body<B, T>(body: &B) -> Result<RequestBody, FrontendError<T>>
where
    B: ToRequestBody + ?Sized,
{
    body.to_request_body().map_err(|e| FrontendError::Encode { message: e.to_string() })
}

/// A client already pointed at the user API, answering in json
///
/// Paths are relative to the client's base URL. Implementations make exactly
/// one request per call and never retry.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    type Error;

    async fn get<R>(&self, path: &str) -> Result<R, Self::Error>
    where
        R: DeserializeOwned;

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Self::Error>
    where
        B: ToRequestBody + ?Sized,
        R: DeserializeOwned;
}

/// Clients that can carry a bearer token on later requests
pub trait BearerAuth {
    /// `None` drops the token
    fn set_bearer_token(&mut self, token: Option<String>);
}

#[cfg(feature = "wasm")]
mod gloo_client {
    use std::any::type_name;

    use gloo::net::http::{Method, RequestBuilder};
    use headers::{CacheControl, Header};
    use http::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
    use gloo::utils::format::JsValueSerdeExt;
    use mime::{Mime, APPLICATION_JSON, APPLICATION_WWW_FORM_URLENCODED};
    use serde::de::DeserializeOwned;
    use tracing::debug;
    use wasm_bindgen::JsValue;
    use web_sys::js_sys::{Array, Object};

    use super::{encode_body, BearerAuth, HttpClient, RequestBody, ToRequestBody};
    use crate::{
        api::error::{ErrorContext, ErrorDetail, FrontendError, ResultContext, WrongContentTypeError},
        config::{AuthMode, ClientConfig},
    };

    fn no_cache(builder: RequestBuilder) -> RequestBuilder {
        let mut values = Vec::with_capacity(1);
        CacheControl::new().with_no_store().encode(&mut values);

        match values.pop().as_ref().and_then(|v| v.to_str().ok()) {
            Some(value) => builder.header(CACHE_CONTROL.as_str(), value),
            None => builder,
        }
    }

    fn is_json(content_type: Option<&String>) -> bool {
        content_type
            .and_then(|v| v.parse::<Mime>().ok())
            .map_or(false, |m| m.essence_str() == APPLICATION_JSON.essence_str())
    }

    // Plain objects and arrays are sent as json, anything else (FormData,
    // URLSearchParams, strings) goes to fetch as is
    impl ToRequestBody for JsValue {
        fn to_request_body(&self) -> Result<RequestBody, serde_json::Error> {
            let is_plain = self.is_object() && {
                let proto = JsValue::from(Object::get_prototype_of(self));
                proto.is_null() || proto == JsValue::from(Object::get_prototype_of(&Object::new()))
            };

            if is_plain || Array::is_array(self) {
                Ok(RequestBody::Json(self.into_serde()?))
            } else {
                Ok(RequestBody::Raw(self.clone()))
            }
        }
    }

    /// [`HttpClient`] on top of the browser's fetch via gloo-net
    #[derive(Debug, Clone)]
    pub struct GlooClient {
        config: ClientConfig,
    }

    impl GlooClient {
        pub fn new(config: ClientConfig) -> Self {
            Self { config }
        }

        /// Client for the API served from the same origin as the page
        pub fn from_location() -> Result<Self, FrontendError<ErrorDetail>> {
            Ok(Self::new(ClientConfig::from_location()?))
        }

        pub fn config(&self) -> &ClientConfig {
            &self.config
        }

        fn builder(&self, method: Method, url: &str) -> RequestBuilder {
            let builder = no_cache(RequestBuilder::new(url))
                .method(method)
                .header(ACCEPT.as_str(), APPLICATION_JSON.essence_str());

            match &self.config.auth {
                // The browser attaches same-origin cookies itself
                AuthMode::Cookie => builder,
                AuthMode::Bearer(token) => {
                    builder.header(AUTHORIZATION.as_str(), &format!("Bearer {token}"))
                }
            }
        }

        /// Perform a single json request
        ///
        /// Non-2xx responses become [`FrontendError::Server`] carrying the
        /// API's error body. Nothing is retried.
        async fn json_request<R>(
            &self,
            method: Method,
            path: &str,
            body: Option<RequestBody>,
        ) -> Result<R, FrontendError<ErrorDetail>>
        where
            R: DeserializeOwned,
        {
            let url = self.config.url(path);
            let kind = body.as_ref().map_or("none", RequestBody::kind);
            debug!("json_request({method}, {url}, body: {kind})");

            let builder = self.builder(method.clone(), &url);

            // Add the body along with its content type
            debug!("json_request::request::build");
            let request = match body {
                Some(RequestBody::Json(value)) => builder.json(&value),
                Some(RequestBody::Form(form)) => builder
                    .header(CONTENT_TYPE.as_str(), APPLICATION_WWW_FORM_URLENCODED.essence_str())
                    .body(form),
                Some(RequestBody::Raw(value)) => builder.body(value),
                None => builder.build(),
            }
            .map_err(FrontendError::from)
            .with_context(|| format!("Building {kind} request for {method} {url}"))?;

            // Send the request and handle the network and js errors
            debug!("json_request::request::send");
            let response = request
                .send()
                .await
                .map_err(FrontendError::from)
                .with_context(|| format!("Sending to {method} {url}"))?;

            let content_type = response.headers().get(CONTENT_TYPE.as_str());
            let is_json = is_json(content_type.as_ref());
            debug!("json_request::response::is_json: {is_json}");

            if !response.ok() {
                let status = response.status();
                debug!("json_request::return Err(Server({status}))");

                // Error bodies are json from the API but proxies may send anything
                let inner = if is_json {
                    response
                        .json::<ErrorDetail>()
                        .await
                        .map_err(FrontendError::from)
                        .with_context(|| format!("Deserializing error response from {method} {url}"))?
                } else {
                    let text = response
                        .text()
                        .await
                        .map_err(FrontendError::from)
                        .with_context(|| format!("Extracting error body as text from {method} {url}"))?;
                    ErrorDetail::new(text)
                };

                return Err(FrontendError::Server { status, inner });
            }

            if !is_json {
                let body = response
                    .text()
                    .await
                    .map_err(FrontendError::from)
                    .with_context(|| format!("Extracting response body as text from {method} {url}"))?;

                debug!("json_request::return Err(WrongContentTypeError)");
                return Err(WrongContentTypeError {
                    expected: APPLICATION_JSON.to_string(),
                    got: content_type,
                    body,
                }
                .context(format!("Response from {method} {url}")));
            }

            debug!("json_request::deserialize");
            let payload = response.json::<R>().await.map_err(FrontendError::from).with_context(|| {
                format!("Deserializing OK response ({}) from {method} {url}", type_name::<R>())
            })?;

            debug!("json_request::return Ok::<{}>", type_name::<R>());
            Ok(payload)
        }
    }

    impl HttpClient for GlooClient {
        type Error = FrontendError<ErrorDetail>;

        async fn get<R>(&self, path: &str) -> Result<R, Self::Error>
        where
            R: DeserializeOwned,
        {
            self.json_request(Method::GET, path, None).await
        }

        async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Self::Error>
        where
            B: ToRequestBody + ?Sized,
            R: DeserializeOwned,
        {
            let body = encode_body(body)
                .with_context(|| format!("Encoding {} for POST {path}", type_name::<B>()))?;
            self.json_request(Method::POST, path, Some(body)).await
        }
    }

    impl BearerAuth for GlooClient {
        fn set_bearer_token(&mut self, token: Option<String>) {
            self.config.auth = match token {
                Some(token) => AuthMode::Bearer(token),
                None => AuthMode::Cookie,
            };
        }
    }
}
