use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::utils::fetch::{RequestBody, ToRequestBody};

/// Username/password pair for `POST auth/access-token`
///
/// Sent as an OAuth2 password form. Nothing is checked client side.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl ToRequestBody for LoginCredentials {
    fn to_request_body(&self) -> Result<RequestBody, serde_json::Error> {
        let form = form_urlencoded::Serializer::new(String::new())
            .append_pair("username", &self.username)
            .append_pair("password", &self.password)
            .finish();
        Ok(RequestBody::Form(form))
    }
}

// Keep the password out of logs
impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
