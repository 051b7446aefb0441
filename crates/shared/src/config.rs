/// How requests are authenticated
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// Let the browser send its cookies
    Cookie,
    /// Attach `Authorization: Bearer <token>` to every request
    Bearer(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    pub auth: AuthMode,
}

impl ClientConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url, auth: AuthMode::Cookie }
    }

    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a relative endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `<protocol>//<host>/api/` for the page the client is running on
    #[cfg(feature = "wasm")]
    pub fn from_location<T>() -> Result<Self, crate::api::error::FrontendError<T>> {
        let root = crate::utils::location::root_url()?;
        Ok(Self::new(format!("{root}{}", crate::api::API_BASE_PATH)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8000/api");
        assert_eq!(config.base_url(), "http://localhost:8000/api/");

        let config = ClientConfig::new("http://localhost:8000/api/");
        assert_eq!(config.base_url(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_url_joins_relative_paths() {
        let config = ClientConfig::new("http://localhost:8000/api/");
        assert_eq!(config.url("users/me"), "http://localhost:8000/api/users/me");
        assert_eq!(
            config.url("/auth/access-token"),
            "http://localhost:8000/api/auth/access-token"
        );
    }

    #[test]
    fn test_defaults_to_cookie_auth() {
        let config = ClientConfig::new("/api/");
        assert_eq!(config.auth, AuthMode::Cookie);

        let config = config.with_auth(AuthMode::Bearer("tok".to_string()));
        assert_eq!(config.auth, AuthMode::Bearer("tok".to_string()));
    }
}
