pub mod error;
pub mod payloads;

/// Where the user API is mounted relative to the site root
pub const API_BASE_PATH: &str = "/api/";

/// Endpoints are relative to the configured base URL
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Auth {
    AccessToken,
}

impl Auth {
    pub const fn path(&self) -> &str {
        use Auth::*;
        match self {
            AccessToken => "auth/access-token",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    CurrentUser,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            CurrentUser => "users/me",
        }
    }
}
