use serde::{Deserialize, Serialize};

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Body returned by `POST auth/access-token`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::TokenResponse;

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let token: TokenResponse =
            serde_json::from_value(json!({ "access_token": "tok123" })).unwrap();
        assert_eq!(token.access_token, "tok123");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let token: TokenResponse = serde_json::from_value(json!({
            "access_token": "abc",
            "token_type": "bearer",
            "expires_in": 3600,
        }))
        .unwrap();
        assert_eq!(token.access_token, "abc");
    }

    #[test]
    fn test_missing_access_token_is_rejected() {
        let r = serde_json::from_value::<TokenResponse>(json!({ "token_type": "bearer" }));
        assert!(r.is_err());
    }
}
