use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated user as returned by `GET users/me`
///
/// Timestamps are naive UTC, the API doesn't send an offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub is_superuser: bool,
    pub is_active: bool,
    pub is_reported: bool,
    pub is_blocked: bool,
    #[serde(default)]
    pub preferences: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    /// First and last name if either is set, otherwise the username
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.username.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::User;

    fn body() -> serde_json::Value {
        json!({
            "id": "0b7ad4a6-54b1-4ac4-9a37-9a0e8c5b1f42",
            "username": "alice",
            "email": "alice@example.com",
            "first_name": null,
            "last_name": null,
            "is_superuser": false,
            "is_active": true,
            "is_reported": false,
            "is_blocked": false,
            "preferences": null,
            "created_at": "2023-04-01T10:20:30.123456",
            "updated_at": "2023-04-02T08:00:00",
        })
    }

    #[test]
    fn test_user_deserializes_api_body() {
        let user: User = serde_json::from_value(body()).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.id.to_string(), "0b7ad4a6-54b1-4ac4-9a37-9a0e8c5b1f42");
        assert!(user.is_active);
        assert_eq!(user.created_at.to_string(), "2023-04-01 10:20:30.123456");
    }

    #[test]
    fn test_display_name() {
        let mut user: User = serde_json::from_value(body()).unwrap();
        assert_eq!(user.display_name(), "alice");

        user.first_name = Some("Alice".to_string());
        assert_eq!(user.display_name(), "Alice");

        user.last_name = Some("Liddell".to_string());
        assert_eq!(user.display_name(), "Alice Liddell");
    }
}
