//! User records returned by the search endpoint.

use serde::{Deserialize, Serialize};

/// A user record from `GET /api/search`.
///
/// The server sends the identifier as `_id`; other fields such as `age` are
/// ignored because the dropdown never shows them.
///
/// # Examples
///
/// ```
/// use livesearch::domain::User;
///
/// let user: User = serde_json::from_str(
///     r#"{"name":"Ada","email":"ada@example.com","_id":"65f0c1","age":36}"#,
/// ).unwrap();
/// assert_eq!(user.edit_path(), "/edit/65f0c1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            id: id.into(),
        }
    }

    /// Path of the edit page for this user.
    #[must_use]
    pub fn edit_path(&self) -> String {
        format!("/edit/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_id_back_as_underscore_id() {
        let user = User::new("Grace", "grace@example.com", "abc123");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], "abc123");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn missing_id_is_rejected() {
        let parsed = serde_json::from_str::<User>(r#"{"name":"x","email":"y"}"#);
        assert!(parsed.is_err());
    }
}
