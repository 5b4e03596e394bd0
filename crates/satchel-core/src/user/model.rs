//! User profile domain model.
//!
//! Mirrors the user object returned by the login endpoint. Every field is
//! defaulted so a partial server payload still deserializes; the cached
//! profile is display data, not an authorization source.

use serde::{Deserialize, Serialize};

/// A role attached to the user account (e.g. "Parent", "Teacher").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A dependent/child record linked to the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub child_firstname: String,
    #[serde(default)]
    pub child_lastname: String,
    #[serde(default)]
    pub year_id: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub class_id: String,
    #[serde(default, rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub student_id: String,
}

/// User profile cached from the login response.
///
/// Persisted as JSON in the secure store and reloaded on restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email_id: String,
    #[serde(default)]
    pub user_type: Vec<UserRole>,
    #[serde(default)]
    pub contact_no: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub child_data: Vec<ChildRecord>,
}

impl UserProfile {
    /// Full display name, falling back to the email when both name fields
    /// are empty.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email_id.clone()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_deserializes_with_defaults() {
        let user: UserProfile =
            serde_json::from_str(r#"{"id":"1","first_name":"A"}"#).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.first_name, "A");
        assert!(user.child_data.is_empty());
        assert!(user.user_type.is_empty());
    }

    #[test]
    fn class_field_round_trips_under_original_name() {
        let child: ChildRecord =
            serde_json::from_str(r#"{"id":"c1","class":"3B"}"#).unwrap();
        assert_eq!(child.class_name, "3B");
        let json = serde_json::to_string(&child).unwrap();
        assert!(json.contains(r#""class":"3B""#));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = UserProfile {
            email_id: "a@example.com".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "a@example.com");

        let user = UserProfile {
            first_name: "A".into(),
            last_name: "B".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "A B");
    }
}
