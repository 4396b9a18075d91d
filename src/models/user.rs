use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;

use crate::models::field::{to_wire, FieldSpec};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    // Stored as an opaque string; this service never hashes or verifies it.
    pub pw: String,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub pw: String,
}

/// Writable user fields, in the order missing-field errors are reported.
pub const USER_FIELDS: &[FieldSpec] = &[FieldSpec::text("username"), FieldSpec::text("pw")];

pub fn serialize_user(user: &User) -> Value {
    to_wire(
        json!({
            "id": user.id,
            "username": user.username,
            "pw": user.pw,
        }),
        USER_FIELDS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_user_has_exactly_three_fields() {
        let user = User {
            id: 1,
            username: "Newbie".into(),
            pw: "654321".into(),
        };
        assert_eq!(
            serialize_user(&user),
            json!({ "id": 1, "username": "Newbie", "pw": "654321" })
        );
    }

    #[test]
    fn serialized_user_escapes_markup() {
        let user = User {
            id: 2,
            username: "<img src=x onerror=alert(1)>".into(),
            pw: "a&b".into(),
        };
        let wire = serialize_user(&user);
        assert_eq!(wire["username"], "&lt;img src=x onerror=alert(1)&gt;");
        assert_eq!(wire["pw"], "a&amp;b");
    }
}
