//! User — an identity with a display name; owner of reviews.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A registered user.
///
/// Reviews reference users through [`Review::user_id`](crate::review::Review);
/// the serialized form stays flat and never embeds them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// A user that has not been persisted yet. The database assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_as_flat_field_mapping() {
        let user = User {
            id: UserId::from_i64(1),
            name: "ada".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "ada"}));
    }
}
