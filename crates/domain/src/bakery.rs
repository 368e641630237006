//! Bakery — a named shop that owns [`BakedGood`](crate::baked_good::BakedGood)s.

use serde::{Deserialize, Serialize};

use crate::id::BakeryId;
use crate::time::Timestamp;

/// A bakery.
///
/// `created_at` / `updated_at` are persistence metadata stamped by the
/// storage layer; `updated_at` moves on every successful `PATCH`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bakery {
    pub id: BakeryId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Bakery {
    /// Overwrite exactly the fields present in `patch`.
    pub fn apply(&mut self, patch: BakeryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

/// A bakery that has not been persisted yet. The database assigns the id
/// and the storage layer stamps the timestamps.
#[derive(Debug, Clone)]
pub struct NewBakery {
    pub name: String,
}

/// The fields a `PATCH` request is allowed to overwrite on a bakery.
///
/// Unknown field names fail deserialization instead of being ignored.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BakeryPatch {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time;

    #[test]
    fn should_overwrite_name_when_present_in_patch() {
        let ts = time::now();
        let mut bakery = Bakery {
            id: BakeryId::from_i64(1),
            name: "Old Crumb".to_string(),
            created_at: ts,
            updated_at: ts,
        };

        bakery.apply(BakeryPatch {
            name: Some("New Crumb".to_string()),
        });
        assert_eq!(bakery.name, "New Crumb");

        bakery.apply(BakeryPatch::default());
        assert_eq!(bakery.name, "New Crumb");
    }

    #[test]
    fn should_reject_unknown_patch_field() {
        let result: Result<BakeryPatch, _> =
            serde_json::from_value(serde_json::json!({"owner": "mallory"}));
        assert!(result.is_err());
    }
}
