//! BakedGood — a priced item belonging to a [`Bakery`](crate::bakery::Bakery).

use serde::{Deserialize, Serialize};

use crate::id::{BakedGoodId, BakeryId};
use crate::time::Timestamp;

/// A baked good offered by a bakery.
///
/// `bakery_id` must reference an existing bakery; the persistence layer
/// enforces that. Price is a plain integer — no positivity constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BakedGood {
    pub id: BakedGoodId,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub bakery_id: BakeryId,
    pub created_at: Timestamp,
}

/// A baked good that has not been persisted yet. The database assigns the
/// id and the storage layer stamps `created_at`.
#[derive(Debug, Clone)]
pub struct NewBakedGood {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub bakery_id: BakeryId,
}
