//! Review — a scored comment linking a [`User`](crate::user::User) to a
//! [`Game`](crate::game::Game).

use serde::{Deserialize, Serialize};

use crate::id::{GameId, ReviewId, UserId};

/// A review of a game by a user.
///
/// `game_id` and `user_id` must reference existing rows; the persistence
/// layer enforces that, not this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub score: i64,
    pub comment: String,
    pub game_id: GameId,
    pub user_id: UserId,
}

impl Review {
    /// Overwrite exactly the fields present in `patch`.
    pub fn apply(&mut self, patch: ReviewPatch) {
        if let Some(score) = patch.score {
            self.score = score;
        }
        if let Some(comment) = patch.comment {
            self.comment = comment;
        }
        if let Some(game_id) = patch.game_id {
            self.game_id = game_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

/// A review that has not been persisted yet. The database assigns the id.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub score: i64,
    pub comment: String,
    pub game_id: GameId,
    pub user_id: UserId,
}

/// The fields a `PATCH` request is allowed to overwrite on a review.
///
/// Unknown field names fail deserialization instead of being ignored, so a
/// request cannot smuggle attributes outside this list. Foreign keys are
/// deliberately included: repointing a review is allowed.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewPatch {
    pub score: Option<i64>,
    pub comment: Option<String>,
    pub game_id: Option<GameId>,
    pub user_id: Option<UserId>,
}
