//! Game — title/genre/platform attributes; subject of reviews.

use serde::{Deserialize, Serialize};

use crate::id::GameId;

/// A game that can be reviewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub genre: String,
    pub platform: String,
}

/// A game that has not been persisted yet. The database assigns the id.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub title: String,
    pub genre: String,
    pub platform: String,
}

impl NewGame {
    /// Create a builder for constructing a [`NewGame`].
    #[must_use]
    pub fn builder() -> NewGameBuilder {
        NewGameBuilder::default()
    }
}

/// Step-by-step builder for [`NewGame`].
#[derive(Debug, Default)]
pub struct NewGameBuilder {
    title: Option<String>,
    genre: Option<String>,
    platform: Option<String>,
}

impl NewGameBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Consume the builder and return a [`NewGame`].
    #[must_use]
    pub fn build(self) -> NewGame {
        NewGame {
            title: self.title.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            platform: self.platform.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_new_game_with_all_fields() {
        let game = NewGame::builder()
            .title("Outer Wilds")
            .genre("Adventure")
            .platform("PC")
            .build();
        assert_eq!(game.title, "Outer Wilds");
        assert_eq!(game.genre, "Adventure");
        assert_eq!(game.platform, "PC");
    }

    #[test]
    fn should_serialize_as_flat_field_mapping() {
        let game = Game {
            id: GameId::from_i64(4),
            title: "Hades".to_string(),
            genre: "Roguelike".to_string(),
            platform: "Switch".to_string(),
        };
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "title": "Hades",
                "genre": "Roguelike",
                "platform": "Switch",
            })
        );
    }
}
