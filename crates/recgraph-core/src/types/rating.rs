//! Rating entity: one user's star rating of one item.

use serde::{Deserialize, Serialize};

use super::element::ElementId;
use super::item::ItemId;
use super::user::UserId;

/// Identifier for ratings. Rating ids form a single sequence shared across
/// all users, contiguous from 0.
pub type RatingId = ElementId;

/// Discrete rating level, one through five stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Star {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Star {
    /// All levels in ascending order.
    pub fn all() -> &'static [Star] {
        &[Star::One, Star::Two, Star::Three, Star::Four, Star::Five]
    }

    /// Number of stars, 1 through 5.
    pub fn count(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Star::One => write!(f, "1 star"),
            _ => write!(f, "{} stars", self.count()),
        }
    }
}

/// A single rating linking one user to one item.
///
/// Ratings are immutable once created. Unlike the other corpus entities they
/// carry no name or description: corpora hold millions of them and nothing
/// ever reads such fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    id: RatingId,
    user: UserId,
    item: ItemId,
    star: Star,
}

impl Rating {
    pub fn new(id: RatingId, user: UserId, item: ItemId, star: Star) -> Self {
        Self {
            id,
            user,
            item,
            star,
        }
    }

    pub fn id(&self) -> RatingId {
        self.id
    }

    /// The user who authored this rating.
    pub fn user(&self) -> UserId {
        self.user
    }

    /// The item this rating applies to.
    pub fn item(&self) -> ItemId {
        self.item
    }

    pub fn star(&self) -> Star {
        self.star
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: user {} rated item {} ({})",
            self.id, self.user, self.item, self.star
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_levels_cover_enumeration() {
        assert_eq!(Star::all().len(), 5);
        assert_eq!(Star::all()[0].count(), 1);
        assert_eq!(Star::all()[4].count(), 5);
    }

    #[test]
    fn test_display() {
        let rating = Rating::new(0, 7, 3, Star::Four);
        assert_eq!(rating.to_string(), "0: user 7 rated item 3 (4 stars)");
        assert_eq!(Star::One.to_string(), "1 star");
    }
}
