//! User entity: an account that authors ratings.

use serde::{Deserialize, Serialize};

use super::element::{Element, ElementId};
use super::rating::RatingId;

/// Identifier for users.
pub type UserId = ElementId;

/// A user of the system, owning the ordered list of ratings it has authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    description: Option<String>,
    ratings: Vec<RatingId>,
}

impl User {
    /// Create a user with no ratings.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            ratings: Vec::new(),
        }
    }

    /// Ratings authored by this user, in authoring order.
    pub fn ratings(&self) -> &[RatingId] {
        &self.ratings
    }

    /// Record a rating authored by this user.
    pub fn add_rating(&mut self, rating: RatingId) {
        self.ratings.push(rating);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }
}

impl Element for User {
    fn id(&self) -> ElementId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}
