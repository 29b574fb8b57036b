//! Item entity: the thing being rated and recommended.

use serde::{Deserialize, Serialize};

use super::category::CategoryId;
use super::element::{Element, ElementId};
use super::quality::QualityId;
use super::rating::RatingId;

/// Identifier for items.
pub type ItemId = ElementId;

/// An item in the corpus, carrying back-references to the qualities,
/// categories, and ratings attached to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: Option<String>,
    /// May hold the same quality more than once; assignment does not
    /// deduplicate.
    qualities: Vec<QualityId>,
    categories: Vec<CategoryId>,
    ratings: Vec<RatingId>,
}

impl Item {
    /// Create an item with no attachments.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            qualities: Vec::new(),
            categories: Vec::new(),
            ratings: Vec::new(),
        }
    }

    /// Qualities attached to this item, duplicates included.
    pub fn qualities(&self) -> &[QualityId] {
        &self.qualities
    }

    /// Attach a quality. Callers are expected to mirror the link on the
    /// quality's side.
    pub fn add_quality(&mut self, quality: QualityId) {
        self.qualities.push(quality);
    }

    /// Categories this item belongs to.
    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    /// Record membership in a category. Callers are expected to mirror the
    /// link on the category's side.
    pub fn add_category(&mut self, category: CategoryId) {
        self.categories.push(category);
    }

    /// Ratings given to this item.
    pub fn ratings(&self) -> &[RatingId] {
        &self.ratings
    }

    /// Record a rating given to this item.
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

impl Element for Item {
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

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}
