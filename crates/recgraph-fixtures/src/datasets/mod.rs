//! Generated recommendation corpora.
//!
//! [`RecDataset`] is the output of [`DatasetGenerator`]: five id → entity
//! maps with read accessors, a serializable summary for reports, and a
//! consistency check used by tests and diagnostics.

pub mod generator;

pub use generator::DatasetGenerator;

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use recgraph_core::{
    Category, CategoryId, Item, ItemId, Quality, QualityId, Rating, RatingId, User, UserId,
};

use crate::config::GeneratorConfig;
use crate::datasets::generator::{MAX_QUALITIES_PER_ITEM, MAX_RATINGS_PER_USER, MIN_QUALITIES_PER_ITEM};

/// Consistency violations detectable in a generated corpus.
///
/// Generation itself cannot fail; these only surface through
/// [`RecDataset::validate`], which re-checks the invariants the generator is
/// supposed to uphold.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("item {item} has {links} quality links, expected {MIN_QUALITIES_PER_ITEM} to {MAX_QUALITIES_PER_ITEM}")]
    QualityLinksOutOfRange { item: ItemId, links: usize },

    #[error("item {item} has {links} category links, expected exactly 1")]
    CategoryLinkCount { item: ItemId, links: usize },

    #[error("item {item} is filed under reserved category 0")]
    ReservedCategory { item: ItemId },

    #[error("link between item {item} and quality {quality} is not mirrored on both sides")]
    AsymmetricQualityLink { item: ItemId, quality: QualityId },

    #[error("item {item} is not a member of its category {category}")]
    AsymmetricCategoryLink { item: ItemId, category: CategoryId },

    #[error("rating id sequence is not contiguous: missing id {missing}")]
    NonContiguousRatingIds { missing: RatingId },

    #[error("rating {rating} references missing user {user}")]
    MissingUser { rating: RatingId, user: UserId },

    #[error("rating {rating} references missing item {item}")]
    MissingItem { rating: RatingId, item: ItemId },

    #[error("rating {rating} is not mirrored in the collections of user {user} and item {item}")]
    AsymmetricRatingLink {
        rating: RatingId,
        user: UserId,
        item: ItemId,
    },

    #[error("user {user} authored {ratings} ratings, expected at most {MAX_RATINGS_PER_USER}")]
    TooManyRatings { user: UserId, ratings: usize },

    #[error("dangling reference to {entity} id {id}")]
    DanglingReference { entity: &'static str, id: u64 },
}

/// Per-kind entity counts of a generated corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Effective scale the corpus was generated at.
    pub scale: u64,
    pub users: usize,
    pub items: usize,
    pub qualities: usize,
    pub categories: usize,
    pub ratings: usize,
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "corpus at scale {}", self.scale)?;
        writeln!(f, "  users:      {}", self.users)?;
        writeln!(f, "  items:      {}", self.items)?;
        writeln!(f, "  qualities:  {}", self.qualities)?;
        writeln!(f, "  categories: {}", self.categories)?;
        write!(f, "  ratings:    {}", self.ratings)
    }
}

/// A complete generated corpus.
///
/// All five maps are populated during generation and only read afterwards;
/// accessors hand out shared references and no mutation surface is exposed.
#[derive(Debug)]
pub struct RecDataset {
    pub(crate) users: HashMap<UserId, User>,
    pub(crate) items: HashMap<ItemId, Item>,
    pub(crate) qualities: HashMap<QualityId, Quality>,
    pub(crate) categories: HashMap<CategoryId, Category>,
    pub(crate) ratings: HashMap<RatingId, Rating>,
    pub(crate) scale: u64,
    pub(crate) config: GeneratorConfig,
}

impl RecDataset {
    /// Generated users keyed by id.
    pub fn users(&self) -> &HashMap<UserId, User> {
        &self.users
    }

    /// Generated items keyed by id.
    pub fn items(&self) -> &HashMap<ItemId, Item> {
        &self.items
    }

    /// Generated qualities keyed by id.
    pub fn qualities(&self) -> &HashMap<QualityId, Quality> {
        &self.qualities
    }

    /// Generated categories keyed by id.
    pub fn categories(&self) -> &HashMap<CategoryId, Category> {
        &self.categories
    }

    /// Generated ratings keyed by id.
    pub fn ratings(&self) -> &HashMap<RatingId, Rating> {
        &self.ratings
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn quality_count(&self) -> usize {
        self.qualities.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    /// Effective scale the corpus was generated at.
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// The configuration the corpus was generated from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Per-kind counts for reporting.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            scale: self.scale,
            users: self.users.len(),
            items: self.items.len(),
            qualities: self.qualities.len(),
            categories: self.categories.len(),
            ratings: self.ratings.len(),
        }
    }

    /// Re-check corpus consistency, returning the first violation found.
    ///
    /// Verifies the per-item link bounds, the reserved-category exclusion,
    /// two-sided mirroring of every quality, category, and rating link,
    /// rating id contiguity, referential integrity, and the per-user rating
    /// cap.
    pub fn validate(&self) -> Result<(), DatasetError> {
        self.validate_item_links()?;
        self.validate_quality_symmetry()?;
        self.validate_ratings()?;
        Ok(())
    }

    fn validate_item_links(&self) -> Result<(), DatasetError> {
        for (id, item) in &self.items {
            let quality_links = item.qualities().len();
            if !(MIN_QUALITIES_PER_ITEM..=MAX_QUALITIES_PER_ITEM).contains(&quality_links) {
                return Err(DatasetError::QualityLinksOutOfRange {
                    item: *id,
                    links: quality_links,
                });
            }
            for quality in item.qualities() {
                if !self.qualities.contains_key(quality) {
                    return Err(DatasetError::DanglingReference {
                        entity: "quality",
                        id: *quality,
                    });
                }
            }

            if item.categories().len() != 1 {
                return Err(DatasetError::CategoryLinkCount {
                    item: *id,
                    links: item.categories().len(),
                });
            }
            let category_id = item.categories()[0];
            if category_id == 0 {
                return Err(DatasetError::ReservedCategory { item: *id });
            }
            let category =
                self.categories
                    .get(&category_id)
                    .ok_or_else(|| DatasetError::DanglingReference {
                        entity: "category",
                        id: category_id,
                    })?;
            if !category.contains(*id) {
                return Err(DatasetError::AsymmetricCategoryLink {
                    item: *id,
                    category: category_id,
                });
            }
        }
        Ok(())
    }

    /// Quality links are a multiset on both sides: every (item, quality)
    /// pair must appear the same number of times in the item's list and in
    /// the quality's list, duplicates included.
    fn validate_quality_symmetry(&self) -> Result<(), DatasetError> {
        let mut balance: HashMap<(ItemId, QualityId), i64> = HashMap::new();
        for (id, item) in &self.items {
            for quality in item.qualities() {
                *balance.entry((*id, *quality)).or_default() += 1;
            }
        }
        for (id, quality) in &self.qualities {
            for item in quality.items() {
                *balance.entry((*item, *id)).or_default() -= 1;
            }
        }
        for ((item, quality), count) in balance {
            if count != 0 {
                return Err(DatasetError::AsymmetricQualityLink { item, quality });
            }
        }
        Ok(())
    }

    fn validate_ratings(&self) -> Result<(), DatasetError> {
        for id in 0..self.ratings.len() as RatingId {
            if !self.ratings.contains_key(&id) {
                return Err(DatasetError::NonContiguousRatingIds { missing: id });
            }
        }

        for rating in self.ratings.values() {
            let user = self
                .users
                .get(&rating.user())
                .ok_or_else(|| DatasetError::MissingUser {
                    rating: rating.id(),
                    user: rating.user(),
                })?;
            let item = self
                .items
                .get(&rating.item())
                .ok_or_else(|| DatasetError::MissingItem {
                    rating: rating.id(),
                    item: rating.item(),
                })?;
            if !user.ratings().contains(&rating.id()) || !item.ratings().contains(&rating.id()) {
                return Err(DatasetError::AsymmetricRatingLink {
                    rating: rating.id(),
                    user: rating.user(),
                    item: rating.item(),
                });
            }
        }

        for (id, user) in &self.users {
            if user.ratings().len() > MAX_RATINGS_PER_USER {
                return Err(DatasetError::TooManyRatings {
                    user: *id,
                    ratings: user.ratings().len(),
                });
            }
        }
        Ok(())
    }
}
