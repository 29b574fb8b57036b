//! Quality entity: a weighted attribute items can carry.

use serde::{Deserialize, Serialize};

use super::element::{Element, ElementId};
use super::item::ItemId;

/// Identifier for qualities.
pub type QualityId = ElementId;

/// Relative weight of a quality when scoring recommendations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Importance {
    Trivial = 0,
    Low = 1,
    #[default]
    Normal = 2,
    High = 3,
    Essential = 4,
}

impl Importance {
    /// All levels in ascending order.
    pub fn all() -> &'static [Importance] {
        &[
            Importance::Trivial,
            Importance::Low,
            Importance::Normal,
            Importance::High,
            Importance::Essential,
        ]
    }

    /// Scoring multiplier for the recommendation algorithm.
    pub fn weight(self) -> f32 {
        match self {
            Importance::Trivial => 0.25,
            Importance::Low => 0.5,
            Importance::Normal => 1.0,
            Importance::High => 2.0,
            Importance::Essential => 4.0,
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Importance::Trivial => "trivial",
            Importance::Low => "low",
            Importance::Normal => "normal",
            Importance::High => "high",
            Importance::Essential => "essential",
        };
        write!(f, "{name}")
    }
}

/// A quality attachable to items, with a back-reference list of the items
/// carrying it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quality {
    id: QualityId,
    name: String,
    description: Option<String>,
    importance: Importance,
    /// May hold the same item more than once; assignment does not
    /// deduplicate.
    items: Vec<ItemId>,
}

impl Quality {
    /// Create a quality with [`Importance::Normal`] and no items.
    pub fn new(id: QualityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            importance: Importance::default(),
            items: Vec::new(),
        }
    }

    pub fn importance(&self) -> Importance {
        self.importance
    }

    pub fn set_importance(&mut self, importance: Importance) {
        self.importance = importance;
    }

    /// Items carrying this quality, duplicates included.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Record an item carrying this quality. Callers are expected to mirror
    /// the link on the item's side.
    pub fn add_item(&mut self, item: ItemId) {
        self.items.push(item);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }
}

impl Element for Quality {
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

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_levels_cover_enumeration() {
        assert_eq!(Importance::all().len(), 5);
        assert_eq!(Importance::all()[0], Importance::Trivial);
        assert_eq!(Importance::all()[4], Importance::Essential);
    }

    #[test]
    fn test_importance_weight_is_monotonic() {
        let weights: Vec<f32> = Importance::all().iter().map(|i| i.weight()).collect();
        assert!(weights.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_quality_defaults_to_normal() {
        let quality = Quality::new(0, "durable");
        assert_eq!(quality.importance(), Importance::Normal);
        assert!(quality.items().is_empty());
    }
}
