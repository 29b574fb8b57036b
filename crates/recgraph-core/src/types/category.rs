//! Category entity: a container separating elements from each other.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::element::{Element, ElementId, ElementKind};

/// Identifier for categories.
pub type CategoryId = ElementId;

/// A category holding member elements keyed by their id.
///
/// The container is heterogeneous: members are recorded as an id plus an
/// [`ElementKind`] tag, so a category can in principle hold any element
/// kind even though corpus generation only files items into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    elements: HashMap<ElementId, ElementKind>,
}

impl Category {
    /// Create an empty category.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            elements: HashMap::new(),
        }
    }

    /// Member elements keyed by element id.
    pub fn elements(&self) -> &HashMap<ElementId, ElementKind> {
        &self.elements
    }

    /// Add a member element. Re-adding an existing member is a no-op.
    pub fn add_element(&mut self, id: ElementId, kind: ElementKind) {
        self.elements.entry(id).or_insert(kind);
    }

    /// Remove a member element, if present.
    pub fn remove_element(&mut self, id: ElementId) {
        self.elements.remove(&id);
    }

    /// Whether the element with the given id is a member.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }
}

impl Element for Category {
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

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_element_is_idempotent() {
        let mut category = Category::new(1, "Books");
        category.add_element(42, ElementKind::Item);
        category.add_element(42, ElementKind::Item);
        assert_eq!(category.elements().len(), 1);
        assert!(category.contains(42));
    }

    #[test]
    fn test_remove_element() {
        let mut category = Category::new(1, "Books");
        category.add_element(42, ElementKind::Item);
        category.remove_element(42);
        assert!(!category.contains(42));

        // Removing an absent member is harmless.
        category.remove_element(42);
        assert!(category.elements().is_empty());
    }

    #[test]
    fn test_container_accepts_mixed_kinds() {
        let mut category = Category::new(0, "Mixed");
        category.add_element(1, ElementKind::Item);
        category.add_element(2, ElementKind::Quality);
        assert_eq!(category.elements().len(), 2);
        assert_eq!(category.elements()[&2], ElementKind::Quality);
    }

    #[test]
    fn test_display_shows_id_and_name() {
        let category = Category::new(3, "Outdoors");
        assert_eq!(category.to_string(), "3: Outdoors");
    }
}
