//! Recgraph core domain types.
//!
//! Defines the entity records that make up a recommendation corpus:
//! [`User`], [`Item`], [`Quality`], [`Category`], and [`Rating`], plus the
//! shared [`Element`] abstraction and the [`Importance`] / [`Star`]
//! enumerations.
//!
//! Entities are plain mutable records. Cross-references are id-based on both
//! sides: an entity stores the ids of its counterparts, and the owning
//! dataset maps ids back to records. This keeps the graph free of ownership
//! cycles while preserving bidirectional navigation.
//!
//! # Example
//!
//! ```
//! use recgraph_core::{Category, Element, ElementKind};
//!
//! let mut electronics = Category::new(3, "Electronics");
//! electronics.add_element(7, ElementKind::Item);
//! assert!(electronics.contains(7));
//! assert_eq!(electronics.name(), "Electronics");
//! ```

pub mod types;

pub use types::{
    Category, CategoryId, Element, ElementId, ElementKind, Importance, Item, ItemId, Quality,
    QualityId, Rating, RatingId, Star, User, UserId,
};
