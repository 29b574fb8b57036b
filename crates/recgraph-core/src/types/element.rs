//! Shared element abstraction: an identified, named, optionally described
//! record.

use serde::{Deserialize, Serialize};

/// Identifier for corpus elements.
///
/// Ids are assigned sequentially from 0 within each entity kind; the
/// sequences of different kinds are independent, so a user and an item may
/// both carry id 0.
pub type ElementId = u64;

/// Tag distinguishing the kinds of element a [`Category`](super::Category)
/// container can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    User,
    Item,
    Quality,
    Category,
}

/// Common accessor surface shared by corpus entities.
pub trait Element {
    /// Identifier within this entity kind's sequence.
    fn id(&self) -> ElementId;

    /// Display name.
    fn name(&self) -> &str;

    /// Optional free-text description.
    fn description(&self) -> Option<&str>;
}
