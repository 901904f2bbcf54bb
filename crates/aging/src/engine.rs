//! Batch update: advance a whole catalog by one time step.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::item::Item;
use crate::rules::age_item;

/// Advance every item in `items` by one time step.
///
/// Returns a new collection of the same length and order; each element is
/// aged independently of the others. Stateless: the same input always yields
/// the same output, and feeding the result back in advances a further step.
pub fn advance(items: &[Item]) -> Vec<Item> {
    trace!(count = items.len(), "advancing catalog by one time step");
    items.iter().map(age_item).collect()
}

/// An owned catalog of items.
///
/// Thin wrapper for callers that want the catalog held in one place across
/// simulation steps. [`Inventory::advance`] replaces the owned collection
/// with the aged one (the previous collection value is dropped); callers
/// that need the prior state should clone it first or use [`advance`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Advance the catalog by one time step in place and return a view of it.
    pub fn advance(&mut self) -> &[Item] {
        self.items = advance(&self.items);
        &self.items
    }
}
