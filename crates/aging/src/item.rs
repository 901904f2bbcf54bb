//! The catalog entry: an item's name plus its two aging counters.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;

/// A single catalog entry.
///
/// `name` is the item's identity and is never mutated by the engine; it also
/// selects which aging rule applies. `sell_in` counts the time units left
/// before the sell-by date and may go negative indefinitely. `quality` stays
/// in `0..=50` after every update, except for legendary items, whose quality
/// is pinned at its initial value (the observed fixture uses 80).
///
/// Serializes as `{name, sellIn, quality}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    /// Construct an item. Every triple is accepted; the engine's rules are
    /// total over whatever the caller supplies.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Construct an item, rejecting a starting quality outside `0..=50`.
    ///
    /// Legendary items are exempt from the range check. This is the boundary
    /// validation variant of [`Item::new`]; nothing is constructed on failure.
    pub fn validated(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        if item.category() != Category::Legendary && !(0..=50).contains(&item.quality) {
            return Err(DomainError::validation(format!(
                "quality {} is outside 0..=50 for item '{}'",
                item.quality, item.name
            )));
        }
        Ok(item)
    }

    /// The aging rule family this item belongs to.
    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }
}
