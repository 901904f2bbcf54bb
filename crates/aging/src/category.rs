//! Category classification: item name → aging rule family.

use serde::{Deserialize, Serialize};

/// Reserved name: quality rises with age.
pub const AGED_BRIE: &str = "Aged Brie";
/// Reserved name: quality rises toward the concert date, then collapses.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Reserved name: legendary item, frozen entirely.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Reserved name: degrades twice as fast as ordinary stock.
pub const CONJURED: &str = "Conjured";

/// Aging rule family of an item, derived solely from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ordinary,
    AgedBrie,
    BackstagePasses,
    Legendary,
    Conjured,
}

impl Category {
    /// Classify an item name.
    ///
    /// Exact, case-sensitive match against the four reserved names — no
    /// trimming, no normalization. Everything else, including unknown future
    /// specials, falls through to `Ordinary`. Total, never fails.
    pub fn of(name: &str) -> Self {
        match name {
            AGED_BRIE => Self::AgedBrie,
            BACKSTAGE_PASSES => Self::BackstagePasses,
            SULFURAS => Self::Legendary,
            CONJURED => Self::Conjured,
            _ => Self::Ordinary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_map_to_their_categories() {
        assert_eq!(Category::of(AGED_BRIE), Category::AgedBrie);
        assert_eq!(Category::of(BACKSTAGE_PASSES), Category::BackstagePasses);
        assert_eq!(Category::of(SULFURAS), Category::Legendary);
        assert_eq!(Category::of(CONJURED), Category::Conjured);
    }

    #[test]
    fn unmatched_names_are_ordinary() {
        assert_eq!(Category::of("random-item-name"), Category::Ordinary);
        assert_eq!(Category::of(""), Category::Ordinary);
        assert_eq!(Category::of("Elixir of the Mongoose"), Category::Ordinary);
    }

    #[test]
    fn matching_is_case_sensitive_and_exact() {
        assert_eq!(Category::of("aged brie"), Category::Ordinary);
        assert_eq!(Category::of("AGED BRIE"), Category::Ordinary);
        assert_eq!(Category::of(" Aged Brie"), Category::Ordinary);
        assert_eq!(Category::of("Aged Brie "), Category::Ordinary);
        assert_eq!(Category::of("Conjured Mana Cake"), Category::Ordinary);
        assert_eq!(Category::of("Sulfuras, Hand Of Ragnaros"), Category::Ordinary);
    }
}
