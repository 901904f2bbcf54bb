//! Per-category aging rules and the dispatcher that selects between them.
//!
//! Every rule is a pure function over `(sell_in, quality)`. The quality delta
//! is chosen from the *old* sell_in (decay doubles on the day the item
//! expires, not the day after — every threshold is inclusive), then sell_in
//! is decremented. All non-legendary outputs pass through [`normalize`].

use crate::category::Category;
use crate::item::Item;

/// Clamp a quality value into the domain range `0..=50`.
pub fn normalize(quality: i32) -> i32 {
    quality.clamp(0, 50)
}

fn age_ordinary(sell_in: i32, quality: i32) -> (i32, i32) {
    let delta = if sell_in <= 0 { -2 } else { -1 };
    (sell_in - 1, normalize(quality + delta))
}

fn age_brie(sell_in: i32, quality: i32) -> (i32, i32) {
    let delta = if sell_in <= 0 { 2 } else { 1 };
    (sell_in - 1, normalize(quality + delta))
}

fn age_backstage_passes(sell_in: i32, quality: i32) -> (i32, i32) {
    // Once the concert date has arrived, the pass is worthless: quality goes
    // to exactly 0, as a rule of its own rather than a clamped sentinel.
    if sell_in <= 0 {
        return (sell_in - 1, 0);
    }
    let delta = if sell_in <= 5 {
        3
    } else if sell_in <= 10 {
        2
    } else {
        1
    };
    (sell_in - 1, normalize(quality + delta))
}

fn age_conjured(sell_in: i32, quality: i32) -> (i32, i32) {
    let delta = if sell_in <= 0 { -4 } else { -2 };
    (sell_in - 1, normalize(quality + delta))
}

/// Advance a single item by one time step.
///
/// Classifies the name once, then dispatches on the [`Category`]. The name
/// carries through unchanged; legendary items carry through whole, both
/// counters frozen and normalization bypassed.
pub fn age_item(item: &Item) -> Item {
    let (sell_in, quality) = match item.category() {
        Category::Ordinary => age_ordinary(item.sell_in, item.quality),
        Category::AgedBrie => age_brie(item.sell_in, item.quality),
        Category::BackstagePasses => age_backstage_passes(item.sell_in, item.quality),
        Category::Legendary => (item.sell_in, item.quality),
        Category::Conjured => age_conjured(item.sell_in, item.quality),
    };
    Item {
        name: item.name.clone(),
        sell_in,
        quality,
    }
}
