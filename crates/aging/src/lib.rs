//! Inventory aging domain module.
//!
//! This crate contains the business rules for shelf aging, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Each call to
//! the engine advances a catalog by exactly one time step; the caller decides
//! how many steps to run.

pub mod category;
pub mod engine;
pub mod item;
pub mod rules;

pub use category::Category;
pub use engine::{Inventory, advance};
pub use item::Item;
pub use rules::{age_item, normalize};
