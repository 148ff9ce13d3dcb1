//! Card system: definitions, catalog and filters.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for cards
//! - `Card`: Static card data (cost, type, rarity, combat stats)
//! - `Catalog`: Ordered card snapshot with ID lookup
//! - `CardFilter`: Name/type/cost/rarity criteria for browsing
//!
//! The catalog is trusted, externally supplied data. Nothing in this crate
//! mutates a card once it is in a catalog.

pub mod catalog;
pub mod definition;
pub mod filter;
pub mod seed;

pub use catalog::{Catalog, CatalogError};
pub use definition::{Card, CardId, CardType, ParseCardError, Rarity};
pub use filter::CardFilter;
pub use seed::base_catalog;
