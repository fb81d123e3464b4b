//! Core types: asset classes, currencies, and holdings.

mod asset_class;
mod currency;
mod holding;

pub use asset_class::AssetClass;
pub use currency::Currency;
pub use holding::{AssetHolding, HoldingBuilder};
