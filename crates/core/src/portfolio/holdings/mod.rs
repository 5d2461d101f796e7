//! User-entered investment positions.

mod holdings_model;

pub use holdings_model::*;
