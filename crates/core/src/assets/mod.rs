//! The fixed catalog of supported crypto assets.

mod assets_model;

pub use assets_model::*;
