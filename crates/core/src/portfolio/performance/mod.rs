//! Per-asset performance view models.

mod performance_model;
mod performance_service;

pub use performance_model::*;
pub use performance_service::*;
