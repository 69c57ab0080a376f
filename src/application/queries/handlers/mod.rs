//! Query Handlers 实现

mod asset_handlers;

pub use asset_handlers::*;
