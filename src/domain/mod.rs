//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, chart-ready)
//! - `wire.rs` — Raw serde structs matching API responses, plus query types
//! - `convert.rs` / `transform.rs` — Wire → domain conversions
//! - `state.rs` — State containers with transition methods
//! - `client.rs` — Sub-client with fetch methods

pub mod dashboard;
pub mod market;
pub mod price_history;
