//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — View models the storefront renders
//! - `wire.rs` — Raw serde structs matching backend requests and responses
//! - `convert.rs` — `From` conversions, wire → view model
//! - `state.rs` — App-owned state containers with update methods
//! - `client.rs` — Sub-client with one method per backend endpoint

pub mod groupbuy;
pub mod order;
pub mod point;
pub mod product;
pub mod refund;
