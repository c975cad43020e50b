//! HTTP client layer — `GroupBuyHttp`.

pub mod client;

pub use client::{Credentials, GroupBuyHttp};
