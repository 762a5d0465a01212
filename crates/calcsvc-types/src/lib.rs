//! calcsvc Types
//!
//! This crate defines the dynamic `Value` passed to and returned from named
//! calculators. The services in `calcsvc-calculator` work on plain Rust
//! primitives; `Value` only exists at the dispatch boundary.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;
pub use types::Value;
