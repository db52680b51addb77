//! Property tests for Pegada.
//!
//! Properties use randomized input generation to protect the arithmetic and
//! catalog invariants.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/emission.rs"]
mod emission;

#[path = "properties/formatting.rs"]
mod formatting;

#[path = "properties/catalog.rs"]
mod catalog;
