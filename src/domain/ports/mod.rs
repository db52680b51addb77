//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod activity_catalog;

pub use activity_catalog::ActivityCatalog;
