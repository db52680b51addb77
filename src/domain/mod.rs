//! Domain Layer
//!
//! The calculation core - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Activities, the catalog, calculation input and result
//! - `value_objects/` - Category, Locale, frequency presets
//! - `services/` - Emission arithmetic, equivalence table, formatting, messages
//! - `policies/` - Input validation
//! - `ports/` - The `ActivityCatalog` interface
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Nothing here reads files, environment or terminals
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Reference data comes in through `ActivityCatalog`

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
