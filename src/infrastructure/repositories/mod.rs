//! Repository implementations

mod batch_file;

pub use batch_file::{BatchFileRepository, BatchFormat};
