//! # Core data model for varseg.
//!
//! This crate holds the types every other varseg crate shares: the per-position genotype
//! evidence that arrives from the record stream ([PositionRecord]), the [Segment] that
//! accumulates contiguous positions, and the [SubSegment] views a split strategy carves out of it.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use errors::*;
pub use models::*;
