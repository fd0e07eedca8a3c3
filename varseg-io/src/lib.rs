//! # Input/Output utilities for varseg.
//!
//! Position records are read from JSON-lines files (one [varseg_core::PositionRecord] per
//! line) and finalized segments are written back out the same way, one
//! [varseg_core::SegmentInformation] per line. Paths ending in `.gz` are (de)compressed
//! transparently, and `-` stands for stdin/stdout.
//!
pub mod error;
pub mod records;
pub mod writer;

// re-expose core functions
pub use error::*;
pub use records::*;
pub use writer::*;
