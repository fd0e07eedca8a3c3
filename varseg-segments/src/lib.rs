//! # Segmentation of per-position genotype evidence.
//!
//! Records arrive one position at a time and are accumulated into segments by a
//! [SegmentHelper]. When a segment closes it is passed through an optional transform, cut into
//! sub-segments by a [SplitStrategy], and each sub-segment is filled in with features and handed
//! to a consumer.
//!
//! # Example
//!
//! ```
//! use varseg_segments::{SegmentHelper, SingleCandidateIndelSplitStrategy, SplitStrategy};
//!
//! let strategy = SplitStrategy::from(SingleCandidateIndelSplitStrategy::new(1, 0, true));
//! let mut emitted = Vec::new();
//! let mut helper = SegmentHelper::new(
//!     strategy,
//!     |sub: &varseg_core::SubSegment| (sub.first_position(), sub.last_position()),
//!     |window| {
//!         emitted.push(window);
//!         Ok(())
//!     },
//! );
//! let stats = helper.close().unwrap();
//! assert_eq!(stats.segments_closed, 0);
//! ```
//!
pub mod config;
pub mod consts;
pub mod features;
pub mod helper;
pub mod segment_util;
pub mod stats;
pub mod strategy;
pub mod stream;

// re-exports
pub use config::*;
pub use features::*;
pub use helper::*;
pub use segment_util::*;
pub use stats::*;
pub use strategy::*;
pub use stream::*;
