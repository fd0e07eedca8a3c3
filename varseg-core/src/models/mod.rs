pub mod position_record;
pub mod segment;
pub mod segment_information;
pub mod sub_segment;

// re-export for cleaner imports
pub use self::position_record::{CountEntry, NumberWithFrequency, PositionRecord, SampleInfo};
pub use self::segment::Segment;
pub use self::segment_information::{BaseFeatures, SampleSegment, SegmentInformation};
pub use self::sub_segment::SubSegment;
