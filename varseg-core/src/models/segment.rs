use std::fmt::{self, Display};

use log::debug;

use crate::errors::{SegmentError, SegmentResult};
use crate::models::PositionRecord;

///
/// A run of position records that are processed and emitted together.
///
/// A segment always holds at least one record: it is opened from its first record and
/// only ever grows at the end. Records must arrive sorted by position.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start_position: u32,
    end_position: u32,
    records: Vec<PositionRecord>,
}

impl Segment {
    ///
    /// Open a segment from its first record.
    ///
    pub fn new(first: PositionRecord) -> Self {
        debug!(
            "Open a new segment at {}:{}",
            first.reference_id, first.position
        );
        Segment {
            start_position: first.position,
            end_position: first.position,
            records: vec![first],
        }
    }

    ///
    /// Append a record to the end of the segment.
    ///
    /// # Arguments
    /// - record: the next record; its position must not be before the current end position.
    ///
    pub fn add(&mut self, record: PositionRecord) -> SegmentResult<()> {
        if record.position < self.end_position {
            return Err(SegmentError::NonMonotonicPosition {
                position: record.position,
                end_position: self.end_position,
            });
        }
        self.end_position = record.position;
        self.records.push(record);
        Ok(())
    }

    pub fn start_position(&self) -> u32 {
        self.start_position
    }

    pub fn end_position(&self) -> u32 {
        self.end_position
    }

    /// All records, in the order they were added.
    pub fn all_records(&self) -> &[PositionRecord] {
        &self.records
    }

    pub fn first_record(&self) -> &PositionRecord {
        &self.records[0]
    }

    pub fn last_record(&self) -> &PositionRecord {
        &self.records[self.records.len() - 1]
    }

    pub fn reference_id(&self) -> &str {
        &self.first_record().reference_id
    }

    pub fn reference_index(&self) -> u32 {
        self.first_record().reference_index
    }

    /// Number of records in the segment.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a segment is never empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Span of the segment on the reference, in bases.
    pub fn length(&self) -> u64 {
        u64::from(self.end_position - self.start_position) + 1
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment{{reference={}, start_position={}, end_position={}, length={}}}",
            self.reference_id(),
            self.start_position,
            self.end_position,
            self.length()
        )
    }
}
