use std::fmt::{self, Display};
use std::ops::Range;

use crate::models::{PositionRecord, Segment};

///
/// A contiguous slice of a closed [Segment], produced by a split strategy.
///
/// Sub-segments borrow their records from the parent segment; they never copy them.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SubSegment<'a> {
    parent: &'a Segment,
    range: Range<usize>,
    indel_position: Option<u32>,
}

impl<'a> SubSegment<'a> {
    ///
    /// Create a sub-segment over `range` (indices into the parent's records).
    ///
    /// # Arguments
    /// - parent: the segment the records are borrowed from
    /// - range: non-empty index range into `parent.all_records()`
    /// - indel_position: position of the indel the window is centred on, if any
    ///
    pub fn new(parent: &'a Segment, range: Range<usize>, indel_position: Option<u32>) -> Self {
        debug_assert!(range.start < range.end && range.end <= parent.len());
        SubSegment {
            parent,
            range,
            indel_position,
        }
    }

    /// A sub-segment covering the whole parent.
    pub fn whole(parent: &'a Segment) -> Self {
        SubSegment::new(parent, 0..parent.len(), None)
    }

    pub fn parent(&self) -> &'a Segment {
        self.parent
    }

    /// Index range into the parent's records.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn records(&self) -> &'a [PositionRecord] {
        &self.parent.all_records()[self.range.clone()]
    }

    pub fn first_position(&self) -> u32 {
        self.records()[0].position
    }

    pub fn last_position(&self) -> u32 {
        let records = self.records();
        records[records.len() - 1].position
    }

    pub fn indel_position(&self) -> Option<u32> {
        self.indel_position
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

impl Display for SubSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}",
            self.parent.reference_id(),
            self.first_position(),
            self.last_position()
        )?;
        if let Some(indel) = self.indel_position {
            write!(f, " (indel at {})", indel)?;
        }
        Ok(())
    }
}
