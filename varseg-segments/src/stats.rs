use std::fmt::{self, Display};

use varseg_core::Segment;

/// Counters collected by a [crate::SegmentHelper] over the life of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentStats {
    pub segments_opened: u64,
    pub segments_closed: u64,
    pub records_added: u64,
    pub subsegments_emitted: u64,
    /// Closed segments for which the split strategy produced nothing.
    pub segments_rejected: u64,
    /// Emitted sub-segments centred on an indel.
    pub indel_subsegments: u64,
    /// Largest number of records held by one segment.
    pub max_segment_records: usize,
}

impl SegmentStats {
    pub(crate) fn record_closed(&mut self, segment: &Segment, emitted: usize, with_indel: usize) {
        self.segments_closed += 1;
        self.subsegments_emitted += emitted as u64;
        self.indel_subsegments += with_indel as u64;
        if emitted == 0 {
            self.segments_rejected += 1;
        }
        self.max_segment_records = self.max_segment_records.max(segment.len());
    }

    /// Mean number of records per closed segment.
    pub fn mean_segment_records(&self) -> f64 {
        if self.segments_closed == 0 {
            0.0
        } else {
            self.records_added as f64 / self.segments_closed as f64
        }
    }
}

impl Display for SegmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segments: {} closed ({} rejected), records: {} (mean {:.1}, max {} per segment), sub-segments: {} emitted ({} around an indel)",
            self.segments_closed,
            self.segments_rejected,
            self.records_added,
            self.mean_segment_records(),
            self.max_segment_records,
            self.subsegments_emitted,
            self.indel_subsegments
        )
    }
}
