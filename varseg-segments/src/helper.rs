//! The accumulator that turns a stream of position records into emitted sub-segments.

use log::{debug, info};

use varseg_core::errors::{SegmentError, SegmentResult};
use varseg_core::{PositionRecord, Segment, SubSegment};

use crate::stats::SegmentStats;
use crate::strategy::SplitStrategy;

type TransformFn<'a> = Box<dyn FnMut(Segment) -> Segment + 'a>;
type FillInFn<'a, T> = Box<dyn FnMut(&SubSegment<'_>) -> T + 'a>;
type ConsumerFn<'a, T> = Box<dyn FnMut(T) -> anyhow::Result<()> + 'a>;

///
/// Owns the open segment of a record stream.
///
/// Records are appended with [SegmentHelper::add]; [SegmentHelper::new_segment] closes the
/// open segment (if any) and starts the next one. Closing a segment runs, in order:
///
/// 1. the optional transform (`Segment -> Segment`)
/// 2. the split strategy, which yields zero or more sub-segments
/// 3. for every sub-segment, the fill-in function and then the consumer
///
/// Errors returned by the consumer are passed back to the caller unchanged. The segment being
/// closed is dropped either way.
///
pub struct SegmentHelper<'a, T> {
    current: Option<Segment>,
    transform: Option<TransformFn<'a>>,
    strategy: SplitStrategy,
    fill_in: FillInFn<'a, T>,
    consumer: ConsumerFn<'a, T>,
    stats: SegmentStats,
}

impl<'a, T> SegmentHelper<'a, T> {
    ///
    /// Create a helper with no open segment.
    ///
    /// # Arguments
    /// - strategy: how closed segments are split
    /// - fill_in: derives the emitted value from a sub-segment
    /// - consumer: receives each emitted value, typically to write it out
    ///
    pub fn new<F, C>(strategy: SplitStrategy, fill_in: F, consumer: C) -> Self
    where
        F: FnMut(&SubSegment<'_>) -> T + 'a,
        C: FnMut(T) -> anyhow::Result<()> + 'a,
    {
        SegmentHelper {
            current: None,
            transform: None,
            strategy,
            fill_in: Box::new(fill_in),
            consumer: Box::new(consumer),
            stats: SegmentStats::default(),
        }
    }

    /// Apply `transform` to every segment before it is split.
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: FnMut(Segment) -> Segment + 'a,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn strategy(&self) -> &SplitStrategy {
        &self.strategy
    }

    ///
    /// Close the open segment, if there is one, and open a new segment from `record`.
    ///
    pub fn new_segment(&mut self, record: PositionRecord) -> SegmentResult<()> {
        if self.current.is_some() {
            self.close_segment()?;
        }
        self.current = Some(Segment::new(record));
        self.stats.segments_opened += 1;
        self.stats.records_added += 1;
        Ok(())
    }

    ///
    /// Append `record` to the open segment.
    ///
    /// Fails when no segment is open, or when the record lies before the end of the segment.
    ///
    pub fn add(&mut self, record: PositionRecord) -> SegmentResult<()> {
        let segment = self.current.as_mut().ok_or(SegmentError::NoOpenSegment {
            operation: "add a record",
        })?;
        segment.add(record)?;
        self.stats.records_added += 1;
        Ok(())
    }

    ///
    /// Transform, split, fill in and emit the open segment. Afterwards no segment is open.
    ///
    pub fn close_segment(&mut self) -> SegmentResult<()> {
        let segment = self.current.take().ok_or(SegmentError::NoOpenSegment {
            operation: "close the segment",
        })?;

        let segment = match self.transform.as_mut() {
            Some(transform) => transform(segment),
            None => segment,
        };

        let subsegments = self.strategy.apply(&segment);
        debug!("Close {}: {} sub-segment(s)", segment, subsegments.len());

        for sub in &subsegments {
            let filled = (self.fill_in)(sub);
            (self.consumer)(filled).map_err(SegmentError::Collaborator)?;
        }

        let with_indel = subsegments
            .iter()
            .filter(|s| s.indel_position().is_some())
            .count();
        self.stats
            .record_closed(&segment, subsegments.len(), with_indel);

        Ok(())
    }

    ///
    /// Signal the end of the stream: close the open segment, if any, and report statistics.
    ///
    pub fn close(&mut self) -> SegmentResult<SegmentStats> {
        if self.current.is_some() {
            self.close_segment()?;
        }
        info!("Segmentation finished ({}): {}", self.strategy, self.stats);
        Ok(self.stats)
    }

    pub fn current_segment(&self) -> Option<&Segment> {
        self.current.as_ref()
    }

    /// Position of the last record added to the open segment.
    pub fn current_location(&self) -> Option<u32> {
        self.current.as_ref().map(Segment::end_position)
    }

    pub fn current_reference_index(&self) -> Option<u32> {
        self.current
            .as_ref()
            .map(|s| s.last_record().reference_index)
    }

    pub fn current_reference_id(&self) -> Option<&str> {
        self.current
            .as_ref()
            .map(|s| s.last_record().reference_id.as_str())
    }

    pub fn stats(&self) -> &SegmentStats {
        &self.stats
    }
}
