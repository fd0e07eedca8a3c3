//! Policies that turn a closed segment into the sub-segments that get emitted.

use std::fmt::{self, Display};

use varseg_core::{Segment, SubSegment};

use crate::consts::*;
use crate::segment_util::{IndelRun, candidate_indel_runs};

///
/// Keep every segment whole.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoSplitStrategy;

impl NoSplitStrategy {
    pub fn apply<'a>(&self, segment: &'a Segment) -> Vec<SubSegment<'a>> {
        vec![SubSegment::whole(segment)]
    }
}

///
/// Cut a window of `flank_size` positions on each side of a candidate-indel run.
///
/// With `require_exactly_one_locus` set, a segment that holds zero or several runs yields
/// nothing. Without it, every run whose nearest other run is at least
/// `min_other_indel_distance` bases away yields its own window.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleCandidateIndelSplitStrategy {
    pub flank_size: u32,
    pub min_other_indel_distance: u32,
    pub require_exactly_one_locus: bool,
    pub sample_index: usize,
    pub min_indel_support: u32,
}

impl SingleCandidateIndelSplitStrategy {
    pub fn new(flank_size: u32, min_other_indel_distance: u32, require_exactly_one_locus: bool) -> Self {
        SingleCandidateIndelSplitStrategy {
            flank_size,
            min_other_indel_distance,
            require_exactly_one_locus,
            sample_index: DEFAULT_SAMPLE_INDEX,
            min_indel_support: DEFAULT_MIN_INDEL_SUPPORT,
        }
    }

    pub fn with_sample_index(mut self, sample_index: usize) -> Self {
        self.sample_index = sample_index;
        self
    }

    pub fn with_min_indel_support(mut self, min_indel_support: u32) -> Self {
        self.min_indel_support = min_indel_support;
        self
    }

    pub fn apply<'a>(&self, segment: &'a Segment) -> Vec<SubSegment<'a>> {
        let runs = candidate_indel_runs(segment, self.sample_index, self.min_indel_support);

        if self.require_exactly_one_locus {
            if runs.len() != 1 {
                return Vec::new();
            }
            return vec![self.window(segment, &runs[0])];
        }

        runs.iter()
            .enumerate()
            .filter(|(i, run)| {
                runs.iter()
                    .enumerate()
                    .filter(|(j, _)| j != i)
                    .all(|(_, other)| run.distance_to(other) >= self.min_other_indel_distance)
            })
            .map(|(_, run)| self.window(segment, run))
            .collect()
    }

    /// The flanked window around a run, clamped to the segment bounds.
    fn window<'a>(&self, segment: &'a Segment, run: &IndelRun) -> SubSegment<'a> {
        let low = run
            .min_position
            .saturating_sub(self.flank_size)
            .max(segment.start_position());
        let high = run
            .max_position
            .saturating_add(self.flank_size)
            .min(segment.end_position());

        let records = segment.all_records();
        let start = records.partition_point(|r| r.position < low);
        let end = records.partition_point(|r| r.position <= high);

        SubSegment::new(segment, start..end, Some(run.representative_position()))
    }
}

///
/// The split policies a [crate::SegmentHelper] can be configured with.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    NoSplit(NoSplitStrategy),
    SingleCandidateIndel(SingleCandidateIndelSplitStrategy),
}

impl SplitStrategy {
    ///
    /// Cut a closed segment into the sub-segments to emit, in genomic order.
    ///
    /// An empty result means the segment is rejected by the policy; it is not an error.
    ///
    pub fn apply<'a>(&self, segment: &'a Segment) -> Vec<SubSegment<'a>> {
        match self {
            SplitStrategy::NoSplit(strategy) => strategy.apply(segment),
            SplitStrategy::SingleCandidateIndel(strategy) => strategy.apply(segment),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SplitStrategy::NoSplit(_) => NO_SPLIT,
            SplitStrategy::SingleCandidateIndel(_) => SINGLE_CANDIDATE_INDEL,
        }
    }
}

impl Default for SplitStrategy {
    fn default() -> Self {
        SplitStrategy::NoSplit(NoSplitStrategy)
    }
}

impl From<NoSplitStrategy> for SplitStrategy {
    fn from(value: NoSplitStrategy) -> Self {
        SplitStrategy::NoSplit(value)
    }
}

impl From<SingleCandidateIndelSplitStrategy> for SplitStrategy {
    fn from(value: SingleCandidateIndelSplitStrategy) -> Self {
        SplitStrategy::SingleCandidateIndel(value)
    }
}

impl Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitStrategy::NoSplit(_) => write!(f, "{}", NO_SPLIT),
            SplitStrategy::SingleCandidateIndel(s) => write!(
                f,
                "{}(flank={}, min_other_indel_distance={}, require_exactly_one_locus={})",
                SINGLE_CANDIDATE_INDEL, s.flank_size, s.min_other_indel_distance, s.require_exactly_one_locus
            ),
        }
    }
}
