#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Features and labels derived for one position of one sample.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaseFeatures {
    pub position: u32,
    pub features: Vec<f32>,
    pub labels: Vec<f32>,
    pub true_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleSegment {
    pub bases: Vec<BaseFeatures>,
}

///
/// A finalized sub-segment, ready to hand to a model or to write to disk.
///
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentInformation {
    pub reference_index: u32,
    pub reference_id: String,
    pub start_position: u32,
    pub end_position: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub indel_position: Option<u32>,
    pub samples: Vec<SampleSegment>,
}

impl SegmentInformation {
    /// Number of positions covered (per sample).
    pub fn length(&self) -> usize {
        self.samples.first().map_or(0, |s| s.bases.len())
    }
}
