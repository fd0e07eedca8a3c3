//! Fill-in of features and labels for an emitted sub-segment.

use varseg_core::{BaseFeatures, PositionRecord, SampleSegment, SegmentInformation, SubSegment};

use crate::segment_util::has_true_indel;

/// Number of features written for each count entry.
pub const FEATURES_PER_COUNT: usize = 4;

///
/// Derives per-position features and labels from the raw counts of a sub-segment.
///
/// For every sample and position, each count entry contributes
/// `[forward count, reverse count, indel flag, mean quality]`. The label is `1.0` when the
/// true genotype of the position is an indel, `0.0` otherwise.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountFeatureFiller {
    pub map_features: bool,
    pub map_labels: bool,
}

impl Default for CountFeatureFiller {
    fn default() -> Self {
        CountFeatureFiller {
            map_features: true,
            map_labels: true,
        }
    }
}

impl CountFeatureFiller {
    pub fn new(map_features: bool, map_labels: bool) -> Self {
        CountFeatureFiller {
            map_features,
            map_labels,
        }
    }

    pub fn fill(&self, sub: &SubSegment<'_>) -> SegmentInformation {
        let records = sub.records();
        let num_samples = records.iter().map(|r| r.samples.len()).max().unwrap_or(0);

        let samples = (0..num_samples)
            .map(|sample_index| SampleSegment {
                bases: records
                    .iter()
                    .map(|record| self.base_features(record, sample_index))
                    .collect(),
            })
            .collect();

        let parent = sub.parent();
        SegmentInformation {
            reference_index: parent.reference_index(),
            reference_id: parent.reference_id().to_string(),
            start_position: sub.first_position(),
            end_position: sub.last_position(),
            indel_position: sub.indel_position(),
            samples,
        }
    }

    fn base_features(&self, record: &PositionRecord, sample_index: usize) -> BaseFeatures {
        let features = match (self.map_features, record.samples.get(sample_index)) {
            (true, Some(sample)) => sample
                .counts
                .iter()
                .flat_map(|count| {
                    [
                        count.forward_count as f32,
                        count.reverse_count as f32,
                        if count.is_indel() { 1.0 } else { 0.0 },
                        count.mean_quality(),
                    ]
                })
                .collect(),
            _ => Vec::new(),
        };

        let labels = if self.map_labels {
            vec![if has_true_indel(record) { 1.0 } else { 0.0 }]
        } else {
            Vec::new()
        };

        BaseFeatures {
            position: record.position,
            features,
            labels,
            true_labels: record.true_alleles().into_iter().map(str::to_string).collect(),
        }
    }
}
