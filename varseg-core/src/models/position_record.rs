use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder used in allele sequences for a deleted (or not yet inserted) base.
pub const GAP: char = '-';

/// A quality score and how many reads carried it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberWithFrequency {
    pub number: i32,
    pub frequency: u32,
}

///
/// Read support for one allele at one position of one sample.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountEntry {
    /// Reference allele this count was observed against.
    pub from_sequence: String,
    /// Allele observed in the reads.
    pub to_sequence: String,
    pub forward_count: u32,
    pub reverse_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quality_scores: Vec<NumberWithFrequency>,
}

impl CountEntry {
    pub fn new(from_sequence: &str, to_sequence: &str, forward_count: u32, reverse_count: u32) -> Self {
        CountEntry {
            from_sequence: from_sequence.to_string(),
            to_sequence: to_sequence.to_string(),
            forward_count,
            reverse_count,
            quality_scores: Vec::new(),
        }
    }

    /// Reads on both strands.
    pub fn total_count(&self) -> u64 {
        u64::from(self.forward_count) + u64::from(self.reverse_count)
    }

    ///
    /// True when the allele inserts or deletes bases relative to the reference: either side
    /// carries a gap, or the two sides differ in length.
    ///
    pub fn is_indel(&self) -> bool {
        self.from_sequence.contains(GAP)
            || self.to_sequence.contains(GAP)
            || self.from_sequence.len() != self.to_sequence.len()
    }

    /// Mean of the quality score distribution, or 0 when no scores were recorded.
    pub fn mean_quality(&self) -> f32 {
        let (sum, n) = self
            .quality_scores
            .iter()
            .fold((0f64, 0u64), |(sum, n), q| {
                (sum + q.number as f64 * q.frequency as f64, n + q.frequency as u64)
            });
        if n == 0 { 0.0 } else { (sum / n as f64) as f32 }
    }
}

/// Evidence for one sample at one position.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleInfo {
    #[cfg_attr(feature = "serde", serde(default))]
    pub counts: Vec<CountEntry>,
}

///
/// One genomic position from the record stream, with the evidence of every sample.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionRecord {
    pub reference_index: u32,
    pub reference_id: String,
    pub position: u32,
    pub reference_base: String,
    /// Ground-truth genotype, alleles separated by `/` or `|`. Only present in training data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub true_genotype: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub samples: Vec<SampleInfo>,
}

impl PositionRecord {
    ///
    /// Split the true genotype into its alleles.
    ///
    /// Returns an empty vector when the record carries no ground truth.
    ///
    pub fn true_alleles(&self) -> Vec<&str> {
        self.true_genotype
            .as_deref()
            .map(|g| g.split(['/', '|']).filter(|a| !a.is_empty()).collect())
            .unwrap_or_default()
    }
}

impl Display for PositionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}\t{}",
            self.reference_id, self.position, self.reference_base
        )
    }
}
