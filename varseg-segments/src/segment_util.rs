//! Predicates that classify a single position as carrying an indel, and the scan that groups
//! consecutive candidate-indel positions of a segment into runs.

use std::fmt::Write;

use varseg_core::models::position_record::GAP;
use varseg_core::{PositionRecord, Segment};

use crate::consts::DEFAULT_MIN_INDEL_SUPPORT;

///
/// Does the given sample show read support for an indel allele at this position?
///
/// # Arguments
/// - record: the position to inspect
/// - sample_index: which sample's counts to look at; an index past the last sample never matches
///
pub fn has_candidate_indel(record: &PositionRecord, sample_index: usize) -> bool {
    has_candidate_indel_with_support(record, sample_index, DEFAULT_MIN_INDEL_SUPPORT)
}

///
/// Like [has_candidate_indel], but requires at least `min_support` reads (both strands
/// combined) on one indel allele. A `min_support` of 0 is treated as 1.
///
pub fn has_candidate_indel_with_support(
    record: &PositionRecord,
    sample_index: usize,
    min_support: u32,
) -> bool {
    let min_support = u64::from(min_support.max(1));
    record.samples.get(sample_index).is_some_and(|sample| {
        sample
            .counts
            .iter()
            .any(|count| count.is_indel() && count.total_count() >= min_support)
    })
}

///
/// Does the ground-truth genotype of this record contain an indel allele?
///
/// Reads are not consulted. Records without a true genotype never match.
///
pub fn has_true_indel(record: &PositionRecord) -> bool {
    let reference_length = record.reference_base.len();
    record
        .true_alleles()
        .iter()
        .any(|allele| allele.contains(GAP) || allele.len() != reference_length)
}

///
/// A maximal block of consecutive records that all carry a candidate indel.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndelRun {
    /// Index of the first record of the run in the segment.
    pub first_index: usize,
    /// Index of the last record of the run in the segment.
    pub last_index: usize,
    pub min_position: u32,
    pub max_position: u32,
}

impl IndelRun {
    /// The position reported for the run: the last one.
    pub fn representative_position(&self) -> u32 {
        self.max_position
    }

    /// Number of bases between two runs; 0 when they touch or overlap.
    pub fn distance_to(&self, other: &IndelRun) -> u32 {
        if other.min_position > self.max_position {
            other.min_position - self.max_position
        } else if self.min_position > other.max_position {
            self.min_position - other.max_position
        } else {
            0
        }
    }
}

///
/// Scan a segment once and return its candidate-indel runs in genomic order.
///
/// # Arguments
/// - segment: the segment to scan
/// - sample_index: sample whose evidence is used
/// - min_support: minimum read support for an indel allele
///
pub fn candidate_indel_runs(segment: &Segment, sample_index: usize, min_support: u32) -> Vec<IndelRun> {
    let mut runs: Vec<IndelRun> = Vec::new();
    let mut current: Option<IndelRun> = None;

    for (index, record) in segment.all_records().iter().enumerate() {
        if has_candidate_indel_with_support(record, sample_index, min_support) {
            match current.as_mut() {
                Some(run) => {
                    run.last_index = index;
                    run.max_position = run.max_position.max(record.position);
                }
                None => {
                    current = Some(IndelRun {
                        first_index: index,
                        last_index: index,
                        min_position: record.position,
                        max_position: record.position,
                    })
                }
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }
    runs.extend(current);

    runs
}

///
/// Render the evidence of one sample over a run of records, one line per record:
/// `ref=A\ttrueGenotype=A/-\tcounts= A=32  -=33  (from: A)`.
///
/// Count entries without read support are left out.
///
pub fn format_genotypes(records: &[PositionRecord], sample_index: usize) -> String {
    let mut out = String::new();
    for record in records {
        let _ = write!(
            out,
            "ref={}\ttrueGenotype={}\tcounts= ",
            record.reference_base,
            record.true_genotype.as_deref().unwrap_or(".")
        );
        if let Some(sample) = record.samples.get(sample_index) {
            for count in sample.counts.iter().filter(|c| c.total_count() > 0) {
                let _ = write!(out, "{}={}  ", count.to_sequence, count.total_count());
            }
        }
        let _ = writeln!(out, "(from: {})", record.reference_base);
    }
    out
}
