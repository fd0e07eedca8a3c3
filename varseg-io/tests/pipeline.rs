//! End-to-end: JSON-lines records -> segments -> split -> fill-in -> JSON-lines output

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::*;

use varseg_core::SubSegment;
use varseg_io::{PositionRecordReader, SegmentWriter, read_segment_information};
use varseg_segments::{
    CountFeatureFiller, NoSplitStrategy, SegmentHelper, SingleCandidateIndelSplitStrategy, SplitStrategy,
    segment_records,
};

#[fixture]
fn path_to_records() -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/records/two_contigs.jsonl")
}

fn run(input: &Path, output: &Path, strategy: SplitStrategy) -> varseg_segments::SegmentStats {
    let filler = CountFeatureFiller::default();
    let mut writer = SegmentWriter::create(output).unwrap();

    let stats = {
        let mut helper = SegmentHelper::new(
            strategy,
            |sub: &SubSegment<'_>| filler.fill(sub),
            |info| {
                writer.append(&info)?;
                Ok(())
            },
        );
        let records = PositionRecordReader::from_path(input).unwrap();
        segment_records(records, &mut helper, 1).unwrap()
    };

    writer.finish().unwrap();
    stats
}

#[rstest]
fn test_single_candidate_indel_end_to_end(path_to_records: PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();
    let output = tempdir.path().join("segments.jsonl.gz");

    let strategy = SplitStrategy::from(SingleCandidateIndelSplitStrategy::new(1, 0, true));
    let stats = run(&path_to_records, &output, strategy);

    assert_eq!(stats.segments_closed, 3);
    assert_eq!(stats.segments_rejected, 1);
    assert_eq!(stats.subsegments_emitted, 2);
    assert_eq!(stats.records_added, 12);

    let segments = read_segment_information(&output).unwrap();
    let summary: Vec<(&str, u32, u32, Option<u32>)> = segments
        .iter()
        .map(|s| {
            (
                s.reference_id.as_str(),
                s.start_position,
                s.end_position,
                s.indel_position,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![("chr1", 2, 4, Some(3)), ("chr2", 10, 12, Some(11))]
    );

    // one sample, three positions, the middle one labelled as an indel
    let bases = &segments[0].samples[0].bases;
    assert_eq!(bases.len(), 3);
    assert_eq!(
        bases.iter().map(|b| b.labels[0]).collect::<Vec<_>>(),
        vec![0.0, 1.0, 0.0]
    );
}

#[rstest]
fn test_no_split_end_to_end(path_to_records: PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();
    let output = tempdir.path().join("segments.jsonl");

    let stats = run(&path_to_records, &output, SplitStrategy::from(NoSplitStrategy));
    assert_eq!(stats.subsegments_emitted, 3);
    assert_eq!(stats.segments_rejected, 0);

    let segments = read_segment_information(&output).unwrap();
    let limits: Vec<(u32, u32)> = segments
        .iter()
        .map(|s| (s.start_position, s.end_position))
        .collect();
    assert_eq!(limits, vec![(1, 5), (20, 23), (10, 12)]);
    assert!(segments.iter().all(|s| s.indel_position.is_none()));
}
