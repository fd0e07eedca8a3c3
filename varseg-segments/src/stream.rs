//! Driving a [SegmentHelper] from a sorted record stream.

use anyhow::Result;

use varseg_core::PositionRecord;

use crate::helper::SegmentHelper;
use crate::stats::SegmentStats;

///
/// Does `record` have to start a new segment?
///
/// That is the case when no segment is open, when the record is on another reference
/// sequence than the last record, or when it lies more than `max_gap` bases after it.
///
pub fn starts_new_segment<T>(helper: &SegmentHelper<'_, T>, record: &PositionRecord, max_gap: u32) -> bool {
    match (helper.current_reference_index(), helper.current_location()) {
        (Some(reference_index), Some(last_position)) => {
            reference_index != record.reference_index
                || record.position.saturating_sub(last_position) > max_gap
        }
        _ => true,
    }
}

///
/// Feed every record of a sorted stream into `helper`, then close it.
///
/// # Arguments
/// - records: the record stream; the first error stops processing
/// - helper: the helper to drive
/// - max_gap: largest distance between consecutive positions kept in one segment
///
/// # Returns
/// The helper statistics once the stream is exhausted.
///
pub fn segment_records<I, E, T>(records: I, helper: &mut SegmentHelper<'_, T>, max_gap: u32) -> Result<SegmentStats>
where
    I: IntoIterator<Item = std::result::Result<PositionRecord, E>>,
    E: Into<anyhow::Error>,
{
    for record in records {
        let record = record.map_err(Into::into)?;
        if starts_new_segment(helper, &record, max_gap) {
            helper.new_segment(record)?;
        } else {
            helper.add(record)?;
        }
    }
    Ok(helper.close()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::convert::Infallible;

    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use varseg_core::SubSegment;

    use crate::strategy::SplitStrategy;

    fn record(reference_index: u32, position: u32) -> PositionRecord {
        PositionRecord {
            reference_index,
            reference_id: format!("chr{}", reference_index + 1),
            position,
            reference_base: "A".to_string(),
            true_genotype: None,
            samples: vec![],
        }
    }

    fn window(sub: &SubSegment<'_>) -> (String, u32, u32) {
        (
            sub.parent().reference_id().to_string(),
            sub.first_position(),
            sub.last_position(),
        )
    }

    #[rstest]
    #[case(1, vec![("chr1", 1, 3), ("chr1", 5, 6), ("chr1", 9, 9), ("chr2", 1, 2)])]
    #[case(2, vec![("chr1", 1, 6), ("chr1", 9, 9), ("chr2", 1, 2)])]
    #[case(100, vec![("chr1", 1, 9), ("chr2", 1, 2)])]
    fn test_segments_split_on_gap_and_contig(#[case] max_gap: u32, #[case] expected: Vec<(&str, u32, u32)>) {
        let records = [
            record(0, 1),
            record(0, 2),
            record(0, 3),
            record(0, 5),
            record(0, 6),
            record(0, 9),
            record(1, 1),
            record(1, 2),
        ];
        let emitted = RefCell::new(Vec::new());
        let mut helper = SegmentHelper::new(SplitStrategy::default(), window, |w| {
            emitted.borrow_mut().push(w);
            Ok(())
        });

        let stats = segment_records(records.into_iter().map(Ok::<_, Infallible>), &mut helper, max_gap).unwrap();
        drop(helper);

        let emitted: Vec<(String, u32, u32)> = emitted.into_inner();
        let expected: Vec<(String, u32, u32)> = expected
            .into_iter()
            .map(|(c, s, e)| (c.to_string(), s, e))
            .collect();
        assert_eq!(emitted, expected);
        assert_eq!(stats.records_added, 8);
    }

    #[rstest]
    fn test_unsorted_stream_fails() {
        let records = [record(0, 5), record(0, 4)];
        let mut helper = SegmentHelper::new(SplitStrategy::default(), window, |_| Ok(()));
        let result = segment_records(records.into_iter().map(Ok::<_, Infallible>), &mut helper, 1);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_source_error_stops_processing() {
        let records = vec![Ok(record(0, 1)), Err(anyhow!("truncated input")), Ok(record(0, 2))];
        let mut helper = SegmentHelper::new(SplitStrategy::default(), window, |_| Ok(()));
        let result = segment_records(records, &mut helper, 1);
        assert_eq!(result.unwrap_err().to_string(), "truncated input");
        assert_eq!(helper.stats().records_added, 1);
    }

    #[rstest]
    fn test_starts_new_segment() {
        let mut helper = SegmentHelper::new(SplitStrategy::default(), window, |_| Ok(()));
        assert!(starts_new_segment(&helper, &record(0, 1), 1));

        helper.new_segment(record(0, 10)).unwrap();
        assert!(!starts_new_segment(&helper, &record(0, 10), 1));
        assert!(!starts_new_segment(&helper, &record(0, 11), 1));
        assert!(starts_new_segment(&helper, &record(0, 12), 1));
        assert!(starts_new_segment(&helper, &record(1, 11), 1));
    }
}
