use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use varseg_core::PositionRecord;
use varseg_core::utils::get_dynamic_reader_w_stdin;

use crate::error::{RecordIoError, Result};

///
/// Iterates the position records of a JSON-lines stream, in file order.
///
/// Blank lines and lines starting with `#` are skipped.
///
pub struct PositionRecordReader<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
}

impl PositionRecordReader<BufReader<Box<dyn Read>>> {
    ///
    /// Open a record file.
    ///
    /// # Arguments
    /// - path: path to a `.jsonl` or `.jsonl.gz` file, or `-` for stdin
    ///
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| RecordIoError::Open(format!("path is not valid UTF-8: {:?}", path)))?;
        let reader =
            get_dynamic_reader_w_stdin(path_str).map_err(|e| RecordIoError::Open(format!("{:#}", e)))?;
        Ok(PositionRecordReader::new(reader))
    }
}

impl<R: BufRead> PositionRecordReader<R> {
    pub fn new(reader: R) -> Self {
        PositionRecordReader {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for PositionRecordReader<R> {
    type Item = Result<PositionRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            return Some(
                serde_json::from_str(trimmed).map_err(|source| RecordIoError::Parse {
                    line: self.line_number,
                    source,
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/records")
            .join(file_name)
    }

    #[rstest]
    fn test_read_records_file() {
        let reader = PositionRecordReader::from_path(get_test_path("ssiiss.jsonl")).unwrap();
        let records: Vec<PositionRecord> = reader.map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].reference_id, "chr1");
        assert_eq!(
            records.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(records[2].true_genotype.as_deref(), Some("A/-"));
        assert_eq!(records[2].samples[0].counts[1].to_sequence, "-");
        assert_eq!(records[2].samples[0].counts[1].total_count(), 33);
    }

    #[rstest]
    fn test_skips_blank_and_comment_lines() {
        let input = "# header\n\n{\"reference_index\":0,\"reference_id\":\"chr1\",\"position\":7,\"reference_base\":\"G\"}\n";
        let records: Vec<PositionRecord> = PositionRecordReader::new(Cursor::new(input))
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position, 7);
        assert!(records[0].samples.is_empty());
        assert_eq!(records[0].true_genotype, None);
    }

    #[rstest]
    fn test_reports_bad_line() {
        let input = "{\"reference_index\":0,\"reference_id\":\"chr1\",\"position\":7,\"reference_base\":\"G\"}\nnot json\n";
        let mut reader = PositionRecordReader::new(Cursor::new(input));
        assert!(reader.next().unwrap().is_ok());
        match reader.next() {
            Some(Err(RecordIoError::Parse { line, .. })) => assert_eq!(line, 2),
            _ => panic!("expected a parse error on line 2"),
        }
    }

    #[rstest]
    fn test_missing_file() {
        assert!(matches!(
            PositionRecordReader::from_path(get_test_path("missing.jsonl")),
            Err(RecordIoError::Open(_))
        ));
    }
}
