use std::fs::File;
use std::io::{self, BufRead, BufWriter, Stdout, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use varseg_core::SegmentInformation;
use varseg_core::utils::get_dynamic_reader;

use crate::error::{RecordIoError, Result};

enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
    Stdout(BufWriter<Stdout>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Plain(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
            Sink::Stdout(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
            Sink::Stdout(w) => w.flush(),
        }
    }
}

///
/// Writes finalized segments as JSON lines.
///
/// The writer is owned by the caller: create it before the segmentation run and call
/// [SegmentWriter::finish] once the run is over, so that buffers are flushed and gzip
/// output gets its trailer.
///
pub struct SegmentWriter {
    sink: Sink,
    written: u64,
}

impl SegmentWriter {
    ///
    /// Create the output file (and its parent directories).
    ///
    /// # Arguments
    /// - path: output path; `.gz` selects gzip compression, `-` writes to stdout
    ///
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let sink = if path == Path::new("-") {
            Sink::Stdout(BufWriter::new(io::stdout()))
        } else {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = BufWriter::new(File::create(path)?);
            match path.extension().and_then(|e| e.to_str()) {
                Some("gz") => Sink::Gzip(GzEncoder::new(file, Compression::default())),
                _ => Sink::Plain(file),
            }
        };

        Ok(SegmentWriter { sink, written: 0 })
    }

    pub fn append(&mut self, segment: &SegmentInformation) -> Result<()> {
        serde_json::to_writer(&mut self.sink, segment).map_err(RecordIoError::Encode)?;
        self.sink.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of segments appended so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush everything to disk. Returns the number of segments written.
    pub fn finish(self) -> Result<u64> {
        match self.sink {
            Sink::Plain(mut w) => w.flush()?,
            Sink::Gzip(w) => w.finish()?.flush()?,
            Sink::Stdout(mut w) => w.flush()?,
        }
        Ok(self.written)
    }
}

///
/// Read back a file written by [SegmentWriter].
///
pub fn read_segment_information<P: AsRef<Path>>(path: P) -> Result<Vec<SegmentInformation>> {
    let reader = get_dynamic_reader(path.as_ref()).map_err(|e| RecordIoError::Open(format!("{:#}", e)))?;

    let mut segments = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let segment = serde_json::from_str(&line).map_err(|source| RecordIoError::Parse { line: i + 1, source })?;
        segments.push(segment);
    }
    Ok(segments)
}
