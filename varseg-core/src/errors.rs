use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("No segment is open: cannot {operation}")]
    NoOpenSegment { operation: &'static str },

    #[error(
        "Position {position} is before the end of the open segment ({end_position}); records must be sorted"
    )]
    NonMonotonicPosition { position: u32, end_position: u32 },

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

pub type SegmentResult<T> = std::result::Result<T, SegmentError>;
