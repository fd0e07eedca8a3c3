pub const DEFAULT_FLANK_SIZE: u32 = 10;
pub const DEFAULT_MIN_OTHER_INDEL_DISTANCE: u32 = 0;
pub const DEFAULT_SAMPLE_INDEX: usize = 0;
pub const DEFAULT_MIN_INDEL_SUPPORT: u32 = 1;
pub const DEFAULT_MAX_GAP: u32 = 1;

pub const NO_SPLIT: &str = "none";
pub const SINGLE_CANDIDATE_INDEL: &str = "single-candidate-indel";
