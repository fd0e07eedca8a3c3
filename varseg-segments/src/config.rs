use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::features::CountFeatureFiller;
use crate::strategy::{NoSplitStrategy, SingleCandidateIndelSplitStrategy, SplitStrategy};

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SplitStrategyKind {
    #[default]
    #[serde(rename = "none")]
    NoSplit,
    #[serde(rename = "single-candidate-indel")]
    SingleCandidateIndel,
}

#[derive(Error, Debug)]
pub enum SegmenterConfigError {
    #[error("Missing or invalid file extension in segmenter config file. It must be `toml`")]
    InvalidFileType,
    #[error("Invalid split strategy: {0}. Expected `none` or `single-candidate-indel`")]
    InvalidSplitStrategy(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type SegmenterConfigResult<T> = std::result::Result<T, SegmenterConfigError>;

impl FromStr for SplitStrategyKind {
    type Err = SegmenterConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NO_SPLIT => Ok(SplitStrategyKind::NoSplit),
            SINGLE_CANDIDATE_INDEL => Ok(SplitStrategyKind::SingleCandidateIndel),
            _ => Err(SegmenterConfigError::InvalidSplitStrategy(s.to_string())),
        }
    }
}

///
/// Settings for one segmentation run. Every field has a default, so a config file only
/// needs to name what it changes.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct SegmenterConfig {
    pub split_strategy: SplitStrategyKind,
    pub flank_size: u32,
    pub min_other_indel_distance: u32,
    pub require_exactly_one_locus: bool,
    pub sample_index: usize,
    pub min_indel_support: u32,
    pub max_gap: u32,
    pub map_features: bool,
    pub map_labels: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        SegmenterConfig {
            split_strategy: SplitStrategyKind::default(),
            flank_size: DEFAULT_FLANK_SIZE,
            min_other_indel_distance: DEFAULT_MIN_OTHER_INDEL_DISTANCE,
            require_exactly_one_locus: true,
            sample_index: DEFAULT_SAMPLE_INDEX,
            min_indel_support: DEFAULT_MIN_INDEL_SUPPORT,
            max_gap: DEFAULT_MAX_GAP,
            map_features: true,
            map_labels: true,
        }
    }
}

impl SegmenterConfig {
    pub fn split_strategy(&self) -> SplitStrategy {
        match self.split_strategy {
            SplitStrategyKind::NoSplit => SplitStrategy::from(NoSplitStrategy),
            SplitStrategyKind::SingleCandidateIndel => SplitStrategy::from(
                SingleCandidateIndelSplitStrategy::new(
                    self.flank_size,
                    self.min_other_indel_distance,
                    self.require_exactly_one_locus,
                )
                .with_sample_index(self.sample_index)
                .with_min_indel_support(self.min_indel_support),
            ),
        }
    }

    pub fn feature_filler(&self) -> CountFeatureFiller {
        CountFeatureFiller::new(self.map_features, self.map_labels)
    }
}

impl TryFrom<&Path> for SegmenterConfig {
    type Error = SegmenterConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        if path.extension().and_then(OsStr::to_str) != Some("toml") {
            return Err(SegmenterConfigError::InvalidFileType);
        }
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
