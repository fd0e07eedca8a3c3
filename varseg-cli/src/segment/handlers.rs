use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, debug, info, log_enabled};

use varseg_core::SubSegment;
use varseg_io::{PositionRecordReader, SegmentWriter};
use varseg_segments::{
    SegmentHelper, SegmenterConfig, SplitStrategyKind, format_genotypes, segment_records,
};

use super::cli::DEFAULT_OUT;

///
/// Build the segmenter settings: the config file (if any), then command line overrides.
///
fn build_config(matches: &ArgMatches) -> Result<SegmenterConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SegmenterConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load segmenter config: {}", path))?,
        None => SegmenterConfig::default(),
    };

    if let Some(strategy) = matches.get_one::<String>("strategy") {
        config.split_strategy = strategy.parse::<SplitStrategyKind>()?;
    }
    if let Some(flank) = matches.get_one::<u32>("flank") {
        config.flank_size = *flank;
    }
    if let Some(distance) = matches.get_one::<u32>("min-other-indel-distance") {
        config.min_other_indel_distance = *distance;
    }
    if matches.get_flag("allow-multiple-loci") {
        config.require_exactly_one_locus = false;
    }
    if let Some(max_gap) = matches.get_one::<u32>("max-gap") {
        config.max_gap = *max_gap;
    }
    if let Some(sample) = matches.get_one::<usize>("sample") {
        config.sample_index = *sample;
    }
    if let Some(support) = matches.get_one::<u32>("min-indel-support") {
        config.min_indel_support = *support;
    }
    if matches.get_flag("no-features") {
        config.map_features = false;
    }
    if matches.get_flag("no-labels") {
        config.map_labels = false;
    }

    Ok(config)
}

pub fn run_segment(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to position records is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let config = build_config(matches)?;
    let strategy = config.split_strategy();
    let filler = config.feature_filler();
    let sample_index = config.sample_index;

    info!("Segmenting {} with strategy {}", input, strategy);

    let records = PositionRecordReader::from_path(input)
        .with_context(|| format!("Failed to open position records: {}", input))?;
    let mut writer = SegmentWriter::create(output)
        .with_context(|| format!("Failed to create output file: {}", output))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} records)")?,
    );
    pb.set_message(format!("Segmenting {}", input));
    pb.enable_steady_tick(Duration::from_millis(200));

    let result = {
        let mut helper = SegmentHelper::new(
            strategy,
            |sub: &SubSegment<'_>| {
                if log_enabled!(Level::Debug) {
                    debug!("Emit {}\n{}", sub, format_genotypes(sub.records(), sample_index));
                }
                filler.fill(sub)
            },
            |info| {
                writer.append(&info)?;
                Ok(())
            },
        );
        let records = records.inspect(|_| pb.inc(1));
        segment_records(records, &mut helper, config.max_gap)
    };

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            pb.abandon_with_message(format!("Segmentation of {} failed", input));
            // keep what was already written readable
            writer.finish()?;
            return Err(e);
        }
    };

    let written = writer.finish()?;
    pb.finish_with_message(format!("Segmented {}", input));

    info!("{}", stats);
    info!("Wrote {} segment(s) to {}", written, output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use varseg_io::read_segment_information;
    use varseg_segments::{SingleCandidateIndelSplitStrategy, SplitStrategy};

    use crate::segment::cli::{SEGMENT_CMD, create_segment_cli};

    fn matches_from(args: &[&str]) -> ArgMatches {
        let mut argv = vec![SEGMENT_CMD, "records.jsonl"];
        argv.extend_from_slice(args);
        create_segment_cli().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let config = build_config(&matches_from(&[])).unwrap();
        assert_eq!(config, SegmenterConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let config = build_config(&matches_from(&[
            "--config",
            "../tests/data/config/single_indel.toml",
            "--flank",
            "4",
            "--allow-multiple-loci",
            "--no-labels",
        ]))
        .unwrap();

        assert_eq!(config.flank_size, 4);
        assert!(!config.map_labels);
        assert_eq!(
            config.split_strategy(),
            SplitStrategy::from(SingleCandidateIndelSplitStrategy::new(4, 0, false))
        );
    }

    #[test]
    fn test_failed_run_leaves_readable_output() {
        let tempdir = tempfile::tempdir().unwrap();
        let input = tempdir.path().join("records.jsonl");
        let output = tempdir.path().join("out/segments.jsonl.gz");
        std::fs::write(
            &input,
            concat!(
                "{\"reference_index\":0,\"reference_id\":\"chr1\",\"position\":1,\"reference_base\":\"A\"}\n",
                "{\"reference_index\":0,\"reference_id\":\"chr1\",\"position\":10,\"reference_base\":\"A\"}\n",
                "not json\n",
            ),
        )
        .unwrap();

        let matches = create_segment_cli()
            .try_get_matches_from([
                SEGMENT_CMD,
                input.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .unwrap();

        assert!(run_segment(&matches).is_err());

        let segments = read_segment_information(&output).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_position, 1);
    }

    #[test]
    fn test_missing_config_file() {
        assert!(build_config(&matches_from(&["--config", "missing.toml"])).is_err());
    }
}
