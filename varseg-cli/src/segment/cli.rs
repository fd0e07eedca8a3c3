use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const SEGMENT_CMD: &str = "segment";
pub const DEFAULT_OUT: &str = "segments.jsonl.gz";

pub fn create_segment_cli() -> Command {
    Command::new(SEGMENT_CMD)
        .about("Split a sorted stream of position records into segments and write them as JSON lines.")
        .arg(Arg::new("input").required(true).help("Position records (.jsonl or .jsonl.gz), or - for stdin"))
        .arg(arg!(-o --output <OUTPUT> "Output file (.jsonl or .jsonl.gz), or - for stdout"))
        .arg(arg!(-c --config <CONFIG> "TOML file with segmenter settings"))
        .arg(
            arg!(--strategy <STRATEGY> "Split strategy")
                .value_parser(["none", "single-candidate-indel"]),
        )
        .arg(arg!(--flank <FLANK> "Positions kept on each side of an indel").value_parser(value_parser!(u32)))
        .arg(
            arg!(--"min-other-indel-distance" <DISTANCE> "Distance other indels must keep when several loci are allowed")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("allow-multiple-loci")
                .long("allow-multiple-loci")
                .action(ArgAction::SetTrue)
                .help("Emit one window per sufficiently isolated indel instead of rejecting the segment"),
        )
        .arg(
            arg!(--"max-gap" <GAP> "Largest distance between positions kept in one segment")
                .value_parser(value_parser!(u32)),
        )
        .arg(arg!(--sample <INDEX> "Sample used to detect candidate indels").value_parser(value_parser!(usize)))
        .arg(
            arg!(--"min-indel-support" <READS> "Reads needed on an indel allele")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("no-features")
                .long("no-features")
                .action(ArgAction::SetTrue)
                .help("Do not compute features"),
        )
        .arg(
            Arg::new("no-labels")
                .long("no-labels")
                .action(ArgAction::SetTrue)
                .help("Do not compute labels"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_valid() {
        create_segment_cli().debug_assert();
    }

    #[test]
    fn test_parses_overrides() {
        let matches = create_segment_cli()
            .try_get_matches_from([
                SEGMENT_CMD,
                "records.jsonl",
                "--strategy",
                "single-candidate-indel",
                "--flank",
                "3",
                "--allow-multiple-loci",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<String>("input").unwrap(), "records.jsonl");
        assert_eq!(matches.get_one::<u32>("flank"), Some(&3));
        assert!(matches.get_flag("allow-multiple-loci"));
        assert_eq!(matches.get_one::<u32>("max-gap"), None);
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let result = create_segment_cli().try_get_matches_from([SEGMENT_CMD, "records.jsonl", "--strategy", "sliding"]);
        assert!(result.is_err());
    }
}
