use std::path::PathBuf;
use std::process::exit;

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::debug;

use nhdgen::config::MERGE_BUFFER_SIZE;
use nhdgen::generator::generator_struct::{GeneratorOptions, OutputMode, PopulateMode};

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(
            "When using manual mode and not merging, specify only the output filename.\n\n\
             Example) nhdgen --auto --merge hdd.bin hdd.nhd\n\
             works out the geometry from hdd.bin, and writes the header plus the image to hdd.nhd.",
        )
        .arg(
            Arg::new("auto")
                .long("auto")
                .help("Work out the geometry from a FAT boot sector in the source image. Manual mode if not given.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("merge")
                .long("merge")
                .help("Write the header followed by the source image. Header only if not given.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("atomic")
                .long("atomic")
                .help("Build the output in a temp file and only replace the destination once it is complete.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-header")
                .long("show-header")
                .help("Print a hex dump of the header before writing it.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("buffer-size")
                .long("buffer-size")
                .value_name("BYTES")
                .help("Bytes of the source image held in memory at once while merging. Defaults to 32 MiB.")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("files")
                .value_name("FILES")
                .help("[SOURCE] DESTINATION")
                .value_parser(value_parser!(PathBuf))
                .num_args(1..=2)
                .required(true)
                .action(ArgAction::Append),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut command = cli();
    let matches = command.get_matches_mut();
    let options = match options_from(&matches) {
        Some(options) => options,
        None => command
            .error(
                ErrorKind::WrongNumberOfValues,
                "--auto and --merge need both a source and a destination, otherwise give only the destination.",
            )
            .exit(),
    };
    debug!("{options:?}");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    match options.generate(&mut input, &mut output) {
        Ok(report) => {
            println!("Done. {} bytes written.", report.bytes_written);
        }
        Err(error) => {
            eprintln!("nhdgen: {error}");
            exit(1);
        }
    }
}

/// None if the positionals don't fit the chosen modes.
fn options_from(matches: &ArgMatches) -> Option<GeneratorOptions> {
    let populate = if matches.get_flag("auto") {
        PopulateMode::Auto
    } else {
        PopulateMode::Manual
    };
    let output = if matches.get_flag("merge") {
        OutputMode::Merge
    } else {
        OutputMode::HeaderOnly
    };
    let mut files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    let needs_source = populate == PopulateMode::Auto || output == OutputMode::Merge;
    let (source, destination) = match (needs_source, files.len()) {
        (true, 2) => {
            let destination = files.pop()?;
            (files.pop(), destination)
        }
        (false, 1) => (None, files.pop()?),
        _ => return None,
    };

    let buffer_size = matches
        .get_one::<usize>("buffer-size")
        .copied()
        .unwrap_or(MERGE_BUFFER_SIZE);

    GeneratorOptions::new(populate, output, source, destination)
        .ok()
        .map(|options| {
            options
                .with_buffer_size(buffer_size)
                .with_atomic(matches.get_flag("atomic"))
                .with_show_header(matches.get_flag("show-header"))
        })
}

#[cfg(test)]
mod tests {
    // Unwrapping is okay here, since we want unexpected outcomes to fail tests.
    #![allow(clippy::unwrap_used)]

    use super::*;

    use test_log::test; // We want to see logs while testing.

    fn parse(args: &[&str]) -> Option<GeneratorOptions> {
        options_from(&cli().try_get_matches_from(args.iter().copied()).unwrap())
    }

    #[test]
    fn manual_header_only_takes_one_file() {
        let expected = GeneratorOptions::new(PopulateMode::Manual, OutputMode::HeaderOnly, None, "out.nhd".into())
            .unwrap()
            .with_buffer_size(MERGE_BUFFER_SIZE);
        assert_eq!(parse(&["nhdgen", "out.nhd"]), Some(expected));
    }

    #[test]
    fn auto_takes_source_then_destination() {
        let expected = GeneratorOptions::new(
            PopulateMode::Auto,
            OutputMode::HeaderOnly,
            Some("hdd.bin".into()),
            "hdd.nhd".into(),
        )
        .unwrap()
        .with_buffer_size(MERGE_BUFFER_SIZE)
        .with_show_header(true);
        assert_eq!(
            parse(&["nhdgen", "--auto", "--show-header", "hdd.bin", "hdd.nhd"]),
            Some(expected)
        );
    }

    #[test]
    fn merge_flags_carry_through() {
        let expected = GeneratorOptions::new(
            PopulateMode::Manual,
            OutputMode::Merge,
            Some("hdd.bin".into()),
            "hdd.nhd".into(),
        )
        .unwrap()
        .with_buffer_size(4096)
        .with_atomic(true);
        assert_eq!(
            parse(&["nhdgen", "--merge", "--buffer-size", "4096", "--atomic", "hdd.bin", "hdd.nhd"]),
            Some(expected)
        );
    }

    #[test]
    fn wrong_file_count_for_mode() {
        // Auto needs a source.
        assert_eq!(parse(&["nhdgen", "--auto", "hdd.nhd"]), None);
        assert_eq!(parse(&["nhdgen", "--merge", "hdd.nhd"]), None);
        // Manual header only has nowhere to put a second file.
        assert_eq!(parse(&["nhdgen", "hdd.bin", "hdd.nhd"]), None);
    }

    #[test]
    fn clap_rejects_bad_counts() {
        assert!(cli().try_get_matches_from(["nhdgen"]).is_err());
        assert!(cli().try_get_matches_from(["nhdgen", "a", "b", "c"]).is_err());
        assert!(cli()
            .try_get_matches_from(["nhdgen", "--buffer-size", "lots", "out.nhd"])
            .is_err());
    }

    #[test]
    fn command_is_well_formed() {
        cli().debug_assert();
    }
}
