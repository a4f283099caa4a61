//! CLI argument definitions for the AED location cleaner.

use std::path::PathBuf;

use aed_model::BoundingBox;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aed-clean",
    version,
    about = "AED location cleaner - normalize defibrillator GeoJSON for import",
    long_about = "Clean a GeoJSON collection of AED (defibrillator) locations.\n\n\
                  Keeps Point features inside a region, normalizes inspection dates\n\
                  and access tags, and writes a flat JSON array of clean documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean an AED GeoJSON file.
    Clean(CleanArgs),

    /// List the accepted inspection date layouts.
    Formats,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Source GeoJSON file (FeatureCollection or bare feature array).
    #[arg(value_name = "INPUT", default_value = "aedLocations.json")]
    pub input: PathBuf,

    /// Output file (default: aed_clean_normalized_stand_dates_with_validation.json
    /// next to INPUT).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Region to keep, as MINLON,MINLAT,MAXLON,MAXLAT (default: Ireland).
    #[arg(long = "region", value_name = "BBOX", allow_hyphen_values = true)]
    pub region: Option<BoundingBox>,

    /// Also write a JSON report of skipped records.
    #[arg(long = "skip-report", value_name = "PATH")]
    pub skip_report: Option<PathBuf>,

    /// Clean and report without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_defaults() {
        let cli = Cli::try_parse_from(["aed-clean", "clean"]).unwrap();
        let Command::Clean(args) = cli.command else {
            panic!("expected clean");
        };
        assert_eq!(args.input, PathBuf::from("aedLocations.json"));
        assert!(args.output.is_none());
        assert!(args.region.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn region_accepts_negative_longitudes() {
        let cli = Cli::try_parse_from([
            "aed-clean",
            "clean",
            "in.json",
            "--region",
            "-11,51,-5,56",
        ])
        .unwrap();
        let Command::Clean(args) = cli.command else {
            panic!("expected clean");
        };
        assert_eq!(args.region, Some(BoundingBox::IRELAND));
    }

    #[test]
    fn inverted_region_is_rejected() {
        assert!(
            Cli::try_parse_from(["aed-clean", "clean", "--region", "0,10,1,5"]).is_err()
        );
    }
}
