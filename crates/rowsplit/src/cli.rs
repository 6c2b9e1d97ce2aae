//! CLI argument parsing for rowsplit

use clap::{ArgAction, Args, Parser, Subcommand};
use rowsplit_common::SourceFormat;
use std::path::PathBuf;

/// Command line of the `rowsplit` binary.
#[derive(Parser, Debug)]
#[command(name = "rowsplit")]
#[command(version)]
#[command(about = "Rowing practice splits, weight adjustment and split charts", long_about = None)]
pub struct Cli {
    /// Configuration file (.yaml, .yml or .toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The rowsplit commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw a split comparison chart
    Plot(PlotArgs),
    /// Print the records built from a table
    List(ListArgs),
    /// Print the age handicap for a masters rower
    Handicap(HandicapArgs),
}

/// Table location, layout and row selection shared by every command that
/// reads a table.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Practice table (.xlsx, .xlsm, .xls, .ods or .csv)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column layout of the table (workbook or sheets_export)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<SourceFormat>,

    /// Worksheet to read (first sheet by default)
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Keep one piece: rows from this date at --distance, keyed by athlete
    #[arg(long, value_name = "DATE", requires = "distance", conflicts_with = "person")]
    pub piece: Option<String>,

    /// Keep one athlete's rows at --distance, keyed by date
    #[arg(long, value_name = "NAME", requires = "distance")]
    pub person: Option<String>,

    /// Piece distance in meters
    #[arg(short, long, value_name = "METERS")]
    pub distance: Option<String>,

    /// Weight adjust time and split
    #[arg(short, long)]
    pub weight_adjusted: bool,
}

/// Arguments of `rowsplit plot`.
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// Table to read.
    #[command(flatten)]
    pub input: InputArgs,

    /// Record to plot; repeat for more. Every record when omitted
    #[arg(short, long = "athlete", value_name = "NAME")]
    pub athletes: Vec<String>,

    /// Leave out the intermediate split markers
    #[arg(long)]
    pub no_splits: bool,

    /// Image to write (.png, .jpg, .bmp or .svg)
    #[arg(short, long, value_name = "FILE", default_value = "splits.png")]
    pub output: PathBuf,
}

/// Arguments of `rowsplit list`.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Table to read.
    #[command(flatten)]
    pub input: InputArgs,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `rowsplit handicap`.
#[derive(Args, Debug, Clone)]
pub struct HandicapArgs {
    /// Rower age in years
    #[arg(long)]
    pub age: f64,

    /// Piece distance in meters
    #[arg(long, default_value_t = 1000.0)]
    pub distance: f64,

    /// Boat size: 2, 4 or 8 oars
    #[arg(long, default_value_t = 2)]
    pub oars: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plot_arguments() {
        let cli = Cli::try_parse_from([
            "rowsplit", "plot", "practice.csv", "--piece", "2022/09/01", "--distance", "2000",
            "-a", "Alice", "-a", "Bruno", "--format", "sheets-export", "-w",
        ])
        .unwrap();

        let Command::Plot(args) = cli.command else {
            panic!("expected plot");
        };
        assert_eq!(args.athletes, vec!["Alice", "Bruno"]);
        assert_eq!(args.input.piece.as_deref(), Some("2022/09/01"));
        assert_eq!(args.input.format, Some(SourceFormat::SheetsExport));
        assert!(args.input.weight_adjusted);
        assert_eq!(args.output, PathBuf::from("splits.png"));
    }

    #[test]
    fn test_piece_requires_distance() {
        assert!(Cli::try_parse_from(["rowsplit", "list", "in.csv", "--piece", "2022/09/01"]).is_err());
        assert!(Cli::try_parse_from([
            "rowsplit", "list", "in.csv", "--piece", "2022/09/01", "--person", "Alice", "-d", "2000",
        ])
        .is_err());
    }

    #[test]
    fn test_handicap_defaults() {
        let cli = Cli::try_parse_from(["rowsplit", "handicap", "--age", "50"]).unwrap();
        let Command::Handicap(args) = cli.command else {
            panic!("expected handicap");
        };
        assert_eq!(args.distance, 1000.0);
        assert_eq!(args.oars, 2);
    }
}
