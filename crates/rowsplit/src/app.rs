//! Command execution.

use crate::cli::{Command, HandicapArgs, InputArgs, ListArgs, PlotArgs};
use crate::error::AppResult;
use crate::input::load_table;
use rowsplit_common::{seconds_to_clock, ColumnLayout, RowsplitError};
use rowsplit_config::Config;
use rowsplit_graphs::{ChartOptions, SplitChart};
use rowsplit_records::{
    age_handicap, build, select_athlete, select_piece, BuildOptions, OarCount, RecordSet, Table,
};
use std::io::Write;
use tracing::{info, warn};

/// Runs commands against a loaded configuration.
pub struct App {
    config: Config,
}

impl App {
    /// Creates an application with the given configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in effect.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one command, writing its text output to `out`.
    pub fn run(&self, command: &Command, out: &mut impl Write) -> AppResult<()> {
        match command {
            Command::Plot(args) => self.plot(args, out),
            Command::List(args) => self.list(args, out),
            Command::Handicap(args) => handicap(args, out),
        }
    }

    /// Builds the records a command works on.
    pub fn load_records(&self, args: &InputArgs) -> AppResult<RecordSet> {
        let sheet = args.sheet.as_deref().or(self.config.input.sheet.as_deref());
        let table = load_table(&args.input, sheet)?;
        self.records_from_table(&table, args)
    }

    /// Builds records from an already loaded table, applying the row
    /// selection and weighting flags in `args`.
    pub fn records_from_table(&self, table: &Table, args: &InputArgs) -> AppResult<RecordSet> {
        let options = self.build_options(args);

        let records = match (&args.piece, &args.person, &args.distance) {
            (Some(date), _, Some(distance)) => select_piece(table, &options, date, distance)?,
            (None, Some(name), Some(distance)) => select_athlete(table, &options, name, distance)?,
            _ => build(table, &options)?,
        };
        Ok(records)
    }

    fn build_options(&self, args: &InputArgs) -> BuildOptions {
        let layout = match args.format {
            Some(format) => ColumnLayout::for_format(format),
            None => self.config.input.effective_layout(),
        };

        BuildOptions::new(layout)
            .with_weight_adjusted(self.weight_adjusted(args))
    }

    fn weight_adjusted(&self, args: &InputArgs) -> bool {
        args.weight_adjusted || self.config.weighting.enabled
    }

    /// Chart options from the configuration, overridden by command flags.
    pub fn chart_options(&self, args: &PlotArgs) -> AppResult<ChartOptions> {
        let mut options =
            ChartOptions::from_config(&self.config.chart, self.weight_adjusted(&args.input))?;
        if args.no_splits {
            options.show_splits = false;
        }
        if let Some(distance) = &args.input.distance {
            match distance.trim().parse::<f64>() {
                Ok(meters) => options.distance = meters,
                Err(_) => warn!(%distance, "distance is not numeric, keeping the configured chart width"),
            }
        }
        Ok(options)
    }

    fn plot(&self, args: &PlotArgs, out: &mut impl Write) -> AppResult<()> {
        let records = self.load_records(&args.input)?;
        let selected: Vec<String> = if args.athletes.is_empty() {
            records.keys().map(str::to_string).collect()
        } else {
            args.athletes.clone()
        };
        if selected.is_empty() {
            return Err(RowsplitError::empty_selection("the table has no records").into());
        }

        let options = self.chart_options(args)?;
        let chart = SplitChart::build(&selected, &records, &options)?;
        chart.save(&args.output)?;

        info!(athletes = selected.len(), output = %args.output.display(), "plotted splits");
        writeln!(out, "{}: {}", args.output.display(), chart.title)?;
        Ok(())
    }

    fn list(&self, args: &ListArgs, out: &mut impl Write) -> AppResult<()> {
        let records = self.load_records(&args.input)?;
        if args.json {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        } else {
            write_records(&records, out)?;
        }
        Ok(())
    }
}

/// Prints each record as one line: key, time, split, raw split when
/// adjusted, then the intermediate splits.
pub fn write_records(records: &RecordSet, out: &mut impl Write) -> AppResult<()> {
    for (key, record) in records {
        let mut line = format!(
            "{key}: time {} split {}",
            seconds_to_clock(record.time),
            seconds_to_clock(record.split)
        );
        if record.adjusted {
            line.push_str(&format!(" (raw {})", seconds_to_clock(record.raw_split)));
        }
        if record.has_splits() {
            let splits: Vec<String> = record.splits.iter().map(|s| seconds_to_clock(*s)).collect();
            line.push_str(&format!(" splits {}", splits.join(" ")));
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn handicap(args: &HandicapArgs, out: &mut impl Write) -> AppResult<()> {
    let oars = OarCount::try_from(args.oars)?;
    let seconds = age_handicap(args.age, args.distance, oars)?;
    writeln!(out, "{seconds:.1} s ({})", seconds_to_clock(seconds))?;
    Ok(())
}
