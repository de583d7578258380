use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use vgsales_data::{dataset::Dataset, region::Region};
use vgsales_insights::{
    engine::StatisticsEngine, narrative::Narrative, thresholds::InsightThresholds,
};

use self::{box_plot::BoxPlotArg, compare::CompareArg, histogram::HistogramArg, trend::TrendArg};
use crate::util::{self, ReportSink};

mod box_plot;
mod compare;
mod genres;
mod histogram;
mod outliers;
mod overview;
mod platforms;
mod summary;
mod trend;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Descriptive statistics for video game sales", long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    global: GlobalArgs,

    /// Which section to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Args)]
struct GlobalArgs {
    /// Path to the sales CSV file
    #[arg(long, global = true, default_value = "videogamesales.csv")]
    data: PathBuf,

    /// JSON file overriding the classification thresholds
    #[arg(long, global = true)]
    thresholds: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Log debug messages to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Titled table followed by narrative paragraphs
    Text,
    /// Structured report with its narrative
    Json,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Record count, catalogue sizes and year span
    Overview,
    /// Summary statistics of one region
    Summary(#[clap(flatten)] RegionArg),
    /// Sales per platform in one region
    Platforms(#[clap(flatten)] RegionArg),
    /// Sales per genre in every region
    Genres,
    /// Correlation between two regions
    Compare(#[clap(flatten)] CompareArg),
    /// Year-over-year trend of one region
    Trend(#[clap(flatten)] TrendArg),
    /// Histogram of one region
    Histogram(#[clap(flatten)] HistogramArg),
    /// Box-plot figures for several regions
    BoxPlot(#[clap(flatten)] BoxPlotArg),
    /// Tukey outliers of one region
    Outliers(#[clap(flatten)] RegionArg),
}

#[derive(Debug, Clone, Args)]
struct RegionArg {
    /// Region to analyze (global, na, eu, jp, other)
    #[arg(long, default_value = "global")]
    region: Region,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    util::init_tracing(args.global.verbose)?;
    let ctx = Context::load(&args.global)?;

    match &args.mode {
        Mode::Overview => overview::run(&ctx)?,
        Mode::Summary(arg) => summary::run(&ctx, arg.region)?,
        Mode::Platforms(arg) => platforms::run(&ctx, arg.region)?,
        Mode::Genres => genres::run(&ctx)?,
        Mode::Compare(arg) => compare::run(&ctx, arg)?,
        Mode::Trend(arg) => trend::run(&ctx, arg)?,
        Mode::Histogram(arg) => histogram::run(&ctx, arg)?,
        Mode::BoxPlot(arg) => box_plot::run(&ctx, arg)?,
        Mode::Outliers(arg) => outliers::run(&ctx, arg.region)?,
    }
    Ok(())
}

/// Loaded inputs shared by every command.
#[derive(Debug)]
struct Context {
    dataset: Dataset,
    thresholds: InsightThresholds,
    format: OutputFormat,
    output: Option<PathBuf>,
}

/// JSON shape of a section: the report plus its rendered text.
#[derive(Debug, Serialize)]
struct Section<'a, R> {
    title: String,
    report: &'a R,
    narrative: Vec<String>,
}

impl Context {
    fn load(global: &GlobalArgs) -> anyhow::Result<Self> {
        let thresholds = match &global.thresholds {
            Some(path) => util::load_thresholds(path)?,
            None => InsightThresholds::default(),
        };
        let dataset = Dataset::from_path(&global.data)
            .with_context(|| format!("Failed to load dataset: {}", global.data.display()))?;
        Ok(Self {
            dataset,
            thresholds,
            format: global.format,
            output: global.output.clone(),
        })
    }

    fn engine(&self) -> StatisticsEngine<'_> {
        StatisticsEngine::new(&self.dataset, &self.thresholds)
    }

    /// Writes a report in the selected format.
    ///
    /// In text mode `write_table` renders the numbers between the title and
    /// the narrative.
    fn emit<R>(&self, report: &R, write_table: TableWriter<R>) -> anyhow::Result<()>
    where
        R: Serialize + Narrative,
    {
        let mut sink = ReportSink::open(self.output.as_deref())?;
        let written = match self.format {
            OutputFormat::Json => util::write_json(
                sink.writer(),
                &Section {
                    title: report.title(),
                    report,
                    narrative: report.paragraphs(),
                },
            ),
            OutputFormat::Text => write_text(sink.writer(), report, write_table),
        };
        written.with_context(|| format!("Failed to write report to {}", sink.target()))?;
        sink.finish()
    }
}

/// Renders the numeric part of a report in text mode.
type TableWriter<R> = fn(&mut dyn Write, &R) -> io::Result<()>;

/// Title, underline, table, then one block per narrative paragraph.
fn write_text<R>(out: &mut dyn Write, report: &R, write_table: TableWriter<R>) -> io::Result<()>
where
    R: Narrative,
{
    let title = report.title();
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)?;
    write_table(out, report)?;
    writeln!(out)?;
    for paragraph in report.paragraphs() {
        writeln!(out, "{paragraph}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Formats an optional number, printing `N/A` when absent.
fn opt_f64(value: Option<f64>) -> String {
    value.map_or("N/A".to_string(), |v| format!("{v:.2}"))
}
