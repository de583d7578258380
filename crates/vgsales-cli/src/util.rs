use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vgsales_insights::thresholds::InsightThresholds;

/// Destination of one rendered report: stdout or a freshly created file.
pub struct ReportSink {
    target: String,
    writer: Box<dyn Write>,
}

impl ReportSink {
    /// Creates `path`, or locks stdout when no path is given.
    pub fn open(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self {
                target: "stdout".to_owned(),
                writer: Box::new(io::stdout().lock()),
            });
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            target: path.display().to_string(),
            writer: Box::new(BufWriter::new(file)),
        })
    }

    /// Human-readable name of the destination, for error messages.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn writer(&mut self) -> &mut dyn Write {
        &mut *self.writer
    }

    /// Flushes everything written so far and closes the sink.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", self.target))
    }
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<T>(out: &mut dyn Write, value: &T) -> io::Result<()>
where
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Reads and validates insight thresholds from a JSON file.
pub fn load_thresholds(path: &Path) -> anyhow::Result<InsightThresholds> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read thresholds file: {}", path.display()))?;
    parse_thresholds(&json).with_context(|| format!("Invalid thresholds in {}", path.display()))
}

/// Parses a thresholds override; keys missing from `json` keep their
/// default values.
fn parse_thresholds(json: &str) -> anyhow::Result<InsightThresholds> {
    let thresholds = serde_json::from_str::<InsightThresholds>(json)?;
    thresholds.validate()?;
    Ok(thresholds)
}

/// Installs the global log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` over
/// `info`. Logs go to stderr so that stdout only carries reports.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the log subscriber")?;
    Ok(())
}
