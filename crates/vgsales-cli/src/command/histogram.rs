use std::io::{self, Write};

use clap::Args;
use vgsales_data::region::Region;
use vgsales_insights::report::DistributionReport;

use super::Context;

const BAR_WIDTH: u64 = 40;

#[derive(Debug, Clone, Args)]
pub(super) struct HistogramArg {
    /// Region to analyze (global, na, eu, jp, other)
    #[arg(long, default_value = "global")]
    region: Region,
    /// Number of equal-width bins (defaults to the configured value)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    bins: Option<u16>,
}

pub(super) fn run(ctx: &Context, arg: &HistogramArg) -> anyhow::Result<()> {
    let report = ctx
        .engine()
        .distribution(arg.region, arg.bins.map(usize::from))?;
    ctx.emit(&report, write_table)
}

#[expect(clippy::cast_possible_truncation)]
fn write_table(out: &mut dyn Write, report: &DistributionReport) -> io::Result<()> {
    let histogram = &report.histogram;
    let peak = histogram.peak().map_or(0, |bin| bin.count).max(1);

    writeln!(out, "  {:>19} {:>8}", "Range (M)", "Count")?;
    writeln!(out, "  {}", "-".repeat(28))?;
    for bin in &histogram.bins {
        let bar = "#".repeat((bin.count * BAR_WIDTH / peak) as usize);
        writeln!(
            out,
            "  {:>8.2} - {:<8.2} {:>8} {bar}",
            bin.range.start, bin.range.end, bin.count
        )?;
    }
    Ok(())
}
