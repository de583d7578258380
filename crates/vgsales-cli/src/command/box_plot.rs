use std::io::{self, Write};

use clap::Args;
use vgsales_data::region::Region;
use vgsales_insights::report::RegionComparison;

use super::Context;

#[derive(Debug, Clone, Args)]
pub(super) struct BoxPlotArg {
    /// Regions to compare (comma-separated)
    #[arg(long, value_delimiter = ',', default_values = ["global", "na", "eu"])]
    regions: Vec<Region>,
}

pub(super) fn run(ctx: &Context, arg: &BoxPlotArg) -> anyhow::Result<()> {
    let report = ctx.engine().region_comparison(&arg.regions)?;
    ctx.emit(&report, write_table)
}

fn write_table(out: &mut dyn Write, report: &RegionComparison) -> io::Result<()> {
    writeln!(
        out,
        "  {:<14} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>9} {:>8}",
        "Region", "Min", "Q1", "Median", "Q3", "Max", "IQR", "Outliers", "Spread"
    )?;
    writeln!(out, "  {}", "-".repeat(89))?;
    for b in &report.regions {
        writeln!(
            out,
            "  {:<14} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>9} {:>8}",
            b.region.to_string(),
            b.min,
            b.outliers.q1,
            b.median,
            b.outliers.q3,
            b.max,
            b.outliers.iqr,
            b.outliers.count(),
            format!("{:?}", b.spread)
        )?;
    }
    Ok(())
}
