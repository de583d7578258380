use std::io::{self, Write};

use clap::{Args, ValueEnum};
use vgsales_data::{dataset::TrendGranularity, region::Region};
use vgsales_insights::report::TrendReport;

use super::Context;

#[derive(Debug, Clone, Args)]
pub(super) struct TrendArg {
    /// Region to analyze (global, na, eu, jp, other)
    #[arg(long, default_value = "global")]
    region: Region,
    /// How records are turned into a yearly series
    #[arg(long, value_enum, default_value_t = Granularity::PerYear)]
    granularity: Granularity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Granularity {
    /// Sum sales within each year
    PerYear,
    /// Keep one point per record
    PerRecord,
}

impl From<Granularity> for TrendGranularity {
    fn from(value: Granularity) -> Self {
        match value {
            Granularity::PerYear => TrendGranularity::PerYearTotal,
            Granularity::PerRecord => TrendGranularity::PerRecord,
        }
    }
}

pub(super) fn run(ctx: &Context, arg: &TrendArg) -> anyhow::Result<()> {
    let report = ctx.engine().trend(arg.region, arg.granularity.into())?;
    ctx.emit(&report, write_table)
}

fn write_table(out: &mut dyn Write, report: &TrendReport) -> io::Result<()> {
    let result = &report.result;
    writeln!(out, "  {:<24} {:>12}", "Points", result.points.len())?;
    writeln!(out, "  {:<24} {:>12.4}", "Mean change (M)", result.mean_diff)?;
    writeln!(out, "  {:<24} {:>12}", "Direction", format!("{:?}", result.direction))?;
    if report.granularity == TrendGranularity::PerYearTotal {
        writeln!(out)?;
        writeln!(out, "  {:<8} {:>12}", "Year", "Sales (M)")?;
        writeln!(out, "  {}", "-".repeat(21))?;
        for point in &result.points {
            writeln!(out, "  {:<8} {:>12.2}", point.year, point.value)?;
        }
    }
    Ok(())
}
