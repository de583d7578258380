use std::io::{self, Write};

use clap::Args;
use vgsales_data::region::Region;
use vgsales_insights::report::CorrelationReport;

use super::Context;

#[derive(Debug, Clone, Args)]
pub(super) struct CompareArg {
    /// Region on the x axis
    #[arg(long, default_value = "na")]
    x: Region,
    /// Region on the y axis
    #[arg(long, default_value = "eu")]
    y: Region,
}

pub(super) fn run(ctx: &Context, arg: &CompareArg) -> anyhow::Result<()> {
    let report = ctx.engine().correlation(arg.x, arg.y)?;
    ctx.emit(&report, write_table)
}

fn write_table(out: &mut dyn Write, report: &CorrelationReport) -> io::Result<()> {
    let result = &report.result;
    writeln!(out, "  {:<20} {:>12}", "X", report.x.to_string())?;
    writeln!(out, "  {:<20} {:>12}", "Y", report.y.to_string())?;
    writeln!(out, "  {:<20} {:>12}", "Pairs", result.pairs)?;
    writeln!(out, "  {:<20} {:>12.4}", "Pearson r", result.r)?;
    writeln!(out, "  {:<20} {:>12}", "Strength", format!("{:?}", result.strength))?;
    Ok(())
}
