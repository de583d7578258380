use std::io::{self, Write};

use vgsales_insights::report::OverviewReport;

use super::Context;

pub(super) fn run(ctx: &Context) -> anyhow::Result<()> {
    let report = ctx.engine().overview();
    ctx.emit(&report, write_table)
}

fn write_table(out: &mut dyn Write, report: &OverviewReport) -> io::Result<()> {
    let years = report
        .year_span
        .map_or("N/A".to_string(), |(first, last)| format!("{first}-{last}"));
    writeln!(out, "  {:<20} {:>12}", "Records", report.records)?;
    writeln!(out, "  {:<20} {:>12}", "Platforms", report.platforms)?;
    writeln!(out, "  {:<20} {:>12}", "Genres", report.genres)?;
    writeln!(out, "  {:<20} {:>12}", "Publishers", report.publishers)?;
    writeln!(out, "  {:<20} {:>12}", "Years", years)?;
    writeln!(out, "  {:<20} {:>12.2}", "Global Sales (M)", report.global_total)?;
    Ok(())
}
