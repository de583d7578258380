use std::io::{self, Write};

use vgsales_data::region::Region;
use vgsales_insights::report::OutlierSection;

use super::Context;

/// Outlier values printed before the list is elided.
const MAX_LISTED: usize = 20;

pub(super) fn run(ctx: &Context, region: Region) -> anyhow::Result<()> {
    let report = ctx.engine().outliers(region)?;
    ctx.emit(&report, write_table)
}

fn write_table(out: &mut dyn Write, section: &OutlierSection) -> io::Result<()> {
    let report = &section.report;
    writeln!(out, "  {:<16} {:>10}", "Values", section.count)?;
    writeln!(out, "  {:<16} {:>10.2}", "Q1", report.q1)?;
    writeln!(out, "  {:<16} {:>10.2}", "Q3", report.q3)?;
    writeln!(out, "  {:<16} {:>10.2}", "IQR", report.iqr)?;
    writeln!(out, "  {:<16} {:>10.2}", "Lower fence", report.lower_fence)?;
    writeln!(out, "  {:<16} {:>10.2}", "Upper fence", report.upper_fence)?;
    writeln!(out, "  {:<16} {:>10}", "Outliers", report.count())?;

    if report.has_outliers() {
        writeln!(out)?;
        // Largest first
        for value in report.values.iter().rev().take(MAX_LISTED) {
            writeln!(out, "  {value:>10.2}")?;
        }
        if report.count() > MAX_LISTED {
            writeln!(out, "  ... and {} more", report.count() - MAX_LISTED)?;
        }
    }
    Ok(())
}
