use std::io::{self, Write};

use vgsales_data::region::Region;
use vgsales_insights::report::PlatformBreakdown;

use super::Context;

pub(super) fn run(ctx: &Context, region: Region) -> anyhow::Result<()> {
    let report = ctx.engine().platform_breakdown(region)?;
    ctx.emit(&report, write_table)
}

fn write_table(out: &mut dyn Write, report: &PlatformBreakdown) -> io::Result<()> {
    writeln!(out, "  {:<12} {:>12} {:>8}", "Platform", "Sales (M)", "Share")?;
    writeln!(out, "  {}", "-".repeat(34))?;
    for platform in &report.platforms {
        writeln!(
            out,
            "  {:<12} {:>12.2} {:>7.1}%",
            platform.platform, platform.total, platform.share_percent
        )?;
    }
    writeln!(out, "  {}", "-".repeat(34))?;
    writeln!(out, "  {:<12} {:>12.2} {:>7.1}%", "Total", report.total, 100.0)?;
    Ok(())
}
