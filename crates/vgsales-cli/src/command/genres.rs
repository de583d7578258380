use std::io::{self, Write};

use vgsales_data::region::Region;
use vgsales_insights::report::GenreBreakdown;

use super::Context;

/// Table columns, left to right.
const COLUMNS: [(Region, &str); 5] = [
    (Region::Na, "NA"),
    (Region::Eu, "EU"),
    (Region::Jp, "JP"),
    (Region::Other, "Other"),
    (Region::Global, "Total"),
];

pub(super) fn run(ctx: &Context) -> anyhow::Result<()> {
    let report = ctx.engine().genre_breakdown()?;
    ctx.emit(&report, write_table)
}

fn write_table(out: &mut dyn Write, report: &GenreBreakdown) -> io::Result<()> {
    write!(out, "  {:<14}", "Genre")?;
    for (_, label) in COLUMNS {
        write!(out, " {label:>10}")?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", "-".repeat(14 + 11 * COLUMNS.len()))?;
    for genre in &report.genres {
        write!(out, "  {:<14}", genre.genre)?;
        for (region, _) in COLUMNS {
            write!(out, " {:>10.2}", genre.get(region))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
