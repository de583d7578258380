use std::io::{self, Write};

use vgsales_data::region::Region;
use vgsales_insights::report::SummaryReport;

use super::{Context, opt_f64};

pub(super) fn run(ctx: &Context, region: Region) -> anyhow::Result<()> {
    let report = ctx.engine().summary(region)?;
    ctx.emit(&report, write_table)
}

fn write_table(out: &mut dyn Write, report: &SummaryReport) -> io::Result<()> {
    let summary = &report.summary;
    let stats = &summary.stats;
    let mut rows = vec![
        ("Count".to_owned(), stats.count.to_string()),
        ("Mean".to_owned(), format!("{:.2} M", stats.mean)),
        ("Median".to_owned(), format!("{:.2} M", stats.median)),
        ("Mode".to_owned(), format!("{:.2} M", stats.mode)),
        ("Standard Deviation".to_owned(), format!("{:.2} M", stats.std_dev)),
        ("Variance".to_owned(), format!("{:.2}", stats.variance)),
        ("Range".to_owned(), format!("{:.2} M", stats.range)),
        ("Min".to_owned(), format!("{:.2} M", stats.min)),
        ("Max".to_owned(), format!("{:.2} M", stats.max)),
    ];
    rows.extend(
        summary
            .percentiles
            .iter()
            .map(|(p, value)| (format!("{p:.0}th Percentile"), format!("{value:.2} M"))),
    );
    rows.extend([
        ("IQR".to_owned(), format!("{:.2} M", summary.iqr())),
        ("Skewness".to_owned(), opt_f64(stats.skewness)),
        ("Outliers".to_owned(), summary.outliers.count().to_string()),
    ]);
    for (label, value) in rows {
        writeln!(out, "  {label:<20} {value:>14}")?;
    }
    Ok(())
}
