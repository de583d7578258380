//! Serializable results of the dashboard sections.
//!
//! Reports hold numbers and labels only. Text is produced from them by
//! [`crate::narrative`].

use serde::Serialize;
use vgsales_data::{dataset::TrendGranularity, region::Region};
use vgsales_stats::{histogram::Histogram, outliers::OutlierReport, summary::SummaryStatistics};

use crate::{
    classify::{CentralTendencyShape, IqrSpread, OutlierPresence, SkewShape, Spread},
    engine::{CorrelationResult, TrendResult},
};

/// Record count, catalogue sizes and year span of the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub records: usize,
    pub platforms: usize,
    pub genres: usize,
    pub publishers: usize,
    /// Earliest and latest release year, if any record has one.
    pub year_span: Option<(i32, i32)>,
    /// Sum of global sales, in millions of units.
    pub global_total: f64,
}

/// Summary statistics of one region with their qualitative labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub region: Region,
    pub summary: SummaryStatistics,
    pub spread: Spread,
    pub skew: SkewShape,
    pub outliers: OutlierPresence,
    pub iqr_spread: IqrSpread,
}

/// Total sales of one platform and its share of the region total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformShare {
    pub platform: String,
    pub total: f64,
    /// Percentage of the region total, `0.0` when the total is zero.
    pub share_percent: f64,
}

/// Per-platform totals for one region, sorted by platform name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformBreakdown {
    pub region: Region,
    pub platforms: Vec<PlatformShare>,
    pub total: f64,
    /// First platform with the maximum total.
    pub leading: PlatformShare,
    /// First platform with the minimum total.
    pub lowest: PlatformShare,
}

/// Regional and overall totals of one genre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreTotals {
    pub genre: String,
    pub na: f64,
    pub eu: f64,
    pub jp: f64,
    pub other: f64,
    /// `na + eu + jp + other`.
    pub total: f64,
}

impl GenreTotals {
    #[must_use]
    pub fn get(&self, region: Region) -> f64 {
        match region {
            Region::Global => self.total,
            Region::Na => self.na,
            Region::Eu => self.eu,
            Region::Jp => self.jp,
            Region::Other => self.other,
        }
    }
}

/// Per-genre totals, sorted by genre name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreBreakdown {
    pub genres: Vec<GenreTotals>,
    /// First genre with the largest overall total.
    pub leading: GenreTotals,
}

/// Box-plot figures for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionBox {
    pub region: Region,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub outliers: OutlierReport,
    pub spread: IqrSpread,
}

/// Side-by-side box-plot figures for several regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionComparison {
    pub regions: Vec<RegionBox>,
}

/// Histogram of one region with shape and spread labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionReport {
    pub region: Region,
    pub histogram: Histogram,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub skewness: Option<f64>,
    pub shape: CentralTendencyShape,
    pub spread: Spread,
    pub skew: SkewShape,
}

/// Pearson correlation between two regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub x: Region,
    pub y: Region,
    pub result: CorrelationResult,
}

/// Year-over-year trend of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub region: Region,
    pub granularity: TrendGranularity,
    pub result: TrendResult,
}

/// Tukey outliers of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierSection {
    pub region: Region,
    /// Number of non-null values inspected.
    pub count: usize,
    pub report: OutlierReport,
    pub presence: OutlierPresence,
}
