//! Statistics entry points and the dataset-bound section builders.
//!
//! The free functions work on plain slices and are the building blocks of
//! every section. [`StatisticsEngine`] projects a [`Dataset`] into series and
//! wraps the results into [`crate::report`] values.

use std::collections::BTreeMap;

use serde::Serialize;
use vgsales_data::{
    dataset::{Dataset, TrendGranularity},
    region::Region,
};
use vgsales_stats::{
    StatsError,
    correlation::pearson,
    histogram::Histogram,
    outliers::OutlierReport,
    summary::SummaryStatistics,
    trend::{TrendPoint, mean_first_difference},
};

use crate::{
    InsightError,
    classify::{
        CentralTendencyShape, CorrelationStrength, IqrSpread, OutlierPresence, SkewShape, Spread,
        TrendDirection,
    },
    report::{
        CorrelationReport, DistributionReport, GenreBreakdown, GenreTotals, OutlierSection,
        OverviewReport, PlatformBreakdown, PlatformShare, RegionBox, RegionComparison,
        SummaryReport, TrendReport,
    },
    thresholds::InsightThresholds,
};

/// Pearson correlation with its strength label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationResult {
    pub r: f64,
    pub strength: CorrelationStrength,
    /// Number of index-aligned pairs the coefficient was computed from.
    pub pairs: usize,
}

/// Mean year-over-year change with its direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendResult {
    pub mean_diff: f64,
    pub direction: TrendDirection,
    /// The year-ordered points the trend was computed from.
    pub points: Vec<TrendPoint>,
}

/// Computes the full statistical summary of a series.
///
/// # Examples
///
/// ```
/// use vgsales_insights::engine::compute_summary;
///
/// let summary = compute_summary(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(summary.stats.mean, 3.0);
/// assert_eq!(summary.iqr(), 2.0);
/// assert!((summary.stats.std_dev - 1.5811).abs() < 1e-4);
/// ```
pub fn compute_summary(values: &[f64]) -> Result<SummaryStatistics, StatsError> {
    SummaryStatistics::new(values.iter().copied())
}

/// Computes Pearson's r for two index-aligned series and labels it.
///
/// # Errors
///
/// - [`StatsError::LengthMismatch`] if the series differ in length
/// - [`StatsError::EmptyInput`] if they are empty
/// - [`StatsError::ConstantInput`] if either has zero variance
pub fn compute_correlation(
    x: &[f64],
    y: &[f64],
    thresholds: &InsightThresholds,
) -> Result<CorrelationResult, StatsError> {
    let r = pearson(x, y)?;
    Ok(CorrelationResult {
        r,
        strength: CorrelationStrength::classify(r, thresholds),
        pairs: x.len(),
    })
}

/// Computes the mean first difference of a year series and labels it.
///
/// Points are stable-sorted by year first, so points of the same year keep
/// their relative order.
///
/// ```
/// use vgsales_insights::{classify::TrendDirection, engine::compute_trend};
/// use vgsales_stats::trend::TrendPoint;
///
/// let points = [TrendPoint::new(2001, 2.0), TrendPoint::new(2000, 1.0)];
/// let trend = compute_trend(&points).unwrap();
/// assert_eq!(trend.mean_diff, 1.0);
/// assert_eq!(trend.direction, TrendDirection::Increasing);
/// ```
pub fn compute_trend(points: &[TrendPoint]) -> Result<TrendResult, StatsError> {
    let mut points = points.to_vec();
    points.sort_by_key(|p| p.year);
    let mean_diff = mean_first_difference(&points)?;
    Ok(TrendResult {
        mean_diff,
        direction: TrendDirection::classify(mean_diff),
        points,
    })
}

/// Applies the Tukey 1.5·IQR rule to a series.
pub fn detect_outliers(values: &[f64]) -> Result<OutlierReport, StatsError> {
    OutlierReport::new(values.iter().copied())
}

/// Builds the dashboard sections for one dataset.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsEngine<'a> {
    dataset: &'a Dataset,
    thresholds: &'a InsightThresholds,
}

impl<'a> StatisticsEngine<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset, thresholds: &'a InsightThresholds) -> Self {
        Self {
            dataset,
            thresholds,
        }
    }

    #[must_use]
    pub fn overview(&self) -> OverviewReport {
        let dataset = self.dataset;
        OverviewReport {
            records: dataset.len(),
            platforms: dataset.distinct_count(|r| &r.platform),
            genres: dataset.distinct_count(|r| &r.genre),
            publishers: dataset.distinct_count(|r| &r.publisher),
            year_span: dataset.year_span(),
            global_total: dataset.series(Region::Global).total(),
        }
    }

    /// Summary statistics of one region with spread, skew, outlier and IQR
    /// labels.
    pub fn summary(&self, region: Region) -> Result<SummaryReport, InsightError> {
        let series = self.dataset.series(region);
        let summary = compute_summary(&series.values)?;
        tracing::debug!(
            %region,
            count = summary.stats.count,
            outliers = summary.outliers.count(),
            "computed summary"
        );

        let t = self.thresholds;
        Ok(SummaryReport {
            region,
            spread: Spread::classify(summary.stats.std_dev, t),
            skew: SkewShape::classify_opt(summary.stats.skewness, t),
            outliers: OutlierPresence::classify(&summary.outliers),
            iqr_spread: IqrSpread::classify(summary.iqr(), t),
            summary,
        })
    }

    /// Per-platform totals of one region with shares, leader and laggard.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] if the dataset has no records.
    pub fn platform_breakdown(&self, region: Region) -> Result<PlatformBreakdown, InsightError> {
        let totals = self.dataset.totals_by(region, |r| &r.platform);
        let total = totals.values().sum::<f64>();
        let platforms = totals
            .into_iter()
            .map(|(platform, platform_total)| PlatformShare {
                platform,
                total: platform_total,
                share_percent: if total > 0.0 {
                    platform_total / total * 100.0
                } else {
                    0.0
                },
            })
            .collect::<Vec<_>>();

        let leading = platforms
            .iter()
            .reduce(|best, p| if p.total > best.total { p } else { best })
            .cloned()
            .ok_or(StatsError::EmptyInput)?;
        let lowest = platforms
            .iter()
            .reduce(|best, p| if p.total < best.total { p } else { best })
            .cloned()
            .ok_or(StatsError::EmptyInput)?;
        tracing::debug!(%region, platforms = platforms.len(), "computed platform breakdown");

        Ok(PlatformBreakdown {
            region,
            platforms,
            total,
            leading,
            lowest,
        })
    }

    /// Regional totals of every genre.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] if the dataset has no records.
    pub fn genre_breakdown(&self) -> Result<GenreBreakdown, InsightError> {
        let mut by_genre = BTreeMap::<&str, [f64; 4]>::new();
        for record in self.dataset.records() {
            let sums = by_genre.entry(record.genre.as_str()).or_default();
            for (sum, region) in sums.iter_mut().zip(Region::PARTS) {
                *sum += record.sales(region).unwrap_or(0.0);
            }
        }

        let genres = by_genre
            .into_iter()
            .map(|(genre, [na, eu, jp, other])| GenreTotals {
                genre: genre.to_owned(),
                na,
                eu,
                jp,
                other,
                total: na + eu + jp + other,
            })
            .collect::<Vec<_>>();
        let leading = genres
            .iter()
            .reduce(|best, g| if g.total > best.total { g } else { best })
            .cloned()
            .ok_or(StatsError::EmptyInput)?;
        tracing::debug!(genres = genres.len(), "computed genre breakdown");

        Ok(GenreBreakdown { genres, leading })
    }

    /// Box-plot figures for each of `regions`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] if `regions` is empty or any region
    /// has no values.
    pub fn region_comparison(&self, regions: &[Region]) -> Result<RegionComparison, InsightError> {
        if regions.is_empty() {
            return Err(StatsError::EmptyInput.into());
        }

        let regions = regions
            .iter()
            .map(|&region| -> Result<RegionBox, InsightError> {
                let series = self.dataset.series(region);
                let summary = compute_summary(&series.values)?;
                Ok(RegionBox {
                    region,
                    count: summary.stats.count,
                    min: summary.stats.min,
                    max: summary.stats.max,
                    median: summary.stats.median,
                    spread: IqrSpread::classify(summary.iqr(), self.thresholds),
                    outliers: summary.outliers,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(regions = regions.len(), "computed region comparison");

        Ok(RegionComparison { regions })
    }

    /// Histogram of one region with mean-versus-median shape.
    ///
    /// `num_bins` overrides the configured bin count.
    pub fn distribution(
        &self,
        region: Region,
        num_bins: Option<usize>,
    ) -> Result<DistributionReport, InsightError> {
        let num_bins = num_bins.unwrap_or(self.thresholds.histogram_bins);
        let series = self.dataset.series(region);
        let summary = compute_summary(&series.values)?;
        let histogram = Histogram::new(series.values.iter().copied(), num_bins)?;
        tracing::debug!(%region, bins = histogram.bins.len(), "computed distribution");

        let stats = summary.stats;
        Ok(DistributionReport {
            region,
            histogram,
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
            skewness: stats.skewness,
            shape: CentralTendencyShape::classify(stats.mean, stats.median),
            spread: Spread::classify(stats.std_dev, self.thresholds),
            skew: SkewShape::classify_opt(stats.skewness, self.thresholds),
        })
    }

    /// Correlation between two distinct regions over the rows where both
    /// are present.
    pub fn correlation(&self, x: Region, y: Region) -> Result<CorrelationReport, InsightError> {
        if x == y {
            return Err(InsightError::SameRegion { region: x });
        }
        let paired = self.dataset.paired_series(x, y);
        let result = compute_correlation(&paired.x.values, &paired.y.values, self.thresholds)?;
        tracing::debug!(%x, %y, r = result.r, pairs = result.pairs, "computed correlation");
        Ok(CorrelationReport { x, y, result })
    }

    pub fn trend(
        &self,
        region: Region,
        granularity: TrendGranularity,
    ) -> Result<TrendReport, InsightError> {
        let points = self.dataset.trend_points(region, granularity);
        let result = compute_trend(&points)?;
        tracing::debug!(%region, mean_diff = result.mean_diff, "computed trend");
        Ok(TrendReport {
            region,
            granularity,
            result,
        })
    }

    pub fn outliers(&self, region: Region) -> Result<OutlierSection, InsightError> {
        let series = self.dataset.series(region);
        let report = detect_outliers(&series.values)?;
        tracing::debug!(%region, outliers = report.count(), "detected outliers");
        Ok(OutlierSection {
            region,
            count: series.len(),
            presence: OutlierPresence::classify(&report),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
2,Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24
3,Mario Kart Wii,Wii,2008,Racing,Nintendo,15.85,12.88,3.79,3.31,35.82
4,Wii Sports Resort,Wii,2009,Sports,Nintendo,15.75,11.01,3.28,2.96,33
5,Pokemon Red/Pokemon Blue,GB,1996,Role-Playing,Nintendo,11.27,8.89,10.22,1,31.37
6,Tetris,GB,1989,Puzzle,Nintendo,23.2,2.26,4.22,0.58,30.26
7,Unknown Release,PS2,N/A,Misc,Unknown,,0.1,0.02,0.01,0.13
8,Late Port,PS2,2006,Action,Unknown,0.5,,0.01,0.02,0.53
";

    fn sample() -> Dataset {
        Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_compute_summary_reference_values() {
        let summary = compute_summary(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.stats.mean, 3.0);
        assert_eq!(summary.stats.median, 3.0);
        assert_eq!(summary.stats.variance, 2.5);
        assert!((summary.stats.std_dev - 1.5811).abs() < 1e-4);
        assert_eq!(summary.p25(), 2.0);
        assert_eq!(summary.p75(), 4.0);
        assert_eq!(summary.iqr(), 2.0);
        assert!(summary.outliers.values.is_empty());

        assert_eq!(compute_summary(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_compute_correlation_errors() {
        let t = InsightThresholds::default();
        assert_eq!(
            compute_correlation(&[1.0, 2.0], &[1.0], &t),
            Err(StatsError::LengthMismatch { left: 2, right: 1 })
        );
        assert_eq!(
            compute_correlation(&[], &[], &t),
            Err(StatsError::EmptyInput)
        );
        assert_eq!(
            compute_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0], &t),
            Err(StatsError::ConstantInput)
        );
    }

    #[test]
    fn test_compute_correlation_perfect() {
        let t = InsightThresholds::default();
        let result = compute_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &t).unwrap();
        assert_close(result.r, 1.0);
        assert_eq!(result.strength, CorrelationStrength::Strong);
        assert_eq!(result.pairs, 3);

        let result = compute_correlation(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0], &t).unwrap();
        assert_close(result.r, -1.0);
        assert_eq!(result.strength, CorrelationStrength::Negligible);
    }

    #[test]
    fn test_compute_trend() {
        let constant = [2000, 2001, 2002].map(|year| TrendPoint::new(year, 5.0));
        let trend = compute_trend(&constant).unwrap();
        assert_eq!(trend.mean_diff, 0.0);
        assert_eq!(trend.direction, TrendDirection::Stable);

        let single = compute_trend(&[TrendPoint::new(1999, 3.0)]).unwrap();
        assert_eq!(single.mean_diff, 0.0);
        assert_eq!(single.direction, TrendDirection::Stable);

        let falling = [TrendPoint::new(2000, 4.0), TrendPoint::new(2002, 1.0)];
        assert!(compute_trend(&falling).unwrap().direction.is_decreasing());

        assert_eq!(compute_trend(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_overview() {
        let dataset = sample();
        let thresholds = InsightThresholds::default();
        let overview = StatisticsEngine::new(&dataset, &thresholds).overview();
        assert_eq!(overview.records, 8);
        assert_eq!(overview.platforms, 4);
        assert_eq!(overview.genres, 7);
        assert_eq!(overview.publishers, 2);
        assert_eq!(overview.year_span, Some((1985, 2009)));
        assert_close(overview.global_total, 254.09);
    }

    #[test]
    fn test_summary_report_labels() {
        let dataset = sample();
        let thresholds = InsightThresholds::default();
        let report = StatisticsEngine::new(&dataset, &thresholds)
            .summary(Region::Global)
            .unwrap();
        assert_eq!(report.summary.stats.count, 8);
        assert_close(report.summary.p25(), 22.8275);
        assert_close(report.summary.p75(), 36.925);
        assert_eq!(report.summary.outliers.values, vec![0.13, 0.53, 82.74]);
        assert_eq!(report.spread, Spread::Wide);
        assert_eq!(report.outliers, OutlierPresence::Present(3));
        assert_eq!(report.iqr_spread, IqrSpread::Wide);
    }

    #[test]
    fn test_outlier_numbers_agree_across_sections() {
        let dataset = sample();
        let thresholds = InsightThresholds::default();
        let engine = StatisticsEngine::new(&dataset, &thresholds);
        for region in Region::ALL {
            let from_summary = engine.summary(region).unwrap().summary.outliers;
            let from_comparison = engine
                .region_comparison(&[region])
                .unwrap()
                .regions
                .remove(0)
                .outliers;
            let standalone = engine.outliers(region).unwrap().report;
            assert_eq!(from_summary, standalone, "{region}");
            assert_eq!(from_comparison, standalone, "{region}");
        }
    }

    #[test]
    fn test_platform_breakdown() {
        let dataset = sample();
        let thresholds = InsightThresholds::default();
        let breakdown = StatisticsEngine::new(&dataset, &thresholds)
            .platform_breakdown(Region::Global)
            .unwrap();
        let names = breakdown
            .platforms
            .iter()
            .map(|p| p.platform.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["GB", "NES", "PS2", "Wii"]);
        assert_eq!(breakdown.leading.platform, "Wii");
        assert_close(breakdown.leading.total, 151.56);
        assert_eq!(breakdown.lowest.platform, "PS2");
        let shares = breakdown
            .platforms
            .iter()
            .map(|p| p.share_percent)
            .sum::<f64>();
        assert_close(shares, 100.0);
    }

    #[test]
    fn test_genre_breakdown() {
        let dataset = sample();
        let thresholds = InsightThresholds::default();
        let breakdown = StatisticsEngine::new(&dataset, &thresholds)
            .genre_breakdown()
            .unwrap();
        assert_eq!(breakdown.genres.len(), 7);
        assert_eq!(breakdown.genres[0].genre, "Action");
        assert_eq!(breakdown.leading.genre, "Sports");
        assert_close(breakdown.leading.na, 57.24);
        assert_close(breakdown.leading.total, 115.74);
        // Null EU value counts as zero
        assert_close(breakdown.genres[0].eu, 0.0);
        for genre in &breakdown.genres {
            let parts = Region::PARTS.map(|region| genre.get(region)).iter().sum::<f64>();
            assert_close(parts, genre.get(Region::Global));
        }
    }

    #[test]
    fn test_empty_dataset_sections() {
        let dataset = Dataset::new(Vec::new()).unwrap();
        let thresholds = InsightThresholds::default();
        let engine = StatisticsEngine::new(&dataset, &thresholds);
        assert!(matches!(
            engine.summary(Region::Na),
            Err(InsightError::Stats(StatsError::EmptyInput))
        ));
        assert!(engine.platform_breakdown(Region::Na).is_err());
        assert!(engine.genre_breakdown().is_err());
        assert!(engine.region_comparison(&[]).is_err());
        assert_eq!(engine.overview().year_span, None);
    }

    #[test]
    fn test_distribution() {
        let dataset = sample();
        let thresholds = InsightThresholds::default();
        let engine = StatisticsEngine::new(&dataset, &thresholds);

        let report = engine.distribution(Region::Global, None).unwrap();
        assert_eq!(report.histogram.bins.len(), thresholds.histogram_bins);
        assert_eq!(report.histogram.total(), 8);
        assert_eq!(report.shape, CentralTendencyShape::NegativelySkewed);

        let report = engine.distribution(Region::Global, Some(4)).unwrap();
        assert_eq!(report.histogram.bins.len(), 4);
    }

    #[test]
    fn test_correlation_section() {
        let dataset = sample();
        let thresholds = InsightThresholds::default();
        let engine = StatisticsEngine::new(&dataset, &thresholds);

        let report = engine.correlation(Region::Na, Region::Eu).unwrap();
        assert_eq!(report.result.pairs, 6);
        assert!((-1.0..=1.0).contains(&report.result.r));

        assert!(matches!(
            engine.correlation(Region::Jp, Region::Jp),
            Err(InsightError::SameRegion { region: Region::Jp })
        ));
    }

    #[test]
    fn test_trend_section() {
        let dataset = sample();
        let thresholds = InsightThresholds::default();
        let engine = StatisticsEngine::new(&dataset, &thresholds);

        let per_year = engine
            .trend(Region::Global, TrendGranularity::PerYearTotal)
            .unwrap();
        assert_eq!(per_year.result.points.len(), 6);
        assert_close(per_year.result.mean_diff, (33.0 - 40.24) / 5.0);
        assert!(per_year.result.direction.is_decreasing());

        let per_record = engine
            .trend(Region::Global, TrendGranularity::PerRecord)
            .unwrap();
        assert_eq!(per_record.result.points.len(), 7);
        assert_close(per_record.result.mean_diff, (33.0 - 40.24) / 6.0);
    }
}
