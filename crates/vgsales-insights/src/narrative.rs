//! Rule-based prose for the section reports.
//!
//! The wording only depends on the labels and numbers already stored in a
//! report, so the same report always reads the same way.

use vgsales_data::dataset::TrendGranularity;

use crate::{
    classify::{
        CentralTendencyShape, CorrelationStrength, IqrSpread, OutlierPresence, SkewShape, Spread,
        TrendDirection,
    },
    report::{
        CorrelationReport, DistributionReport, GenreBreakdown, OutlierSection, OverviewReport,
        PlatformBreakdown, RegionComparison, SummaryReport, TrendReport,
    },
};

/// A report that can describe itself in prose.
pub trait Narrative {
    /// Heading of the section.
    fn title(&self) -> String;

    /// Explanatory paragraphs, in reading order.
    fn paragraphs(&self) -> Vec<String>;
}

fn counted(count: usize, singular: &str, plural: &str) -> String {
    match count {
        0 => format!("no {plural}"),
        1 => format!("1 {singular}"),
        n => format!("{n} {plural}"),
    }
}

impl Narrative for OverviewReport {
    fn title(&self) -> String {
        "Dataset Overview".to_owned()
    }

    fn paragraphs(&self) -> Vec<String> {
        let mut paragraphs = vec![format!(
            "The dataset lists {} games across {} platforms, {} genres and {} publishers, \
             with {:.2} million units sold worldwide.",
            self.records, self.platforms, self.genres, self.publishers, self.global_total
        )];
        match self.year_span {
            Some((first, last)) => paragraphs.push(format!(
                "Release years range from {first} to {last}."
            )),
            None => paragraphs.push("No record carries a release year.".to_owned()),
        }
        paragraphs
    }
}

impl Narrative for SummaryReport {
    fn title(&self) -> String {
        format!("{} Statistics", self.region)
    }

    fn paragraphs(&self) -> Vec<String> {
        let region = self.region;
        let stats = &self.summary.stats;

        let spread = match self.spread {
            Spread::Wide => format!(
                "Sales in {region} are widely spread, with a standard deviation of {:.2} \
                 million units, so titles perform very differently from one another.",
                stats.std_dev
            ),
            Spread::Consistent => format!(
                "Sales in {region} are fairly consistent, with a standard deviation of {:.2} \
                 million units and little variation between titles.",
                stats.std_dev
            ),
        };

        let skewness = stats.skewness.unwrap_or(0.0);
        let skew = match self.skew {
            SkewShape::PositiveSkew => format!(
                "The distribution is positively skewed (skewness {skewness:.2}): most titles \
                 sell little while a few sell far more."
            ),
            SkewShape::NegativeSkew => format!(
                "The distribution is negatively skewed (skewness {skewness:.2}): most titles \
                 sell well while a few lag far behind."
            ),
            SkewShape::Symmetric => {
                "The distribution is roughly symmetric, with a skewness close to zero.".to_owned()
            }
        };

        let outliers = match self.outliers {
            OutlierPresence::Present(count) => format!(
                "{} outside the Tukey fences, selling far above or below the typical range.",
                counted(count, "title falls", "titles fall")
            ),
            OutlierPresence::None => format!(
                "No title in {region} falls outside the Tukey fences; every figure sits \
                 within the expected range."
            ),
        };

        let iqr = format!(
            "The interquartile range is {:.2} million units: the middle half of all titles \
             sold between {:.2} and {:.2} million units.",
            self.summary.iqr(),
            self.summary.p25(),
            self.summary.p75()
        );

        vec![spread, skew, outliers, iqr]
    }
}

impl Narrative for PlatformBreakdown {
    fn title(&self) -> String {
        format!("{} by Platform", self.region)
    }

    fn paragraphs(&self) -> Vec<String> {
        vec![
            format!(
                "{} leads {} with {:.2} million units, {:.1}% of the regional total.",
                self.leading.platform, self.region, self.leading.total, self.leading.share_percent
            ),
            format!(
                "{} trails with {:.2} million units ({:.1}%).",
                self.lowest.platform, self.lowest.total, self.lowest.share_percent
            ),
        ]
    }
}

impl Narrative for GenreBreakdown {
    fn title(&self) -> String {
        "Sales by Genre".to_owned()
    }

    fn paragraphs(&self) -> Vec<String> {
        let leading = &self.leading;
        vec![format!(
            "{} is the best-selling genre with {:.2} million units: {:.2} in North America, \
             {:.2} in Europe, {:.2} in Japan and {:.2} elsewhere.",
            leading.genre, leading.total, leading.na, leading.eu, leading.jp, leading.other
        )]
    }
}

impl Narrative for RegionComparison {
    fn title(&self) -> String {
        "Regional Box Plot".to_owned()
    }

    fn paragraphs(&self) -> Vec<String> {
        self.regions
            .iter()
            .map(|b| {
                let spread = match b.spread {
                    IqrSpread::Wide => "a wide middle range",
                    IqrSpread::Narrow => "a narrow middle range",
                };
                let outliers = counted(b.outliers.count(), "outlier", "outliers");
                format!(
                    "{}: median {:.2}, IQR {:.2} ({spread}), range {:.2} to {:.2}, {outliers}.",
                    b.region, b.median, b.outliers.iqr, b.min, b.max
                )
            })
            .collect()
    }
}

impl Narrative for DistributionReport {
    fn title(&self) -> String {
        format!("{} Distribution", self.region)
    }

    fn paragraphs(&self) -> Vec<String> {
        let shape = match self.shape {
            CentralTendencyShape::PositivelySkewed => format!(
                "The mean ({:.2}) is above the median ({:.2}): a handful of blockbusters pull \
                 the average up.",
                self.mean, self.median
            ),
            CentralTendencyShape::NegativelySkewed => format!(
                "The mean ({:.2}) is below the median ({:.2}): a handful of weak sellers pull \
                 the average down.",
                self.mean, self.median
            ),
            CentralTendencyShape::Symmetric => format!(
                "The mean and the median are both {:.2}, so the distribution is balanced.",
                self.mean
            ),
        };
        let spread = match self.spread {
            Spread::Wide => format!(
                "The spread is high (standard deviation {:.2}).",
                self.std_dev
            ),
            Spread::Consistent => format!(
                "The spread is low (standard deviation {:.2}).",
                self.std_dev
            ),
        };
        let skew = match (self.skew, self.skewness) {
            (SkewShape::PositiveSkew, Some(s)) => {
                format!("Skewness is {s:.2}, a long tail towards high sales.")
            }
            (SkewShape::NegativeSkew, Some(s)) => {
                format!("Skewness is {s:.2}, a long tail towards low sales.")
            }
            (_, Some(s)) => format!("Skewness is {s:.2}, no noticeable tail."),
            (_, None) => "Too few values to measure skewness.".to_owned(),
        };
        vec![shape, spread, skew]
    }
}

impl Narrative for CorrelationReport {
    fn title(&self) -> String {
        format!("{} vs {}", self.x, self.y)
    }

    fn paragraphs(&self) -> Vec<String> {
        let (x, y, r) = (self.x, self.y, self.result.r);
        let verdict = match self.result.strength {
            CorrelationStrength::Strong => format!(
                "There is a strong relationship between {x} and {y} (r = {r:.2}): titles that \
                 sell well in one region tend to sell well in the other."
            ),
            CorrelationStrength::Moderate => format!(
                "There is a moderate relationship between {x} and {y} (r = {r:.2}): success \
                 in one region partly carries over to the other."
            ),
            CorrelationStrength::Weak => format!(
                "There is a weak relationship between {x} and {y} (r = {r:.2}): the regions \
                 only loosely follow each other."
            ),
            CorrelationStrength::Negligible => format!(
                "There is little or no relationship between {x} and {y} (r = {r:.2}): sales \
                 in one region say almost nothing about the other."
            ),
        };
        vec![
            verdict,
            format!(
                "Computed over {} titles with figures in both regions.",
                self.result.pairs
            ),
        ]
    }
}

impl Narrative for TrendReport {
    fn title(&self) -> String {
        format!("{} Over Time", self.region)
    }

    fn paragraphs(&self) -> Vec<String> {
        let unit = match self.granularity {
            TrendGranularity::PerYearTotal => "per year",
            TrendGranularity::PerRecord => "between consecutive titles",
        };
        let change = self.result.mean_diff;
        let verdict = match self.result.direction {
            TrendDirection::Increasing => format!(
                "{} are rising, by {change:.3} million units {unit} on average.",
                self.region
            ),
            TrendDirection::Decreasing => format!(
                "{} are falling, by {:.3} million units {unit} on average.",
                self.region,
                change.abs()
            ),
            TrendDirection::Stable => {
                format!("{} show no overall change over time.", self.region)
            }
        };
        let points = &self.result.points;
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => vec![
                verdict,
                format!(
                    "The series covers {} to {} in {} points.",
                    first.year,
                    last.year,
                    points.len()
                ),
            ],
            _ => vec![verdict],
        }
    }
}

impl Narrative for OutlierSection {
    fn title(&self) -> String {
        format!("{} Outliers", self.region)
    }

    fn paragraphs(&self) -> Vec<String> {
        let report = &self.report;
        let fences = format!(
            "Values outside [{:.2}, {:.2}] (1.5 × IQR beyond the quartiles) count as outliers.",
            report.lower_fence, report.upper_fence
        );
        let mut paragraphs = vec![fences];
        match self.presence {
            OutlierPresence::Present(count) => {
                paragraphs.push(format!(
                    "{count} of {} titles are outliers: {} above the upper fence and {} below \
                     the lower fence.",
                    self.count,
                    report.high_count(),
                    report.low_count()
                ));
                // `values` is ascending, so the last one is the top seller when any sit high.
                if let Some(top) = report.values.last().filter(|&&v| v > report.upper_fence) {
                    paragraphs.push(format!(
                        "The top seller among them sold {top:.2} million units."
                    ));
                }
            }
            OutlierPresence::None => {
                paragraphs.push(format!("None of the {} titles are outliers.", self.count));
            }
        }
        paragraphs
    }
}

#[cfg(test)]
mod tests {
    use vgsales_data::region::Region;
    use vgsales_stats::{
        histogram::Histogram, outliers::OutlierReport, summary::SummaryStatistics,
        trend::TrendPoint,
    };

    use super::*;
    use crate::{
        engine::{CorrelationResult, TrendResult},
        report::{GenreTotals, PlatformShare, RegionBox},
        thresholds::InsightThresholds,
    };

    fn summary_report(values: &[f64]) -> SummaryReport {
        let summary = SummaryStatistics::new(values.iter().copied()).unwrap();
        let t = InsightThresholds::default();
        SummaryReport {
            region: Region::Eu,
            spread: Spread::classify(summary.stats.std_dev, &t),
            skew: SkewShape::classify_opt(summary.stats.skewness, &t),
            outliers: OutlierPresence::classify(&summary.outliers),
            iqr_spread: IqrSpread::classify(summary.iqr(), &t),
            summary,
        }
    }

    #[test]
    fn test_summary_paragraphs() {
        let report = summary_report(&[0.1, 0.2, 0.2, 0.3, 0.4, 9.0]);
        assert_eq!(report.title(), "EU Sales Statistics");
        let paragraphs = report.paragraphs();
        assert_eq!(paragraphs.len(), 4);
        assert!(paragraphs[0].contains("widely spread"));
        assert!(paragraphs[1].contains("positively skewed"));
        assert!(paragraphs[2].starts_with("1 title falls"));

        let report = summary_report(&[1.0, 1.0, 1.0]);
        let paragraphs = report.paragraphs();
        assert!(paragraphs[0].contains("fairly consistent"));
        assert!(paragraphs[1].contains("roughly symmetric"));
        assert!(paragraphs[2].starts_with("No title in EU Sales"));
    }

    #[test]
    fn test_correlation_wording_follows_strength() {
        let report = CorrelationReport {
            x: Region::Na,
            y: Region::Jp,
            result: CorrelationResult {
                r: -0.9,
                strength: CorrelationStrength::Negligible,
                pairs: 12,
            },
        };
        assert_eq!(report.title(), "NA Sales vs JP Sales");
        let paragraphs = report.paragraphs();
        assert!(paragraphs[0].contains("little or no relationship"));
        assert!(paragraphs[0].contains("r = -0.90"));
        assert!(paragraphs[1].contains("12 titles"));
    }

    fn outlier_section(values: &[f64]) -> OutlierSection {
        let report = OutlierReport::new(values.iter().copied()).unwrap();
        OutlierSection {
            region: Region::Global,
            count: values.len(),
            presence: OutlierPresence::classify(&report),
            report,
        }
    }

    #[test]
    fn test_outlier_section_paragraphs() {
        let paragraphs = outlier_section(&[1.0, 2.0, 3.0, 4.0, 100.0]).paragraphs();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(
            paragraphs[1],
            "1 of 5 titles are outliers: 1 above the upper fence and 0 below the lower fence."
        );
        assert!(paragraphs[2].contains("100.00"));

        let paragraphs = outlier_section(&[1.0, 2.0, 3.0, 4.0, 5.0]).paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1], "None of the 5 titles are outliers.");
    }

    #[test]
    fn test_low_outliers_are_not_called_top_sellers() {
        let section = outlier_section(&[0.0, 10.0, 10.0, 10.0, 10.0, 10.0]);
        let paragraphs = section.paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[1].contains("0 above the upper fence and 1 below the lower fence"));
        assert!(paragraphs.iter().all(|p| !p.contains("top seller")));
    }

    #[test]
    fn test_trend_wording() {
        let cases = [
            (
                TrendDirection::Increasing,
                TrendGranularity::PerYearTotal,
                0.5,
                "Global Sales are rising, by 0.500 million units per year on average.",
            ),
            (
                TrendDirection::Decreasing,
                TrendGranularity::PerRecord,
                -1.25,
                "Global Sales are falling, by 1.250 million units between consecutive titles \
                 on average.",
            ),
            (
                TrendDirection::Stable,
                TrendGranularity::PerYearTotal,
                0.0,
                "Global Sales show no overall change over time.",
            ),
        ];
        for (direction, granularity, mean_diff, expected) in cases {
            let report = TrendReport {
                region: Region::Global,
                granularity,
                result: TrendResult {
                    mean_diff,
                    direction,
                    points: vec![TrendPoint::new(2000, 1.0), TrendPoint::new(2003, 2.0)],
                },
            };
            assert_eq!(report.title(), "Global Sales Over Time");
            let paragraphs = report.paragraphs();
            assert_eq!(paragraphs[0], expected, "{direction:?}");
            assert_eq!(paragraphs[1], "The series covers 2000 to 2003 in 2 points.");
        }

        let report = TrendReport {
            region: Region::Jp,
            granularity: TrendGranularity::PerRecord,
            result: TrendResult {
                mean_diff: 0.0,
                direction: TrendDirection::Stable,
                points: vec![],
            },
        };
        assert_eq!(report.paragraphs().len(), 1);
    }

    fn distribution_report(
        shape: CentralTendencyShape,
        spread: Spread,
        skew: SkewShape,
        skewness: Option<f64>,
    ) -> DistributionReport {
        DistributionReport {
            region: Region::Other,
            histogram: Histogram::new([1.0, 2.0, 3.0], 3).unwrap(),
            mean: 2.0,
            median: 1.5,
            std_dev: 1.25,
            skewness,
            shape,
            spread,
            skew,
        }
    }

    #[test]
    fn test_distribution_wording() {
        let cases = [
            (
                distribution_report(
                    CentralTendencyShape::PositivelySkewed,
                    Spread::Wide,
                    SkewShape::PositiveSkew,
                    Some(1.2),
                ),
                ["is above the median", "The spread is high", "long tail towards high sales"],
            ),
            (
                distribution_report(
                    CentralTendencyShape::NegativelySkewed,
                    Spread::Consistent,
                    SkewShape::NegativeSkew,
                    Some(-0.8),
                ),
                ["is below the median", "The spread is low", "long tail towards low sales"],
            ),
            (
                distribution_report(
                    CentralTendencyShape::Symmetric,
                    Spread::Consistent,
                    SkewShape::Symmetric,
                    Some(0.0),
                ),
                ["are both 2.00", "standard deviation 1.25", "no noticeable tail"],
            ),
            (
                distribution_report(
                    CentralTendencyShape::Symmetric,
                    Spread::Wide,
                    SkewShape::Symmetric,
                    None,
                ),
                [
                    "balanced",
                    "The spread is high",
                    "Too few values to measure skewness.",
                ],
            ),
        ];
        for (report, expected) in cases {
            assert_eq!(report.title(), "Other Sales Distribution");
            let paragraphs = report.paragraphs();
            assert_eq!(paragraphs.len(), 3);
            for (paragraph, needle) in paragraphs.iter().zip(expected) {
                assert!(paragraph.contains(needle), "{paragraph:?} lacks {needle:?}");
            }
        }
    }

    #[test]
    fn test_platform_breakdown_wording() {
        let share = |platform: &str, total: f64, share_percent: f64| PlatformShare {
            platform: platform.to_owned(),
            total,
            share_percent,
        };
        let report = PlatformBreakdown {
            region: Region::Na,
            platforms: vec![share("PS2", 25.0, 20.0), share("Wii", 100.0, 80.0)],
            total: 125.0,
            leading: share("Wii", 100.0, 80.0),
            lowest: share("PS2", 25.0, 20.0),
        };
        assert_eq!(report.title(), "NA Sales by Platform");
        assert_eq!(
            report.paragraphs(),
            [
                "Wii leads NA Sales with 100.00 million units, 80.0% of the regional total.",
                "PS2 trails with 25.00 million units (20.0%).",
            ]
        );
    }

    #[test]
    fn test_genre_breakdown_wording() {
        let sports = GenreTotals {
            genre: "Sports".to_owned(),
            na: 57.24,
            eu: 43.87,
            jp: 3.79,
            other: 10.84,
            total: 115.74,
        };
        let report = GenreBreakdown {
            genres: vec![sports.clone()],
            leading: sports,
        };
        assert_eq!(report.title(), "Sales by Genre");
        let paragraphs = report.paragraphs();
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].starts_with("Sports is the best-selling genre with 115.74"));
        assert!(paragraphs[0].contains("57.24 in North America"));
        assert!(paragraphs[0].contains("10.84 elsewhere"));
    }

    #[test]
    fn test_region_comparison_wording() {
        let region_box = |region, values: &[f64], spread| {
            let outliers = OutlierReport::new(values.iter().copied()).unwrap();
            RegionBox {
                region,
                count: values.len(),
                min: values.iter().copied().fold(f64::INFINITY, f64::min),
                max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                median: 0.0,
                outliers,
                spread,
            }
        };
        let report = RegionComparison {
            regions: vec![
                region_box(
                    Region::Na,
                    &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 50.0, 60.0],
                    IqrSpread::Wide,
                ),
                region_box(Region::Eu, &[0.0, 10.0, 10.0, 10.0, 10.0, 10.0], IqrSpread::Narrow),
                region_box(Region::Jp, &[1.0, 1.0, 1.0], IqrSpread::Narrow),
            ],
        };
        assert_eq!(report.title(), "Regional Box Plot");
        let paragraphs = report.paragraphs();
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs[0].starts_with("NA Sales:"));
        assert!(paragraphs[0].contains("(a wide middle range)"));
        assert!(paragraphs[0].ends_with("2 outliers."));
        assert!(paragraphs[1].contains("(a narrow middle range)"));
        assert!(paragraphs[1].ends_with("1 outlier."));
        assert!(paragraphs[2].ends_with("no outliers."));
    }

    #[test]
    fn test_overview_year_span() {
        let mut report = OverviewReport {
            records: 8,
            platforms: 4,
            genres: 3,
            publishers: 2,
            year_span: Some((1985, 2016)),
            global_total: 254.09,
        };
        assert_eq!(report.title(), "Dataset Overview");
        let paragraphs = report.paragraphs();
        assert!(paragraphs[0].starts_with("The dataset lists 8 games across 4 platforms"));
        assert!(paragraphs[0].contains("254.09 million units"));
        assert_eq!(paragraphs[1], "Release years range from 1985 to 2016.");

        report.year_span = None;
        assert_eq!(report.paragraphs()[1], "No record carries a release year.");
    }
}
