//! Sales insights: statistics, qualitative labels and narrative text
//!
//! This crate combines the numeric kernels of `vgsales-stats` with the
//! [`Dataset`](vgsales_data::dataset::Dataset) of `vgsales-data` and turns
//! the results into labelled, serializable section reports.
//!
//! # Overview
//!
//! 1. **Project** a region of the dataset into a numeric series
//! 2. **Compute** statistics ([`engine::compute_summary`], [`engine::compute_correlation`],
//!    [`engine::compute_trend`], [`engine::detect_outliers`])
//! 3. **Classify** the numbers with tunable thresholds ([`classify`], [`thresholds`])
//! 4. **Report** each dashboard section as a [`report`] value with
//!    [`narrative`] paragraphs
//!
//! [`engine::StatisticsEngine`] ties these steps together for a loaded dataset.
//!
//! # Examples
//!
//! ```
//! use vgsales_data::{dataset::Dataset, region::Region};
//! use vgsales_insights::{
//!     classify::Spread, engine::StatisticsEngine, narrative::Narrative,
//!     thresholds::InsightThresholds,
//! };
//!
//! let csv = "\
//! Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
//! Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
//! NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24
//! Wii,2008,Racing,Nintendo,15.85,12.88,3.79,3.31,35.82
//! ";
//! let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
//! let thresholds = InsightThresholds::default();
//! let engine = StatisticsEngine::new(&dataset, &thresholds);
//!
//! let report = engine.summary(Region::Global).unwrap();
//! assert_eq!(report.spread, Spread::Wide);
//! assert!(!report.paragraphs().is_empty());
//! ```

use vgsales_data::{DatasetError, region::Region};
use vgsales_stats::StatsError;

pub mod classify;
pub mod engine;
pub mod narrative;
pub mod report;
pub mod thresholds;

/// Errors raised while building a section report.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InsightError {
    #[display("{_0}")]
    Stats(StatsError),
    #[display("{_0}")]
    Dataset(DatasetError),
    #[display("cannot correlate {region} with itself")]
    SameRegion { region: Region },
}

impl From<StatsError> for InsightError {
    fn from(err: StatsError) -> Self {
        Self::Stats(err)
    }
}

impl From<DatasetError> for InsightError {
    fn from(err: DatasetError) -> Self {
        Self::Dataset(err)
    }
}
