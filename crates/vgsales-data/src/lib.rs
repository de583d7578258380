//! Video game sales dataset model
//!
//! This crate turns the sales CSV into an immutable [`dataset::Dataset`] and
//! projects it into the numeric series consumed by `vgsales-stats`.
//!
//! # Data Structure
//!
//! ```text
//! Dataset
//! └─ records: Vec<SalesRecord>
//!     ├─ name (optional), platform, genre, publisher
//!     ├─ year (nullable)
//!     └─ sales: NA / EU / JP / Other / Global (nullable, millions of units)
//! ```
//!
//! # Null Handling
//!
//! Empty cells and `N/A` load as `None`. Every projection drops nulls:
//!
//! - [`Dataset::series`](dataset::Dataset::series) drops rows whose region
//!   value is null
//! - [`Dataset::paired_series`](dataset::Dataset::paired_series) drops a row
//!   when *either* region is null, keeping both series index-aligned
//! - [`Dataset::trend_points`](dataset::Dataset::trend_points) drops rows with
//!   a null year or a null value
//!
//! # Examples
//!
//! ```
//! use vgsales_data::{dataset::Dataset, region::Region};
//!
//! let csv = "\
//! Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
//! Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
//! Tetris,GB,1989,Puzzle,Nintendo,23.2,2.26,4.22,0.58,30.26
//! Mystery Title,DS,N/A,Misc,Unknown,,0.1,0.02,0.01,0.13
//! ";
//! let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
//!
//! assert_eq!(dataset.len(), 3);
//! assert_eq!(dataset.series(Region::Na).len(), 2);
//! assert_eq!(dataset.series(Region::Global).len(), 3);
//! ```

use std::{io, path::PathBuf};

pub mod dataset;
pub mod record;
pub mod region;

/// Errors raised while loading or validating the dataset.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("required column '{column}' is missing from the dataset")]
    MissingColumn { column: String },
    #[display("invalid value '{value}' in column '{column}' at data row {row}")]
    InvalidValue {
        /// 1-based position among the data rows, header excluded.
        row: usize,
        column: String,
        value: String,
    },
    #[display("failed to read CSV data")]
    Csv { source: csv::Error },
    #[display("failed to open dataset file {}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
