//! One row of the sales dataset and its CSV parsing rules.

use serde::{Deserialize, Serialize};

use crate::{DatasetError, region::Region};

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Platform",
    "Genre",
    "Publisher",
    "Year",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
    "Global_Sales",
];

/// Cell contents treated as a missing value.
const NULL_MARKERS: [&str; 4] = ["", "N/A", "NA", "NaN"];

/// A single game title with its sales per region.
///
/// Sales are in millions of units and never negative. Any figure, and the
/// release year, may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub name: Option<String>,
    pub platform: String,
    pub genre: String,
    pub publisher: String,
    pub year: Option<i32>,
    pub na_sales: Option<f64>,
    pub eu_sales: Option<f64>,
    pub jp_sales: Option<f64>,
    pub other_sales: Option<f64>,
    pub global_sales: Option<f64>,
}

impl SalesRecord {
    /// Sales figure for `region`, if present.
    #[must_use]
    pub fn sales(&self, region: Region) -> Option<f64> {
        match region {
            Region::Global => self.global_sales,
            Region::Na => self.na_sales,
            Region::Eu => self.eu_sales,
            Region::Jp => self.jp_sales,
            Region::Other => self.other_sales,
        }
    }

    /// Checks that every present sales figure is finite and non-negative.
    ///
    /// `row` is the 1-based data row, only used to label the error.
    pub fn validate(&self, row: usize) -> Result<(), DatasetError> {
        let invalid = Region::ALL.into_iter().find_map(|region| {
            self.sales(region)
                .filter(|value| !(value.is_finite() && *value >= 0.0))
                .map(|value| (region, value))
        });
        match invalid {
            Some((region, value)) => Err(DatasetError::InvalidValue {
                row,
                column: region.column().to_owned(),
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// A CSV row before null and number parsing.
///
/// Every cell is kept as text so that `N/A` markers and `2006.0`-style years
/// can be handled explicitly.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSalesRecord {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Platform")]
    platform: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Publisher")]
    publisher: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "NA_Sales")]
    na_sales: String,
    #[serde(rename = "EU_Sales")]
    eu_sales: String,
    #[serde(rename = "JP_Sales")]
    jp_sales: String,
    #[serde(rename = "Other_Sales")]
    other_sales: String,
    #[serde(rename = "Global_Sales")]
    global_sales: String,
}

impl RawSalesRecord {
    /// Parses the textual cells into a validated [`SalesRecord`].
    pub(crate) fn parse(self, row: usize) -> Result<SalesRecord, DatasetError> {
        let sales = |column: &str, cell: &str| parse_sales(row, column, cell);
        let record = SalesRecord {
            name: self.name.filter(|name| !name.trim().is_empty()),
            platform: self.platform.trim().to_owned(),
            genre: self.genre.trim().to_owned(),
            publisher: self.publisher.trim().to_owned(),
            year: parse_year(row, &self.year)?,
            na_sales: sales("NA_Sales", &self.na_sales)?,
            eu_sales: sales("EU_Sales", &self.eu_sales)?,
            jp_sales: sales("JP_Sales", &self.jp_sales)?,
            other_sales: sales("Other_Sales", &self.other_sales)?,
            global_sales: sales("Global_Sales", &self.global_sales)?,
        };
        record.validate(row)?;
        Ok(record)
    }
}

fn is_null(cell: &str) -> bool {
    NULL_MARKERS
        .iter()
        .any(|marker| cell.eq_ignore_ascii_case(marker))
}

fn invalid(row: usize, column: &str, cell: &str) -> DatasetError {
    DatasetError::InvalidValue {
        row,
        column: column.to_owned(),
        value: cell.to_owned(),
    }
}

/// Parses a year written either as an integer or as a whole float (`2006.0`).
#[expect(clippy::cast_possible_truncation)]
fn parse_year(row: usize, cell: &str) -> Result<Option<i32>, DatasetError> {
    let cell = cell.trim();
    if is_null(cell) {
        return Ok(None);
    }
    if let Ok(year) = cell.parse::<i32>() {
        return Ok(Some(year));
    }
    let year_range = f64::from(i32::MIN)..=f64::from(i32::MAX);
    match cell.parse::<f64>() {
        Ok(year) if year.fract() == 0.0 && year_range.contains(&year) => Ok(Some(year as i32)),
        _ => Err(invalid(row, "Year", cell)),
    }
}

fn parse_sales(row: usize, column: &str, cell: &str) -> Result<Option<f64>, DatasetError> {
    let cell = cell.trim();
    if is_null(cell) {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| invalid(row, column, cell))
}
