//! The immutable sales dataset and its projections into numeric series.

use std::{collections::BTreeMap, fs::File, io, path::Path};

use serde::{Deserialize, Serialize};
use vgsales_stats::trend::TrendPoint;

use crate::{
    DatasetError,
    record::{REQUIRED_COLUMNS, RawSalesRecord, SalesRecord},
    region::Region,
};

/// Sales values of one region, nulls dropped, in dataset order.
///
/// All values are finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSeries {
    pub region: Region,
    pub values: Vec<f64>,
}

impl SalesSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Two regions projected over the same rows.
///
/// `x[i]` and `y[i]` always come from the same record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedSeries {
    pub x: SalesSeries,
    pub y: SalesSeries,
}

/// How records are turned into a year-ordered series for trend analysis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendGranularity {
    /// One point per year holding the summed sales of that year.
    #[default]
    PerYearTotal,
    /// One point per record, ordered by year and then by dataset order.
    PerRecord,
}

/// An immutable, validated collection of [`SalesRecord`]s.
///
/// Built once and then passed by reference to every computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    /// Wraps already parsed records, validating their sales figures.
    pub fn new(records: Vec<SalesRecord>) -> Result<Self, DatasetError> {
        for (index, record) in records.iter().enumerate() {
            record.validate(index + 1)?;
        }
        Ok(Self { records })
    }

    /// Loads the dataset from a CSV file.
    pub fn from_path<P>(path: P) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_owned(),
            source,
        })?;
        let dataset = Self::from_reader(io::BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "loaded sales dataset"
        );
        Ok(dataset)
    }

    /// Loads the dataset from CSV text with a header row.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::MissingColumn`] if a required column is absent
    /// - [`DatasetError::InvalidValue`] if a cell cannot be parsed or a sales
    ///   figure is negative
    /// - [`DatasetError::Csv`] for malformed CSV
    pub fn from_reader<R>(reader: R) -> Result<Self, DatasetError>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|source| DatasetError::Csv { source })?
            .clone();
        if let Some(column) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|header| header == **column))
        {
            return Err(DatasetError::MissingColumn {
                column: (*column).to_owned(),
            });
        }

        let records = reader
            .deserialize::<RawSalesRecord>()
            .enumerate()
            .map(|(index, raw)| {
                raw.map_err(|source| DatasetError::Csv { source })?
                    .parse(index + 1)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let missing_years = records.iter().filter(|r| r.year.is_none()).count();
        if missing_years > 0 {
            tracing::warn!(missing_years, "records without a release year");
        }

        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Projects one region, dropping null values.
    #[must_use]
    pub fn series(&self, region: Region) -> SalesSeries {
        let values = self
            .records
            .iter()
            .filter_map(|record| record.sales(region))
            .collect::<Vec<_>>();
        tracing::debug!(%region, values = values.len(), "projected series");
        SalesSeries { region, values }
    }

    /// Projects two regions over the rows where both are present.
    ///
    /// ```
    /// use vgsales_data::{dataset::Dataset, region::Region};
    ///
    /// let csv = "\
    /// Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
    /// Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
    /// DS,2005,Racing,Nintendo,,12.88,3.79,3.31,35.82
    /// GB,1989,Puzzle,Nintendo,23.2,,4.22,0.58,30.26
    /// ";
    /// let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
    /// let paired = dataset.paired_series(Region::Na, Region::Eu);
    /// assert_eq!(paired.x.values, vec![41.49]);
    /// assert_eq!(paired.y.values, vec![29.02]);
    /// ```
    #[must_use]
    pub fn paired_series(&self, x: Region, y: Region) -> PairedSeries {
        let (xs, ys) = self
            .records
            .iter()
            .filter_map(|record| Some((record.sales(x)?, record.sales(y)?)))
            .unzip::<_, _, Vec<_>, Vec<_>>();
        tracing::debug!(%x, %y, pairs = xs.len(), "projected paired series");
        PairedSeries {
            x: SalesSeries {
                region: x,
                values: xs,
            },
            y: SalesSeries {
                region: y,
                values: ys,
            },
        }
    }

    /// Projects one region into a year-ordered series.
    ///
    /// Rows with a null year or a null value are dropped.
    #[must_use]
    pub fn trend_points(&self, region: Region, granularity: TrendGranularity) -> Vec<TrendPoint> {
        let rows = self
            .records
            .iter()
            .filter_map(|record| Some((record.year?, record.sales(region)?)));

        let points = match granularity {
            TrendGranularity::PerYearTotal => {
                let mut totals = BTreeMap::<i32, f64>::new();
                for (year, value) in rows {
                    *totals.entry(year).or_insert(0.0) += value;
                }
                totals
                    .into_iter()
                    .map(|(year, value)| TrendPoint::new(year, value))
                    .collect::<Vec<_>>()
            }
            TrendGranularity::PerRecord => {
                let mut points = rows
                    .map(|(year, value)| TrendPoint::new(year, value))
                    .collect::<Vec<_>>();
                // Stable: records of the same year keep dataset order
                points.sort_by_key(|p| p.year);
                points
            }
        };
        tracing::debug!(%region, ?granularity, points = points.len(), "projected trend points");
        points
    }

    /// Sums one region's sales per group key; null values are skipped.
    ///
    /// Groups are returned sorted by key. A group whose values are all null
    /// still appears, with a total of zero.
    #[must_use]
    pub fn totals_by<F>(&self, region: Region, key: F) -> BTreeMap<String, f64>
    where
        F: Fn(&SalesRecord) -> &str,
    {
        let mut totals = BTreeMap::<String, f64>::new();
        for record in &self.records {
            let total = totals.entry(key(record).to_owned()).or_insert(0.0);
            *total += record.sales(region).unwrap_or(0.0);
        }
        totals
    }

    /// Earliest and latest release year, ignoring null years.
    #[must_use]
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let years = self.records.iter().filter_map(|r| r.year);
        let min = years.clone().min()?;
        let max = years.max()?;
        Some((min, max))
    }

    /// Number of distinct values of a text attribute.
    #[must_use]
    pub fn distinct_count<F>(&self, key: F) -> usize
    where
        F: Fn(&SalesRecord) -> &str,
    {
        let mut keys = self.records.iter().map(key).collect::<Vec<_>>();
        keys.sort_unstable();
        keys.dedup();
        keys.len()
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

    #[test]
    fn test_load_sample() {
        let dataset = sample();
        assert_eq!(dataset.len(), 8);
        assert_eq!(dataset.records()[0].name.as_deref(), Some("Wii Sports"));
        assert_eq!(dataset.records()[6].year, None);
        assert_eq!(dataset.records()[3].global_sales, Some(33.0));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Platform,Genre,Publisher,Year,NA_Sales,EU_Sales,JP_Sales,Other_Sales\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn { ref column } if column == "Global_Sales"
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = "Platform,Genre,Publisher,Year,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales\n";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.series(Region::Global).is_empty());
    }

    #[test]
    fn test_new_rejects_negative_sales() {
        let mut record = sample().records()[0].clone();
        record.jp_sales = Some(-1.0);
        assert!(matches!(
            Dataset::new(vec![record]),
            Err(DatasetError::InvalidValue { row: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_value_reports_one_based_row() {
        let csv = "\
Platform,Genre,Publisher,Year,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
Wii,Sports,Nintendo,2006,41.49,29.02,3.77,8.46,82.74
NES,Platform,Nintendo,1985,29.08,-3.58,6.81,0.77,40.24
";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidValue { row: 2, ref column, .. } if column == "EU_Sales"
        ));
        assert_eq!(
            err.to_string(),
            "invalid value '-3.58' in column 'EU_Sales' at data row 2"
        );
    }

    #[test]
    fn test_series_drops_nulls() {
        let dataset = sample();
        assert_eq!(dataset.series(Region::Na).len(), 7);
        assert_eq!(dataset.series(Region::Eu).len(), 7);
        assert_eq!(dataset.series(Region::Global).len(), 8);
    }

    #[test]
    fn test_paired_series_drops_jointly() {
        let paired = sample().paired_series(Region::Na, Region::Eu);
        assert_eq!(paired.x.len(), 6);
        assert_eq!(paired.x.len(), paired.y.len());
        assert_eq!(paired.x.values[5], 23.2);
        assert_eq!(paired.y.values[5], 2.26);
    }

    #[test]
    fn test_trend_points_per_year_total() {
        let points = sample().trend_points(Region::Global, TrendGranularity::PerYearTotal);
        let years = points.iter().map(|p| p.year).collect::<Vec<_>>();
        assert_eq!(years, vec![1985, 1989, 1996, 2006, 2008, 2009]);
        let total_2006 = points.iter().find(|p| p.year == 2006).unwrap().value;
        assert!((total_2006 - (82.74 + 0.53)).abs() < 1e-9);
    }

    #[test]
    fn test_trend_points_per_record() {
        let points = sample().trend_points(Region::Global, TrendGranularity::PerRecord);
        assert_eq!(points.len(), 7);
        let in_2006 = points
            .iter()
            .filter(|p| p.year == 2006)
            .map(|p| p.value)
            .collect::<Vec<_>>();
        assert_eq!(in_2006, vec![82.74, 0.53]);
        assert!(points.is_sorted_by_key(|p| p.year));
    }

    #[test]
    fn test_totals_by_platform() {
        let totals = sample().totals_by(Region::Eu, |r| &r.platform);
        assert_eq!(
            totals.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["GB", "NES", "PS2", "Wii"]
        );
        assert!((totals["Wii"] - (29.02 + 12.88 + 11.01)).abs() < 1e-9);
        assert!((totals["PS2"] - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_year_span_and_distinct() {
        let dataset = sample();
        assert_eq!(dataset.year_span(), Some((1985, 2009)));
        assert_eq!(dataset.distinct_count(|r| &r.publisher), 2);
        assert_eq!(dataset.distinct_count(|r| &r.genre), 7);
    }
}
