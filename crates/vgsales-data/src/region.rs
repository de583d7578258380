use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A sales region of the dataset.
///
/// Each region maps a user-facing name ("NA Sales") to the CSV column that
/// holds its figures ("NA_Sales").
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[display("Global Sales")]
    Global,
    #[display("NA Sales")]
    Na,
    #[display("EU Sales")]
    Eu,
    #[display("JP Sales")]
    Jp,
    #[display("Other Sales")]
    Other,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Self; 5] = [Self::Global, Self::Na, Self::Eu, Self::Jp, Self::Other];

    /// The four disjoint regions whose figures add up to the global figure.
    pub const PARTS: [Self; 4] = [Self::Na, Self::Eu, Self::Jp, Self::Other];

    /// Name of the CSV column holding this region's sales.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Global => "Global_Sales",
            Self::Na => "NA_Sales",
            Self::Eu => "EU_Sales",
            Self::Jp => "JP_Sales",
            Self::Other => "Other_Sales",
        }
    }

    /// Short identifier used on the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Na => "na",
            Self::Eu => "eu",
            Self::Jp => "jp",
            Self::Other => "other",
        }
    }

    /// Looks up a region by display name, column name or short id.
    ///
    /// Matching ignores ASCII case.
    ///
    /// ```
    /// use vgsales_data::region::Region;
    ///
    /// assert_eq!(Region::lookup("NA Sales"), Some(Region::Na));
    /// assert_eq!(Region::lookup("jp_sales"), Some(Region::Jp));
    /// assert_eq!(Region::lookup("other"), Some(Region::Other));
    /// assert_eq!(Region::lookup("Mars"), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|region| {
            name.eq_ignore_ascii_case(region.id())
                || name.eq_ignore_ascii_case(region.column())
                || name.eq_ignore_ascii_case(&region.to_string())
        })
    }
}

/// Error returned when a region name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown region '{name}' (expected one of: global, na, eu, jp, other)")]
pub struct ParseRegionError {
    name: String,
}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParseRegionError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_column_mapping() {
        let pairs = Region::ALL.map(|r| (r.to_string(), r.column()));
        assert_eq!(
            pairs,
            [
                ("Global Sales".to_owned(), "Global_Sales"),
                ("NA Sales".to_owned(), "NA_Sales"),
                ("EU Sales".to_owned(), "EU_Sales"),
                ("JP Sales".to_owned(), "JP_Sales"),
                ("Other Sales".to_owned(), "Other_Sales"),
            ]
        );
    }

    #[test]
    fn test_parses_every_name_form() {
        for region in Region::ALL {
            assert_eq!(region.id().parse::<Region>(), Ok(region));
            assert_eq!(region.column().parse::<Region>(), Ok(region));
            assert_eq!(region.to_string().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn test_unknown_region() {
        let err = "Antarctica".parse::<Region>().unwrap_err();
        assert!(err.to_string().contains("Antarctica"));
    }
}
