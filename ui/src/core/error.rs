//! Error types for dataset loading and selection input.

use thiserror::Error;

use super::category::CategoryId;

/// Rejected user input. Dataset problems are reported separately as
/// [`DatasetError`].
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown category `{0}`")]
    InvalidCategory(String),
    #[error("unknown chart mode `{0}` (expected `line` or `bar`)")]
    InvalidMode(String),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset contains no records")]
    Empty,
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("year {year} does not follow {previous}")]
    NotIncreasing { previous: i32, year: i32 },
    #[error("years {previous}..{year} skip at least one year")]
    Gap { previous: i32, year: i32 },
    #[error("year {year} has no value for {category}")]
    MissingValue { year: i32, category: CategoryId },
    #[error("year {year} has a value for unknown category `{key}`")]
    UnknownCategory { year: i32, key: String },
    #[error("year {year}: {category} share {value} is outside 0..=100")]
    OutOfRange {
        year: i32,
        category: CategoryId,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_name_the_rejected_value() {
        let err = DashboardError::InvalidCategory("beos".into());
        assert_eq!(err.to_string(), "unknown category `beos`");
        let err = DashboardError::InvalidMode("pie".into());
        assert!(err.to_string().starts_with("unknown chart mode `pie`"));
    }

    #[test]
    fn dataset_errors_carry_year_and_category() {
        let err = DatasetError::OutOfRange {
            year: 2003,
            category: CategoryId::Linux,
            value: 120.0,
        };
        assert_eq!(err.to_string(), "year 2003: Linux share 120 is outside 0..=100");

        let err = DatasetError::MissingValue {
            year: 2001,
            category: CategoryId::Macos,
        };
        assert_eq!(err.to_string(), "year 2001 has no value for macOS");
    }
}
