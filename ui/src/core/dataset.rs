//! Yearly market-share table bundled with the application.
//!
//! The table ships as JSON (`data/os_share.json`), one object per year with a
//! numeric field per category key. It is validated once, on first access, and
//! is read-only for the rest of the process.

use std::collections::BTreeMap;

use dioxus::logger::tracing::info;
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::category::{CategoryId, CategoryMap};
use super::error::DatasetError;

const OS_SHARE_JSON: &str = include_str!("../../data/os_share.json");

static BUNDLED: Lazy<Dataset> = Lazy::new(|| {
    let dataset = Dataset::from_json(OS_SHARE_JSON).expect("bundled dataset is well-formed");
    let (first, last) = dataset.span();
    info!(records = dataset.len(), first, last, "bundled dataset loaded");
    dataset
});

/// Process-wide bundled dataset.
pub fn bundled() -> &'static Dataset {
    &BUNDLED
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyRecord {
    pub year: i32,
    pub values: CategoryMap<f64>,
}

impl YearlyRecord {
    pub fn new(year: i32, values: CategoryMap<f64>) -> Self {
        Self { year, values }
    }

    pub fn value(&self, category: CategoryId) -> f64 {
        self.values[category]
    }
}

/// Wire shape of one row. Category fields are collected loosely and checked
/// against the closed category set afterwards.
#[derive(Debug, Deserialize)]
struct RawRecord {
    year: i32,
    #[serde(flatten)]
    values: BTreeMap<String, f64>,
}

/// Non-empty sequence of yearly records in strictly ascending year order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<YearlyRecord>,
}

impl Dataset {
    pub fn new(records: Vec<YearlyRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        for pair in records.windows(2) {
            let (previous, year) = (pair[0].year, pair[1].year);
            if year <= previous {
                return Err(DatasetError::NotIncreasing { previous, year });
            }
        }

        for record in &records {
            for (category, &value) in record.values.iter() {
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    return Err(DatasetError::OutOfRange {
                        year: record.year,
                        category,
                        value,
                    });
                }
            }
        }

        Ok(Self { records })
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let rows: Vec<RawRecord> = serde_json::from_str(raw)?;
        let records = rows
            .into_iter()
            .map(RawRecord::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        let dataset = Self::new(records)?;
        dataset.ensure_contiguous()?;
        Ok(dataset)
    }

    /// Tables loaded from JSON must cover every year between the first and
    /// the last one.
    fn ensure_contiguous(&self) -> Result<(), DatasetError> {
        for pair in self.records.windows(2) {
            let (previous, year) = (pair[0].year, pair[1].year);
            if year != previous + 1 {
                return Err(DatasetError::Gap { previous, year });
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &[YearlyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> &YearlyRecord {
        &self.records[0]
    }

    pub fn last(&self) -> &YearlyRecord {
        &self.records[self.records.len() - 1]
    }

    /// `(first_year, last_year)`.
    pub fn span(&self) -> (i32, i32) {
        (self.first().year, self.last().year)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().map(|record| record.year)
    }
}

impl RawRecord {
    fn into_record(mut self) -> Result<YearlyRecord, DatasetError> {
        let year = self.year;
        let mut values = CategoryMap::splat(0.0);
        for category in CategoryId::ALL {
            values[category] = self
                .values
                .remove(category.key())
                .ok_or(DatasetError::MissingValue { year, category })?;
        }

        if let Some(key) = self.values.into_keys().next() {
            return Err(DatasetError::UnknownCategory { year, key });
        }

        Ok(YearlyRecord { year, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, windows: f64, linux: f64, macos: f64) -> YearlyRecord {
        YearlyRecord::new(
            year,
            CategoryMap::from_fn(|id| match id {
                CategoryId::Windows => windows,
                CategoryId::Linux => linux,
                CategoryId::Macos => macos,
            }),
        )
    }

    #[test]
    fn bundled_table_covers_2001_to_2025() {
        let dataset = bundled();
        assert_eq!(dataset.span(), (2001, 2025));
        assert_eq!(dataset.len(), 25);
        assert_eq!(dataset.first().value(CategoryId::Windows), 90.0);
        assert_eq!(dataset.last().value(CategoryId::Linux), 26.0);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(Dataset::new(Vec::new()), Err(DatasetError::Empty)));
        assert!(matches!(Dataset::from_json("[]"), Err(DatasetError::Empty)));
    }

    #[test]
    fn years_must_strictly_increase() {
        let err = Dataset::new(vec![record(2002, 1.0, 1.0, 1.0), record(2002, 1.0, 1.0, 1.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::NotIncreasing {
                previous: 2002,
                year: 2002
            }
        ));
    }

    #[test]
    fn sparse_years_are_allowed_in_memory_but_not_in_json() {
        let sparse = Dataset::new(vec![record(2001, 1.0, 1.0, 1.0), record(2024, 1.0, 1.0, 1.0)])
            .unwrap();
        assert_eq!(sparse.span(), (2001, 2024));

        let raw = r#"[
            { "year": 2001, "windows": 90.0, "linux": 5.0, "macos": 5.0 },
            { "year": 2003, "windows": 88.0, "linux": 6.0, "macos": 6.0 }
        ]"#;
        let err = Dataset::from_json(raw).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Gap {
                previous: 2001,
                year: 2003
            }
        ));
    }

    #[test]
    fn shares_outside_percentage_range_are_rejected() {
        let err = Dataset::new(vec![record(2001, 101.0, 0.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::OutOfRange {
                category: CategoryId::Windows,
                ..
            }
        ));
    }

    #[test]
    fn json_rows_need_every_category() {
        let err = Dataset::from_json(r#"[{ "year": 2001, "windows": 90.0, "linux": 5.0 }]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingValue {
                year: 2001,
                category: CategoryId::Macos
            }
        ));
    }

    #[test]
    fn json_rows_reject_unknown_categories() {
        let raw = r#"[{ "year": 2001, "windows": 80.0, "linux": 5.0, "macos": 5.0, "bsd": 10.0 }]"#;
        let err = Dataset::from_json(raw).unwrap_err();
        assert!(matches!(err, DatasetError::UnknownCategory { ref key, .. } if key == "bsd"));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        assert!(matches!(
            Dataset::from_json("{ not json"),
            Err(DatasetError::Parse(_))
        ));
    }
}
