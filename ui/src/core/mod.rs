//! Platform-agnostic dashboard state and derivations.

pub mod category;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod format;
pub mod selection;
pub mod series;
pub mod summary;

pub use category::{CategoryId, CategoryMap};
pub use dashboard::{Dashboard, DashboardAction, Frame};
pub use dataset::{Dataset, YearlyRecord};
pub use error::{DashboardError, DatasetError};
pub use selection::{ChartMode, SelectionState};
pub use series::{build_series, CategorySeries, SeriesPoint};
pub use summary::{compute_summary, SummaryEntry, Trend};
