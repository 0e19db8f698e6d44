//! User-controlled selection: which categories are plotted and how.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::{CategoryId, CategoryMap};
use super::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    #[default]
    Line,
    Bar,
}

impl ChartMode {
    pub const ALL: [ChartMode; 2] = [ChartMode::Line, ChartMode::Bar];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartMode::Line => "line",
            ChartMode::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartMode {
    type Err = DashboardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "line" => Ok(ChartMode::Line),
            "bar" => Ok(ChartMode::Bar),
            other => Err(DashboardError::InvalidMode(other.to_string())),
        }
    }
}

/// Every category starts enabled and the chart starts as a line chart.
/// Disabling everything is allowed; callers render an empty state for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    enabled: CategoryMap<bool>,
    mode: ChartMode,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            enabled: CategoryMap::splat(true),
            mode: ChartMode::Line,
        }
    }
}

impl SelectionState {
    pub fn new(enabled: CategoryMap<bool>, mode: ChartMode) -> Self {
        Self { enabled, mode }
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        self.enabled[id] = !self.enabled[id];
    }

    /// String-keyed toggle for form values; unknown keys leave the state untouched.
    pub fn toggle_by_key(&mut self, key: &str) -> Result<(), DashboardError> {
        let id = key.parse::<CategoryId>()?;
        self.toggle_category(id);
        Ok(())
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        self.mode = mode;
    }

    pub fn has_any_selected(&self) -> bool {
        self.enabled.iter().any(|(_, &on)| on)
    }

    pub fn is_enabled(&self, id: CategoryId) -> bool {
        self.enabled[id]
    }

    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn enabled(&self) -> &CategoryMap<bool> {
        &self.enabled
    }

    /// Enabled categories in canonical order.
    pub fn enabled_categories(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.enabled
            .iter()
            .filter(|(_, on)| **on)
            .map(|(id, _)| id)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled_categories().count()
    }
}
