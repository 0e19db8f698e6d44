//! The closed set of tracked operating systems.
//!
//! Everything keyed by category (selection flags, dataset values, colours,
//! card styling) indexes off [`CategoryId`] and [`CategoryMap`], so adding a
//! member here is the only change needed to track another system.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Windows,
    Linux,
    Macos,
}

/// Fill / stroke pair handed to the chart renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesColors {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl CategoryId {
    pub const COUNT: usize = 3;

    /// Canonical order. Series, legends and summary cards follow it.
    pub const ALL: [CategoryId; Self::COUNT] =
        [CategoryId::Windows, CategoryId::Linux, CategoryId::Macos];

    pub fn index(self) -> usize {
        match self {
            CategoryId::Windows => 0,
            CategoryId::Linux => 1,
            CategoryId::Macos => 2,
        }
    }

    /// Key used in the bundled dataset and in form values.
    pub fn key(self) -> &'static str {
        match self {
            CategoryId::Windows => "windows",
            CategoryId::Linux => "linux",
            CategoryId::Macos => "macos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryId::Windows => "Windows",
            CategoryId::Linux => "Linux",
            CategoryId::Macos => "macOS",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CategoryId::Windows => "💻",
            CategoryId::Linux => "🐧",
            CategoryId::Macos => "🍎",
        }
    }

    pub fn colors(self) -> SeriesColors {
        match self {
            CategoryId::Windows => SeriesColors {
                fill: "rgba(0, 120, 212, 0.2)",
                stroke: "rgba(0, 120, 212, 1)",
            },
            CategoryId::Linux => SeriesColors {
                fill: "rgba(255, 193, 7, 0.2)",
                stroke: "rgba(255, 193, 7, 1)",
            },
            CategoryId::Macos => SeriesColors {
                fill: "rgba(108, 117, 125, 0.2)",
                stroke: "rgba(108, 117, 125, 1)",
            },
        }
    }

    /// CSS modifier for per-category cards and swatches, e.g. `stats-card--linux`.
    pub fn css_modifier(self) -> &'static str {
        match self {
            CategoryId::Windows => "windows",
            CategoryId::Linux => "linux",
            CategoryId::Macos => "macos",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryId {
    type Err = DashboardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.key() == raw)
            .ok_or_else(|| DashboardError::InvalidCategory(raw.to_string()))
    }
}

/// Total mapping from every [`CategoryId`] to a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMap<T> {
    slots: [T; CategoryId::COUNT],
}

impl<T> CategoryMap<T> {
    pub fn from_fn(mut f: impl FnMut(CategoryId) -> T) -> Self {
        Self {
            slots: CategoryId::ALL.map(&mut f),
        }
    }

    /// Entries in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &T)> + '_ {
        CategoryId::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T: Copy> CategoryMap<T> {
    pub fn splat(value: T) -> Self {
        Self {
            slots: [value; CategoryId::COUNT],
        }
    }
}

impl<T> Index<CategoryId> for CategoryMap<T> {
    type Output = T;

    fn index(&self, id: CategoryId) -> &T {
        &self.slots[id.index()]
    }
}

impl<T> IndexMut<CategoryId> for CategoryMap<T> {
    fn index_mut(&mut self, id: CategoryId) -> &mut T {
        &mut self.slots[id.index()]
    }
}
