//! Shared UI crate for Sharescope. The dashboard state, derivations, chart
//! rendering and views live here; platform crates only launch them.

use dioxus::prelude::*;

pub mod chart;
pub mod components;
pub mod core;
pub mod i18n;
pub mod views;

/// Shared theme. Web links it as an asset; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
