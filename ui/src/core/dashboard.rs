//! Root composition: owns the selection, applies user actions, and derives
//! the frame to present.
//!
//! Every action follows the same explicit sequence: mutate the selection,
//! then recompute series and summary from scratch. Nothing derived is cached.

use dioxus::logger::tracing::debug;

use crate::chart::{AxisConfig, ChartSpec};

use super::category::CategoryId;
use super::dataset::Dataset;
use super::selection::{ChartMode, SelectionState};
use super::series::build_series;
use super::summary::{compute_summary, SummaryEntry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardAction {
    Toggle(CategoryId),
    SetMode(ChartMode),
}

/// What the view should show for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Nothing selected: placeholder only, no summary, no chart.
    Empty,
    Populated {
        summary: Vec<SummaryEntry>,
        chart: ChartSpec,
    },
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        matches!(self, Frame::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    selection: SelectionState,
    axis: AxisConfig,
}

impl<'a> Dashboard<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_selection(dataset, SelectionState::default())
    }

    pub fn with_selection(dataset: &'a Dataset, selection: SelectionState) -> Self {
        Self {
            dataset,
            selection,
            axis: AxisConfig::default(),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Apply one user action and return the recomputed frame.
    pub fn dispatch(&mut self, action: DashboardAction) -> Frame {
        match action {
            DashboardAction::Toggle(id) => self.selection.toggle_category(id),
            DashboardAction::SetMode(mode) => self.selection.set_mode(mode),
        }
        debug!(
            ?action,
            enabled = self.selection.enabled_count(),
            mode = %self.selection.mode(),
            "selection updated"
        );
        self.frame()
    }

    /// Derive the frame for the current selection.
    pub fn frame(&self) -> Frame {
        if !self.selection.has_any_selected() {
            return Frame::Empty;
        }

        let series = build_series(self.dataset, &self.selection);
        let summary = compute_summary(self.dataset, &self.selection);
        let chart = ChartSpec::new(
            self.dataset,
            &series,
            self.selection.mode(),
            self.axis.clone(),
        );

        Frame::Populated { summary, chart }
    }
}
