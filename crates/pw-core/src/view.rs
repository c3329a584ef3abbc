//! The dashboard view model.
//!
//! [`ViewState`] owns everything the dashboard shows: the loaded records,
//! the filter inputs, the load status and the selection. Both the TUI and
//! the `list` command drive it; neither touches records directly.

use std::fmt;

use tracing::{debug, info, warn};

use crate::filter::{filter_indices, reference_date, FilterCriteria, TimeRange};
use crate::selection::Selection;
use crate::types::{CampaignId, CampaignRecord, Category};

/// What the body of the dashboard should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// The initial load is still running.
    Loading,
    /// The load failed.
    Failed,
    /// Loaded, but nothing passes the filter.
    Empty,
    /// Loaded with at least one visible record.
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadStatus {
    Pending,
    Loaded,
    Failed(String),
}

/// State of one dashboard.
///
/// Starts loading. Exactly one load outcome is accepted through
/// [`complete_load`](Self::complete_load); later outcomes are ignored.
///
/// # Examples
///
/// ```
/// use pw_core::{ViewPhase, ViewState};
///
/// let mut view = ViewState::new();
/// assert!(view.is_loading());
/// assert_eq!(view.phase(), ViewPhase::Loading);
///
/// assert!(view.complete_load::<String>(Err("timeout".to_owned())));
/// assert!(!view.is_loading());
/// assert_eq!(view.load_error(), Some("timeout"));
/// assert!(view.records().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ViewState {
    records: Vec<CampaignRecord>,
    criteria: FilterCriteria,
    status: LoadStatus,
    selection: Selection,
    visible: Vec<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates a view in the loading state with no records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            status: LoadStatus::Pending,
            selection: Selection::None,
            visible: Vec::new(),
        }
    }

    /// Applies a load outcome.
    ///
    /// Returns `false` and changes nothing if an outcome was already applied.
    pub fn complete_load<E: fmt::Display>(&mut self, outcome: Result<Vec<CampaignRecord>, E>) -> bool {
        if self.status != LoadStatus::Pending {
            debug!("Ignoring load outcome for a view that is no longer loading");
            return false;
        }

        match outcome {
            Ok(records) => {
                info!(count = records.len(), "Campaigns loaded");
                self.criteria.as_of = reference_date(&records);
                self.records = records;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                warn!(error = %err, "Campaign load failed");
                self.records.clear();
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
        self.refilter();
        true
    }

    /// Returns `true` until a load outcome is applied.
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Pending
    }

    /// Returns the load failure message, if the load failed.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Returns what the body should show.
    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        match self.status {
            LoadStatus::Pending => ViewPhase::Loading,
            LoadStatus::Failed(_) => ViewPhase::Failed,
            LoadStatus::Loaded if self.visible.is_empty() => ViewPhase::Empty,
            LoadStatus::Loaded => ViewPhase::Ready,
        }
    }

    /// All loaded records, in source order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[CampaignRecord] {
        &self.records
    }

    /// Current filter inputs.
    #[inline]
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Positions in [`records`](Self::records) that pass the filter.
    #[inline]
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Number of records that pass the filter.
    #[inline]
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Records that pass the filter, in source order.
    pub fn visible_records(&self) -> impl Iterator<Item = &CampaignRecord> {
        self.visible.iter().filter_map(|&i| self.records.get(i))
    }

    /// The `n`th visible record.
    #[must_use]
    pub fn visible_record(&self, n: usize) -> Option<&CampaignRecord> {
        self.visible.get(n).and_then(|&i| self.records.get(i))
    }

    /// Sets the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.criteria.search {
            self.criteria.search = term;
            self.refilter();
        }
    }

    /// Sets the category filter.
    pub fn set_category(&mut self, category: Option<Category>) {
        if category != self.criteria.category {
            self.criteria.category = category;
            self.refilter();
        }
    }

    /// Advances the category selector and returns the new value.
    pub fn cycle_category(&mut self) -> Option<Category> {
        let next = Category::cycle(self.criteria.category);
        self.set_category(next);
        next
    }

    /// Sets the time range filter.
    pub fn set_range(&mut self, range: TimeRange) {
        if range != self.criteria.range {
            self.criteria.range = range;
            self.refilter();
        }
    }

    /// Advances the time-range selector and returns the new value.
    pub fn cycle_range(&mut self) -> TimeRange {
        let next = self.criteria.range.next();
        self.set_range(next);
        next
    }

    /// Resets search, category and range.
    pub fn clear_filters(&mut self) {
        if self.criteria.is_active() {
            self.criteria.clear();
            self.refilter();
        }
    }

    /// Current selection.
    #[inline]
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Selects a campaign, or deselects it if it is already selected.
    ///
    /// Ids not present in the loaded records are ignored.
    pub fn toggle_selection(&mut self, id: CampaignId) {
        if self.records.iter().any(|r| r.id == id) {
            self.selection.toggle(id);
            debug!(selected = ?self.selection.id(), "Selection changed");
        }
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The selected record, whether or not the filter currently shows it.
    #[must_use]
    pub fn selected_record(&self) -> Option<&CampaignRecord> {
        let id = self.selection.id()?;
        self.records.iter().find(|r| r.id == id)
    }

    fn refilter(&mut self) {
        self.visible = filter_indices(&self.records, &self.criteria);
    }
}
