use std::path::{Path, PathBuf};

use crate::data::filter::{filtered_indices, FilterError, FilterInputs};
use crate::data::loader;
use crate::data::model::{Record, TaxRates};
use crate::data::rating::{rate, Rated};
use crate::data::sort::{SortKey, SortState};

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
pub struct AppState {
    /// All records from the last successful load.
    pub records: Vec<Record>,

    /// Indices into `records` passing the current filters, in display order.
    pub visible_indices: Vec<usize>,

    /// Text of the ten filter boxes.
    pub filters: FilterInputs,

    pub sort: SortState,

    /// Fee model used for the net-profit hover text and rating panel.
    pub tax_rates: TaxRates,

    /// File the current records came from.
    pub source: Option<PathBuf>,

    /// Status / error message shown in the UI.
    pub status: Status,

    /// Case-insensitive title search over the rating list.
    pub rating_search: String,

    /// Record picked from the rating list, tinted in the table.
    pub highlighted: Option<usize>,

    /// Set when the table should scroll to `highlighted` on the next frame.
    pub scroll_pending: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            visible_indices: Vec::new(),
            filters: FilterInputs::default(),
            sort: SortState::default(),
            tax_rates: TaxRates::default(),
            source: None,
            status: Status::info("Ready. Open or drop a JSON export."),
            rating_search: String::new(),
            highlighted: None,
            scroll_pending: false,
        }
    }
}

impl AppState {
    pub fn has_data(&self) -> bool {
        !self.records.is_empty()
    }

    /// Records in display order.
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.visible_indices.iter().map(|&i| &self.records[i])
    }

    pub fn set_premium(&mut self, premium: bool) {
        self.tax_rates = TaxRates::new(premium);
    }

    pub fn is_premium(&self) -> bool {
        self.tax_rates == TaxRates::new(true)
    }

    /// Read a file and make it the active data set. On failure the
    /// previous records, view and filters are left untouched.
    pub fn load_file(&mut self, path: &Path) {
        let name = display_name(path);
        match loader::load_file(path) {
            Ok(records) => {
                log::info!("Loaded {} records from {}", records.len(), path.display());
                self.set_records(records, path.to_path_buf());
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status = Status::error(format!("Failed to load {name}: {e:#}"));
            }
        }
    }

    /// Replace the data set, then re-run the current filters and sort.
    pub fn set_records(&mut self, records: Vec<Record>, source: PathBuf) {
        let name = display_name(&source);
        self.records = records;
        self.source = Some(source);
        self.highlighted = None;
        self.scroll_pending = false;
        self.visible_indices = (0..self.records.len()).collect();

        let loaded = format!("Loaded {} records from {name}", self.records.len());
        self.status = match self.refilter() {
            Ok(()) => Status::info(format!(
                "{loaded}; showing {} of {}",
                self.visible_indices.len(),
                self.records.len()
            )),
            Err(e) => {
                self.resort();
                Status::error(format!("{loaded}; filters not applied: {e}"))
            }
        };
    }

    /// Parse the filter boxes and rebuild the view. A bad bound leaves the
    /// view as it was. No-op without data.
    pub fn apply_filters(&mut self) {
        if !self.has_data() {
            return;
        }
        match self.refilter() {
            Ok(()) => {
                self.status = Status::info(format!(
                    "Filtered: {} of {} records",
                    self.visible_indices.len(),
                    self.records.len()
                ));
            }
            Err(e) => {
                log::warn!("Filter not applied: {e}");
                self.status = Status::error(format!("Invalid filter: {e}"));
            }
        }
    }

    /// Clear all filter boxes and show every record in the current sort.
    pub fn reset_filters(&mut self) {
        self.filters.clear();
        if !self.has_data() {
            return;
        }
        self.visible_indices = (0..self.records.len()).collect();
        self.resort();
        self.status = Status::info(format!(
            "Filters reset. Showing {} records",
            self.visible_indices.len()
        ));
    }

    /// Header click. Out-of-range columns are ignored.
    pub fn select_sort_column(&mut self, column: usize) {
        let Some(key) = SortKey::from_column(column) else {
            log::debug!("Ignoring sort on unknown column {column}");
            return;
        };
        self.sort.select(key);
        self.resort();
        self.status = Status::info(format!(
            "Sorted by '{}' {}",
            key.label(),
            self.sort.direction_label()
        ));
    }

    /// Opportunity ranking over the visible rows.
    pub fn ratings(&self) -> Vec<Rated> {
        rate(&self.records, &self.visible_indices)
    }

    /// Ratings whose title contains the search text, each with its rank
    /// (1-based) in the unfiltered rating list.
    pub fn searched_ratings(&self) -> Vec<(usize, Rated)> {
        let needle = self.rating_search.trim().to_lowercase();
        self.ratings()
            .into_iter()
            .enumerate()
            .filter(|(_, r)| {
                needle.is_empty() || self.records[r.index].title.to_lowercase().contains(&needle)
            })
            .map(|(i, r)| (i + 1, r))
            .collect()
    }

    /// Mark a record for highlighting and ask the table to scroll to it.
    pub fn highlight_record(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.scroll_pending = true;
    }

    /// Display row of the highlighted record, if it is currently visible.
    pub fn highlighted_row(&self) -> Option<usize> {
        let target = self.highlighted?;
        self.visible_indices.iter().position(|&i| i == target)
    }

    /// Row to scroll to this frame. Clears the pending request.
    pub fn take_scroll_target(&mut self) -> Option<usize> {
        if !std::mem::take(&mut self.scroll_pending) {
            return None;
        }
        self.highlighted_row()
    }

    fn refilter(&mut self) -> Result<(), FilterError> {
        let bounds = self.filters.parse()?;
        if bounds.is_empty() {
            log::debug!("No filter bounds set");
        }
        self.visible_indices = filtered_indices(&self.records, &bounds);
        self.resort();
        Ok(())
    }

    fn resort(&mut self) {
        self.sort.apply(&self.records, &mut self.visible_indices);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
