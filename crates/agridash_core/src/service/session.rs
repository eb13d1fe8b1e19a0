//! Dashboard session service.
//!
//! # Responsibility
//! - Own all per-session mutable state: the builder tree store, the filter
//!   selection and the active ESG dataset.
//! - Expose one explicit handler per user interaction, each running a
//!   synchronous recompute and returning fresh immutable snapshots.
//!
//! # Invariants
//! - State is scoped to one session value; nothing survives dropping it.
//! - A failed upload reverts the active dataset to the built-in default.
//! - The fixed dataset is projected in `Remainder` mode, the user-built tree
//!   in `Total` mode.

use crate::chart::sunburst::{project_sunburst, BranchValues, ColorMap, SunburstChart};
use crate::dataset::esg;
use crate::filter::SubsetFilter;
use crate::ingest::{self, IngestError};
use crate::model::node::Node;
use crate::store::tree_store::{InMemoryTreeStore, TreeStore, TreeStoreError};
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Errors surfaced to the presentation layer by session handlers.
///
/// All of them are recovered at the triggering interaction; none are fatal
/// to the session and every failed handler leaves state unchanged.
#[derive(Debug)]
pub enum SessionError {
    /// Builder-tree mutation failure (validation or empty undo).
    Store(TreeStoreError),
    /// Upload ingestion failure (unsupported format or decode error).
    Ingest(IngestError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Ingest(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Ingest(err) => Some(err),
        }
    }
}

impl From<TreeStoreError> for SessionError {
    fn from(value: TreeStoreError) -> Self {
        Self::Store(value)
    }
}

impl From<IngestError> for SessionError {
    fn from(value: IngestError) -> Self {
        Self::Ingest(value)
    }
}

/// One line of the textual quick-insights summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsight {
    /// Selected category label.
    pub category: String,
    /// Sum of the category's direct children in the current view.
    pub total: f64,
    /// Narrative one-liner for built-in categories.
    pub note: Option<&'static str>,
}

/// Explicit session-state object behind every dashboard interaction.
///
/// The presentation layer constructs one per user session, routes each
/// event (filter change, form submit, button click, upload) to the matching
/// handler and re-renders from the returned snapshot. The core holds no
/// hidden reactive dependencies.
#[derive(Debug)]
pub struct DashboardSession {
    store: InMemoryTreeStore,
    selection: SubsetFilter,
    dataset: Vec<Node>,
    colors: ColorMap,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSession {
    /// Creates a session on the built-in ESG dataset with all categories
    /// selected, matching the initial multiselect state.
    pub fn new() -> Self {
        Self {
            store: InMemoryTreeStore::new(),
            selection: SubsetFilter::new(esg::CATEGORIES),
            dataset: esg::esg_hierarchy(),
            colors: esg::esg_colors(),
        }
    }

    /// Appends one node to the builder tree.
    ///
    /// # Errors
    /// - `Store(Invalid(..))` on blank label or negative value; the builder
    ///   tree is unchanged and the caller should show the inline message.
    pub fn add_node(
        &mut self,
        label: &str,
        parent: &str,
        value: f64,
    ) -> Result<Node, SessionError> {
        let node = self.store.append(label, parent, value).map_err(|err| {
            warn!("event=builder_append module=session status=error detail={err}");
            err
        })?;
        info!(
            "event=builder_append module=session status=ok label={} len={}",
            node.label,
            self.store.len()
        );
        Ok(node)
    }

    /// Removes and returns the most recently added builder node.
    ///
    /// # Errors
    /// - `Store(NothingToUndo)` on an empty builder tree; the caller should
    ///   report "nothing to undo".
    pub fn undo(&mut self) -> Result<Node, SessionError> {
        let node = self.store.remove_last().map_err(|err| {
            warn!("event=builder_undo module=session status=error detail={err}");
            err
        })?;
        info!(
            "event=builder_undo module=session status=ok label={} len={}",
            node.label,
            self.store.len()
        );
        Ok(node)
    }

    /// Clears the builder tree unconditionally.
    pub fn reset_builder(&mut self) {
        self.store.reset();
        info!("event=builder_reset module=session status=ok");
    }

    /// Replaces the category selection from current multiselect input.
    ///
    /// Unknown labels are tolerated; they simply match nothing.
    pub fn set_selection<I, S>(&mut self, selected: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = SubsetFilter::new(selected);
        info!(
            "event=selection_changed module=session status=ok count={}",
            self.selection.selected().len()
        );
    }

    /// Returns the selected category labels in sorted order.
    pub fn selection(&self) -> Vec<&str> {
        self.selection.selected()
    }

    /// Replaces the active ESG dataset from an uploaded file.
    ///
    /// Returns the number of loaded nodes. On any failure the active dataset
    /// reverts to the built-in fixed hierarchy, so rendering can still
    /// proceed from known-good data.
    ///
    /// # Errors
    /// - `Ingest(UnsupportedFormat)` on unrecognized extensions.
    /// - Other `Ingest` variants on decode failures.
    pub fn load_upload(&mut self, path: &Path) -> Result<usize, SessionError> {
        let nodes = match ingest::load_nodes(path) {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!("event=dataset_upload module=session status=error detail={err}");
                self.dataset = esg::esg_hierarchy();
                return Err(err.into());
            }
        };
        info!(
            "event=dataset_upload module=session status=ok nodes={}",
            nodes.len()
        );
        self.dataset = nodes;
        Ok(self.dataset.len())
    }

    /// Reverts the active dataset to the built-in ESG hierarchy.
    pub fn use_default_dataset(&mut self) {
        self.dataset = esg::esg_hierarchy();
        info!("event=dataset_default module=session status=ok");
    }

    /// Returns the active ESG dataset without filtering.
    pub fn dataset(&self) -> &[Node] {
        &self.dataset
    }

    /// Projects the filtered ESG dataset for the overview tab.
    pub fn esg_view(&self) -> SunburstChart {
        let visible = self.selection.apply(&self.dataset);
        project_sunburst(&visible, &self.colors, BranchValues::Remainder)
    }

    /// Projects the user-built tree for the builder tab.
    pub fn builder_view(&self) -> SunburstChart {
        let snapshot = self.store.snapshot();
        project_sunburst(&snapshot, &self.colors, BranchValues::Total)
    }

    /// Returns the builder tree rows for the tabular grid display.
    pub fn builder_rows(&self) -> Vec<Node> {
        self.store.snapshot()
    }

    /// Computes the per-category quick-insights summary for the current
    /// selection and view.
    pub fn quick_insights(&self) -> Vec<CategoryInsight> {
        let view = self.esg_view();
        self.selection
            .selected()
            .into_iter()
            .map(|category| CategoryInsight {
                category: category.to_string(),
                total: view.category_total(category),
                note: esg::category_note(category),
            })
            .collect()
    }
}
