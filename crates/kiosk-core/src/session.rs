//! Per-session state: the user's selections and the active view.
//!
//! The session is an explicit state structure passed into each operation,
//! never ambient global state. One logical actor owns it, so every mutation
//! takes `&mut self` and finishes before the next interaction begins.

use std::collections::HashSet;

use crate::catalog::{Catalog, ProductRecord};
use crate::error::{KioskError, Result};

/// The three views of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Browse, search, and select products.
    #[default]
    Browse,
    /// The products selected so far.
    Selected,
    /// Recommendations drawn from the unselected remainder.
    Picks,
}

/// Outcome of a toggle: whether the id was added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
}

/// Mutable per-session state.
///
/// Holds the selection set, the active view, and the last search query so
/// the browse view can be re-rendered from scratch on every interaction.
/// Discarded when the session ends; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    selected: HashSet<String>,
    view: View,
    query: String,
}

impl SessionState {
    /// Creates a fresh session: nothing selected, browse view, empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles membership of `id` in the selection set.
    ///
    /// Adding an id that is selected removes it, and vice versa, so toggle
    /// is its own inverse.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::UnknownProduct`] when the id is not in the
    /// catalog; the selection set never holds a dangling id.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> Result<ToggleOutcome> {
        if !catalog.contains(id) {
            return Err(KioskError::unknown_product(id));
        }

        if self.selected.remove(id) {
            Ok(ToggleOutcome::Deselected)
        } else {
            self.selected.insert(id.to_string());
            Ok(ToggleOutcome::Selected)
        }
    }

    /// Whether this id is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected products.
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// Selected records, in catalog order.
    pub fn selected_records<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProductRecord> {
        catalog
            .iter()
            .filter(|record| self.is_selected(&record.id))
            .collect()
    }

    /// The active view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Switches the active view.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// The last search query entered in the browse view.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the browse-view search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_records(
            ["1", "2", "3"]
                .into_iter()
                .map(|id| ProductRecord {
                    id: id.to_string(),
                    title: format!("Product {id}"),
                    image_url: String::new(),
                })
                .collect(),
        )
        .expect("Should build catalog")
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let catalog = catalog();
        let mut session = SessionState::new();

        let outcome = session.toggle(&catalog, "1").expect("Should toggle");
        assert_eq!(outcome, ToggleOutcome::Selected);
        assert!(session.is_selected("1"));

        let outcome = session.toggle(&catalog, "1").expect("Should toggle");
        assert_eq!(outcome, ToggleOutcome::Deselected);
        assert!(!session.is_selected("1"));
        assert_eq!(session.selection_len(), 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_rejected() {
        let catalog = catalog();
        let mut session = SessionState::new();

        let err = session
            .toggle(&catalog, "99")
            .expect_err("Unknown id should fail");
        assert!(err.is_unknown_product());
        assert_eq!(session.selection_len(), 0);
    }

    #[test]
    fn test_selected_records_follow_catalog_order() {
        let catalog = catalog();
        let mut session = SessionState::new();

        // Select out of catalog order.
        session.toggle(&catalog, "3").expect("Should toggle");
        session.toggle(&catalog, "1").expect("Should toggle");

        let ids: Vec<_> = session
            .selected_records(&catalog)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_fresh_session_defaults() {
        let session = SessionState::new();
        assert_eq!(session.view(), View::Browse);
        assert_eq!(session.selection_len(), 0);
        assert!(session.query().is_empty());
    }
}
