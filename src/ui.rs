// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared UI state for cross-component coordination.
//!
//! The interactive TUI and the MCP server exchange the selected product and the shopper position
//! through this value, wrapped in `Arc<tokio::sync::Mutex<_>>`. Every change bumps `rev`, so the
//! other side can cheaply tell whether anything moved since it last looked.

use serde::Serialize;

use crate::model::{ProductId, Waypoint, DEFAULT_USER_LOCATION};

/// Most recently selected products kept for the "recently viewed" list.
pub const MAX_RECENTLY_VIEWED: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    Human,
    Agent,
}

impl SelectionSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Agent => "agent",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    rev: u64,
    selection_rev: u64,
    selected_product_id: Option<ProductId>,
    selection_source: SelectionSource,
    recently_viewed: Vec<ProductId>,
    user_location: Waypoint,
    follow_agent: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            rev: 0,
            selection_rev: 0,
            selected_product_id: None,
            selection_source: SelectionSource::Human,
            recently_viewed: Vec::new(),
            user_location: DEFAULT_USER_LOCATION,
            follow_agent: true,
        }
    }
}

impl UiState {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// Revision of the selection alone; position updates do not bump it.
    pub fn selection_rev(&self) -> u64 {
        self.selection_rev
    }

    pub fn selected_product_id(&self) -> Option<&ProductId> {
        self.selected_product_id.as_ref()
    }

    pub fn selection_source(&self) -> SelectionSource {
        self.selection_source
    }

    /// Most recent first, without duplicates.
    pub fn recently_viewed(&self) -> &[ProductId] {
        &self.recently_viewed
    }

    pub fn user_location(&self) -> Waypoint {
        self.user_location
    }

    pub fn follow_agent(&self) -> bool {
        self.follow_agent
    }

    pub fn set_selection(&mut self, source: SelectionSource, product_id: Option<ProductId>) {
        if self.selected_product_id == product_id && self.selection_source == source {
            return;
        }

        // Agent picks the TUI does not follow were never on screen.
        let shown = source == SelectionSource::Human || self.follow_agent;
        if let Some(id) = product_id.as_ref().filter(|_| shown) {
            self.recently_viewed.retain(|seen| seen != id);
            self.recently_viewed.insert(0, id.clone());
            self.recently_viewed.truncate(MAX_RECENTLY_VIEWED);
        }

        self.selected_product_id = product_id;
        self.selection_source = source;
        self.selection_rev = self.selection_rev.wrapping_add(1);
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn set_user_location(&mut self, location: Waypoint) {
        if self.user_location == location {
            return;
        }
        self.user_location = location;
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn set_follow_agent(&mut self, follow_agent: bool) {
        if self.follow_agent == follow_agent {
            return;
        }
        self.follow_agent = follow_agent;
        self.rev = self.rev.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionSource, UiState};
    use crate::model::{ProductId, Waypoint};

    fn pid(value: &str) -> ProductId {
        ProductId::new(value).expect("product id")
    }

    #[test]
    fn recently_viewed_keeps_three_distinct_most_recent_first() {
        let mut state = UiState::default();
        for id in ["P001", "P002", "P001", "P003", "P004"] {
            state.set_selection(SelectionSource::Human, Some(pid(id)));
        }
        let recent = state
            .recently_viewed()
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(recent, ["P004", "P003", "P001"]);
    }

    #[test]
    fn clearing_selection_keeps_history() {
        let mut state = UiState::default();
        state.set_selection(SelectionSource::Agent, Some(pid("P007")));
        state.set_selection(SelectionSource::Human, None);
        assert!(state.selected_product_id().is_none());
        assert_eq!(state.recently_viewed().len(), 1);
    }

    #[test]
    fn unfollowed_agent_selections_stay_out_of_history() {
        let mut state = UiState::default();
        state.set_selection(SelectionSource::Human, Some(pid("P001")));
        state.set_follow_agent(false);
        state.set_selection(SelectionSource::Agent, Some(pid("P007")));

        assert_eq!(state.selected_product_id(), Some(&pid("P007")));
        assert_eq!(state.recently_viewed(), [pid("P001")]);
    }

    #[test]
    fn revisions_track_changes_only() {
        let mut state = UiState::default();
        state.set_selection(SelectionSource::Human, Some(pid("P001")));
        let (rev, selection_rev) = (state.rev(), state.selection_rev());

        state.set_selection(SelectionSource::Human, Some(pid("P001")));
        assert_eq!(state.rev(), rev);

        state.set_user_location(Waypoint::new(300.0, 300.0));
        assert_eq!(state.rev(), rev + 1);
        assert_eq!(state.selection_rev(), selection_rev);

        state.set_follow_agent(false);
        state.set_follow_agent(false);
        assert_eq!(state.rev(), rev + 2);
    }
}
