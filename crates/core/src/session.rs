// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The multi-tab workspace session.
//!
//! The session is a single-owner state container: tabs, the cross-view
//! selection, and the active filter all live here, and every change goes
//! through [`WorkspaceSession::apply`] as a pure reducer transition. That
//! keeps each transition independently unit-testable without any UI.
//!
//! Selection and filters deliberately survive tab switches: cross-view
//! bulk actions depend on selecting cases in one queue and acting on them
//! from another.

use case_triage_domain::{FilterPatch, FilterState};
use std::collections::BTreeSet;

/// The kind of view a workspace tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabType {
    /// The main triage queue.
    Inbox,
    /// A single case dossier.
    CaseDetail,
    /// The impact/delay priority matrix.
    Matrix,
    /// Chronological case timeline.
    Timeline,
    /// Per-bureau breakdown.
    Bureau,
    /// The decision ledger view.
    Audit,
    /// The resolution wizard.
    Wizard,
}

impl TabType {
    /// Returns the string representation of this tab type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::CaseDetail => "case-detail",
            Self::Matrix => "matrix",
            Self::Timeline => "timeline",
            Self::Bureau => "bureau",
            Self::Audit => "audit",
            Self::Wizard => "wizard",
        }
    }
}

impl std::fmt::Display for TabType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One open view in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceTab {
    /// Unique id, derived from the type and a discriminator.
    pub id: String,
    /// The kind of view.
    pub tab_type: TabType,
    /// Display title.
    pub title: String,
    /// Opaque view parameter (queue name, case id), if any.
    pub payload: Option<String>,
}

impl WorkspaceTab {
    /// Creates a tab whose id is derived from the type and a discriminator.
    ///
    /// Two open-requests with the same type and discriminator name the
    /// same tab, which is what makes `OpenTab` idempotent.
    #[must_use]
    pub fn new(
        tab_type: TabType,
        discriminator: &str,
        title: String,
        payload: Option<String>,
    ) -> Self {
        Self {
            id: format!("{}:{discriminator}", tab_type.as_str()),
            tab_type,
            title,
            payload,
        }
    }
}

/// A workspace transition, expressed as data.
///
/// Commands are the only way to change session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Open a tab, or activate it if a tab with the same id is open.
    OpenTab(WorkspaceTab),
    /// Close a tab by id. Unknown ids are a no-op.
    CloseTab(String),
    /// Activate a tab by id. Unknown ids are a no-op.
    ActivateTab(String),
    /// Toggle a case id in the shared selection.
    ToggleSelection(String),
    /// Replace the shared selection wholesale.
    SelectAll(Vec<String>),
    /// Empty the shared selection.
    ClearSelection,
    /// Shallow-merge a partial filter update.
    SetFilter(FilterPatch),
}

/// The complete workspace session state.
///
/// At most one tab is active at a time; `active` is `None` when no tabs
/// are open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceSession {
    /// Open tabs, in open order.
    pub tabs: Vec<WorkspaceTab>,
    /// The id of the active tab, if any.
    pub active: Option<String>,
    /// Case ids selected across all views.
    pub selection: BTreeSet<String>,
    /// The active filter constraints.
    pub filter: FilterState,
}

impl WorkspaceSession {
    /// Creates a new session with no tabs, no selection, and the identity
    /// filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command, producing the next session state.
    ///
    /// Transitions are infallible: commands naming unknown tabs are
    /// no-ops, and the remaining commands are total by construction.
    #[must_use]
    pub fn apply(&self, command: SessionCommand) -> Self {
        let mut next: Self = self.clone();
        match command {
            SessionCommand::OpenTab(tab) => {
                if !next.tabs.iter().any(|t| t.id == tab.id) {
                    next.tabs.push(tab.clone());
                }
                next.active = Some(tab.id);
            }
            SessionCommand::CloseTab(tab_id) => {
                let Some(index) = next.tabs.iter().position(|t| t.id == tab_id) else {
                    return next;
                };
                next.tabs.remove(index);
                if next.active.as_deref() == Some(tab_id.as_str()) {
                    // Prefer the tab before the closed one in open order,
                    // then the first remaining tab, then none.
                    next.active = if index > 0 {
                        next.tabs.get(index - 1).map(|t| t.id.clone())
                    } else {
                        next.tabs.first().map(|t| t.id.clone())
                    };
                }
            }
            SessionCommand::ActivateTab(tab_id) => {
                if next.tabs.iter().any(|t| t.id == tab_id) {
                    next.active = Some(tab_id);
                }
            }
            SessionCommand::ToggleSelection(case_id) => {
                if !next.selection.remove(&case_id) {
                    next.selection.insert(case_id);
                }
            }
            SessionCommand::SelectAll(case_ids) => {
                next.selection = case_ids.into_iter().collect();
            }
            SessionCommand::ClearSelection => {
                next.selection.clear();
            }
            SessionCommand::SetFilter(patch) => {
                next.filter = next.filter.merged(patch);
            }
        }
        next
    }

    /// Returns the active tab, if any.
    #[must_use]
    pub fn active_tab(&self) -> Option<&WorkspaceTab> {
        let active: &str = self.active.as_deref()?;
        self.tabs.iter().find(|t| t.id == active)
    }
}
