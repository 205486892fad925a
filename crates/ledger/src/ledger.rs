// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The append-only decision log.

use crate::error::LedgerError;
use crate::fingerprint::compute_fingerprint;
use crate::types::{Decision, DecisionAction, DecisionDraft};

/// Read filter for querying the ledger.
///
/// Both constraints are optional; the default filter returns everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecisionFilter {
    /// Restrict to one action kind.
    pub action: Option<DecisionAction>,
    /// Case-insensitive free-text match against case id, subject, actor
    /// name, and details.
    pub search: Option<String>,
}

/// An ordered, append-only log of triage decisions.
///
/// Entries are stored in append order and never mutated or removed.
/// Appends are serialized by the `&mut` borrow; reads may share the
/// ledger freely.
#[derive(Debug, Clone, Default)]
pub struct DecisionLedger {
    entries: Vec<Decision>,
}

impl DecisionLedger {
    /// Creates a new empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a decision to the tail of the log.
    ///
    /// Computes the priority score from the draft's snapshot and the
    /// fingerprint from the draft's identifying fields, then stores the
    /// completed entry. The append is atomic: on error nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Fingerprint` if the canonical payload cannot
    /// be produced.
    pub fn append(&mut self, draft: DecisionDraft) -> Result<&Decision, LedgerError> {
        let fingerprint: String = compute_fingerprint(
            &draft.batch_id,
            &draft.snapshot.case_id,
            draft.action,
            &draft.details,
            draft.at,
        )?;

        let decision: Decision = Decision {
            batch_id: draft.batch_id,
            action: draft.action,
            priority: draft.snapshot.priority(),
            snapshot: draft.snapshot,
            actor: draft.actor,
            details: draft.details,
            at: draft.at,
            fingerprint,
        };

        self.entries.push(decision);

        // Just pushed, so the tail entry exists.
        #[allow(clippy::unwrap_used)]
        Ok(self.entries.last().unwrap())
    }

    /// Returns matching decisions, newest first.
    ///
    /// The returned view is read-only and restartable: callers may query
    /// again at any time and see all entries appended so far.
    #[must_use]
    pub fn query(&self, filter: &DecisionFilter) -> Vec<&Decision> {
        let needle: Option<String> = filter.search.as_ref().map(|s| s.to_lowercase());

        self.entries
            .iter()
            .rev()
            .filter(|entry| {
                if filter.action.is_some_and(|action| entry.action != action) {
                    return false;
                }
                if let Some(needle) = &needle {
                    let haystack: String = format!(
                        "{} {} {} {}",
                        entry.snapshot.case_id, entry.snapshot.subject, entry.actor.name,
                        entry.details
                    )
                    .to_lowercase();
                    if !haystack.contains(needle) {
                        return false;
                    }
                }
                true
            })
            .collect()
    }

    /// Recomputes an entry's fingerprint and compares it to the stored one.
    ///
    /// This is how an auditor re-derives trust without a live connection
    /// to whoever produced the entry. Returns false on any mismatch,
    /// including an entry whose canonical payload can no longer be
    /// produced. A failed verification is reported, never auto-corrected.
    #[must_use]
    pub fn verify(entry: &Decision) -> bool {
        compute_fingerprint(
            &entry.batch_id,
            &entry.snapshot.case_id,
            entry.action,
            &entry.details,
            entry.at,
        )
        .is_ok_and(|expected| expected == entry.fingerprint)
    }

    /// Returns the number of entries in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries in append order.
    #[must_use]
    pub fn entries(&self) -> &[Decision] {
        &self.entries
    }
}
