// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wizard confirm orchestration.
//!
//! On entering the confirm step the wizard's batch is committed: one
//! resolution decision per target case is appended to the ledger, then
//! the Case Store is asked to mark the batch resolved in one bulk call.
//! Ledger entries appended before a store failure remain — the ledger
//! records that a resolution decision was made, whether or not the
//! downstream system reflects it — and the failure is surfaced to the
//! user so they can retry or copy the composed content elsewhere. The
//! caller keeps the wizard at confirm on error, preserving its state
//! for retry.

use crate::boundary::{CaseStore, NoticeKind, Notifier};
use crate::error::ApiError;
use crate::triage::mint_batch_id;
use case_triage::WizardSession;
use case_triage_domain::Case;
use case_triage_ledger::{Actor, CaseSnapshot, DecisionAction, DecisionDraft, DecisionLedger};
use time::OffsetDateTime;
use tracing::{info, warn};

/// The result of a fully successful wizard confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOutcome {
    /// The batch id shared by every appended ledger entry.
    pub batch_id: String,
    /// How many cases were resolved.
    pub resolved: usize,
}

/// Commits resolution wizard batches.
pub struct ResolutionService;

impl ResolutionService {
    /// Commits a wizard's batch of resolutions.
    ///
    /// The wizard must have reached its confirm step, and every target
    /// id must have a matching row in `cases` (the rows the wizard was
    /// opened over). Target validation happens before any append, so a
    /// missing row aborts with the ledger untouched.
    ///
    /// # Errors
    ///
    /// - `ApiError::WizardNotReady` if the wizard is not at confirm.
    /// - `ApiError::UnknownTarget` if a target id has no row; nothing
    ///   was appended.
    /// - `ApiError::Ledger` if an append fails; entries appended before
    ///   the failure remain.
    /// - `ApiError::Store` if the bulk resolve fails; all ledger entries
    ///   remain and the failure is surfaced via the Notifier.
    pub async fn confirm<S: CaseStore, N: Notifier>(
        wizard: &WizardSession,
        cases: &[Case],
        ledger: &mut DecisionLedger,
        store: &S,
        notifier: &N,
        actor: Actor,
        at: OffsetDateTime,
    ) -> Result<ConfirmOutcome, ApiError> {
        if !wizard.is_terminal() {
            return Err(ApiError::WizardNotReady {
                step: wizard.step().to_string(),
            });
        }

        // Resolve every target to a case row before touching the ledger.
        let mut targets: Vec<&Case> = Vec::with_capacity(wizard.targets.len());
        for case_id in &wizard.targets {
            let case: &Case = cases
                .iter()
                .find(|c| &c.id == case_id)
                .ok_or_else(|| ApiError::UnknownTarget {
                    case_id: case_id.clone(),
                })?;
            targets.push(case);
        }

        let batch_id: String = mint_batch_id(at);
        let content: String = wizard.rendered_content();

        for case in &targets {
            let draft: DecisionDraft = DecisionDraft {
                batch_id: batch_id.clone(),
                action: DecisionAction::Resolution,
                snapshot: CaseSnapshot::from_case(case),
                actor: actor.clone(),
                details: content.clone(),
                at,
            };
            ledger.append(draft)?;
        }
        info!(batch_id, count = targets.len(), "resolution batch appended to ledger");

        let ids: Vec<String> = targets.iter().map(|c| c.id.clone()).collect();
        if let Err(e) = store.bulk_resolve(&ids, &content).await {
            warn!(batch_id, error = %e, "bulk resolve failed after ledger appends");
            notifier.notify(
                NoticeKind::Error,
                "Resolution not applied",
                &format!(
                    "{} resolution decisions were recorded, but the case store rejected the bulk update: {e}",
                    ids.len()
                ),
            );
            return Err(ApiError::Store(e));
        }

        notifier.notify(
            NoticeKind::Success,
            "Batch resolved",
            &format!("{} cases resolved", ids.len()),
        );
        Ok(ConfirmOutcome {
            batch_id,
            resolved: ids.len(),
        })
    }
}
