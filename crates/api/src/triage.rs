// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Direct triage actions: escalate, substitute, resolve one case.
//!
//! Each action validates the status transition, appends the decision to
//! the ledger, and then asks the Case Store to reflect the new status.
//! The ledger is not rolled back if the store call fails afterwards: the
//! ledger records that a decision was made, independent of whether the
//! downstream system later reflects it. Store failures are surfaced via
//! the Notifier for manual follow-up and are not retried.

use crate::boundary::{CaseStore, NoticeKind, Notifier};
use crate::error::ApiError;
use case_triage_domain::{Case, CaseStatus};
use case_triage_ledger::{Actor, CaseSnapshot, Decision, DecisionAction, DecisionDraft, DecisionLedger};
use time::OffsetDateTime;
use tracing::{info, warn};

/// Mints an identifier grouping the ledger entries of one committed batch.
pub(crate) fn mint_batch_id(at: OffsetDateTime) -> String {
    format!("batch_{}_{}", at.unix_timestamp(), rand::random::<u64>())
}

/// Direct (non-wizard) triage decisions on a single case.
pub struct TriageService;

impl TriageService {
    /// Escalates a case to a higher authority.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RuleViolation` if the case's status does not
    /// permit escalation, `ApiError::Store` if the store rejects the
    /// fetch or the status update, or `ApiError::Ledger` if the append
    /// fails (in which case no entry was stored and no store call was
    /// made).
    pub async fn escalate<S: CaseStore, N: Notifier>(
        store: &S,
        notifier: &N,
        ledger: &mut DecisionLedger,
        actor: Actor,
        case_id: &str,
        details: String,
        at: OffsetDateTime,
    ) -> Result<Decision, ApiError> {
        Self::decide(
            store,
            notifier,
            ledger,
            actor,
            case_id,
            details,
            at,
            DecisionAction::Escalation,
            CaseStatus::Escalated,
        )
        .await
    }

    /// Exercises the override ("substitution") power on a case.
    ///
    /// # Errors
    ///
    /// Same contract as [`escalate`](Self::escalate).
    pub async fn substitute<S: CaseStore, N: Notifier>(
        store: &S,
        notifier: &N,
        ledger: &mut DecisionLedger,
        actor: Actor,
        case_id: &str,
        details: String,
        at: OffsetDateTime,
    ) -> Result<Decision, ApiError> {
        Self::decide(
            store,
            notifier,
            ledger,
            actor,
            case_id,
            details,
            at,
            DecisionAction::Substitution,
            CaseStatus::Substituted,
        )
        .await
    }

    /// Resolves a single case outside the wizard.
    ///
    /// # Errors
    ///
    /// Same contract as [`escalate`](Self::escalate).
    pub async fn resolve<S: CaseStore, N: Notifier>(
        store: &S,
        notifier: &N,
        ledger: &mut DecisionLedger,
        actor: Actor,
        case_id: &str,
        details: String,
        at: OffsetDateTime,
    ) -> Result<Decision, ApiError> {
        Self::decide(
            store,
            notifier,
            ledger,
            actor,
            case_id,
            details,
            at,
            DecisionAction::Resolution,
            CaseStatus::Resolved,
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn decide<S: CaseStore, N: Notifier>(
        store: &S,
        notifier: &N,
        ledger: &mut DecisionLedger,
        actor: Actor,
        case_id: &str,
        details: String,
        at: OffsetDateTime,
        action: DecisionAction,
        new_status: CaseStatus,
    ) -> Result<Decision, ApiError> {
        let case: Case = store.get_by_id(case_id).await?;

        // Reject invalid transitions before anything is recorded.
        case.status.validate_transition(new_status)?;

        let draft: DecisionDraft = DecisionDraft {
            batch_id: mint_batch_id(at),
            action,
            snapshot: CaseSnapshot::from_case(&case),
            actor,
            details,
            at,
        };
        let decision: Decision = ledger.append(draft)?.clone();
        info!(case_id, action = %action, priority = decision.priority, "decision recorded");

        if let Err(e) = store.update_status(case_id, new_status).await {
            // The ledger entry stands; the downstream update needs manual
            // follow-up.
            warn!(case_id, error = %e, "status update failed after ledger append");
            notifier.notify(
                NoticeKind::Error,
                "Status update failed",
                &format!("The {action} decision for case {case_id} was recorded, but the case store rejected the status change: {e}"),
            );
            return Err(ApiError::Store(e));
        }

        notifier.notify(
            NoticeKind::Success,
            "Decision recorded",
            &format!("Case {case_id}: {action} recorded"),
        );
        Ok(decision)
    }
}
