// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the boundary layer.

use crate::boundary::StoreError;
use case_triage::CoreError;
use case_triage_ledger::LedgerError;

/// Boundary-level errors.
///
/// These are distinct from domain/core errors and represent the contract
/// callers of the boundary services see. Downstream failures are caught
/// at the call site that issued the asynchronous operation; nothing
/// propagates as an unhandled failure into shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A downstream Case Store call failed.
    Store(StoreError),
    /// A ledger append failed; no entry was stored for it.
    Ledger(LedgerError),
    /// A wizard or domain rule was violated.
    RuleViolation(CoreError),
    /// A wizard operation was attempted at the wrong step.
    WizardNotReady {
        /// The step the wizard is actually at.
        step: String,
    },
    /// A wizard target has no matching case row.
    UnknownTarget {
        /// The target case id with no row.
        case_id: String,
    },
    /// The audit export could not be serialized.
    Export {
        /// A description of the serialization failure.
        reason: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "Case store failure: {err}"),
            Self::Ledger(err) => write!(f, "Ledger failure: {err}"),
            Self::RuleViolation(err) => write!(f, "Rule violation: {err}"),
            Self::WizardNotReady { step } => {
                write!(f, "Wizard is at step '{step}', not ready to confirm")
            }
            Self::UnknownTarget { case_id } => {
                write!(f, "Wizard target '{case_id}' has no matching case")
            }
            Self::Export { reason } => {
                write!(f, "Audit export failed: {reason}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self::Ledger(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::RuleViolation(err)
    }
}

impl From<case_triage_domain::DomainError> for ApiError {
    fn from(err: case_triage_domain::DomainError) -> Self {
        Self::RuleViolation(CoreError::DomainViolation(err))
    }
}
