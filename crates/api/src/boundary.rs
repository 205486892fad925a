// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary contracts for the external collaborators.
//!
//! The Case Store owns dossier records and their persistence; the
//! Notifier owns user-facing signaling. Both are expressed as traits so
//! the scoring/ledger/wizard logic stays side-effect-free and testable
//! against in-memory fakes. Failures surface as rejected operations;
//! nothing here retries automatically.

use case_triage_domain::{Case, CaseStatus, FilterState};
use thiserror::Error;

/// Errors surfaced by the Case Store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No case exists with the requested id.
    #[error("Case '{case_id}' not found")]
    NotFound {
        /// The unknown case id.
        case_id: String,
    },
    /// A store operation was rejected or the store was unreachable.
    #[error("Case store operation '{operation}' failed: {message}")]
    Unavailable {
        /// The operation that failed.
        operation: String,
        /// A description of the failure.
        message: String,
    },
}

/// Read/write access to dossier records, owned elsewhere.
///
/// Every method is asynchronous; callers must not assume ordering
/// between two independently-triggered calls.
pub trait CaseStore {
    /// Lists the cases matching a filter.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the operation.
    fn list(
        &self,
        filter: &FilterState,
    ) -> impl Future<Output = Result<Vec<Case>, StoreError>> + Send;

    /// Fetches a single case by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such case exists.
    fn get_by_id(&self, id: &str) -> impl Future<Output = Result<Case, StoreError>> + Send;

    /// Requests a status change for one case.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the operation.
    fn update_status(
        &self,
        id: &str,
        status: CaseStatus,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Requests that a batch of cases be marked resolved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the operation.
    fn bulk_resolve(
        &self,
        ids: &[String],
        content: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// The kind of user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The operation succeeded.
    Success,
    /// The operation failed and needs manual follow-up.
    Error,
}

/// User-facing success/error signaling.
///
/// Fire-and-forget: no return value is consumed and a notifier failure
/// must never affect business state.
pub trait Notifier {
    /// Emits a notice to the user.
    fn notify(&self, kind: NoticeKind, title: &str, message: &str);
}
