// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::boundary::{CaseStore, NoticeKind, Notifier, StoreError};
use case_triage::WizardSession;
use case_triage_domain::{Case, CaseStatus, FilterState, Impact};
use case_triage_ledger::Actor;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use time::OffsetDateTime;
use time::macros::{date, datetime};
use tokio::sync::oneshot;

/// A fixed timestamp so batch ids and fingerprints are reproducible.
pub const TEST_AT: OffsetDateTime = datetime!(2026-03-15 09:30:00 UTC);

pub fn create_test_actor() -> Actor {
    Actor::new(
        String::from("op-042"),
        String::from("A. Diallo"),
        String::from("supervisor"),
    )
}

pub fn create_test_case(id: &str, status: CaseStatus) -> Case {
    Case {
        id: id.to_string(),
        subject: format!("Blocked payment {id}"),
        reason: String::from("Missing service attestation"),
        case_type: String::from("payment"),
        bureau: String::from("Treasury"),
        impact: Some(Impact::High),
        delay_days: 12,
        amount: String::from("4 500 000 FCFA"),
        status,
        opened_on: date!(2026 - 03 - 02),
    }
}

/// Drives a wizard over the given targets to the confirm step.
pub fn create_confirmed_wizard(ids: &[&str], content: &str) -> WizardSession {
    let targets: BTreeSet<String> = ids.iter().map(ToString::to_string).collect();
    let mut wizard: WizardSession = WizardSession::new(targets);
    wizard.content = content.to_string();
    for _ in 0..4 {
        wizard.advance().unwrap();
    }
    wizard
}

/// An in-memory Case Store with switchable failure modes.
#[derive(Debug, Default)]
pub struct MemoryCaseStore {
    pub cases: Mutex<Vec<Case>>,
    pub fail_update: AtomicBool,
    pub fail_bulk: AtomicBool,
    pub status_updates: Mutex<Vec<(String, CaseStatus)>>,
    pub bulk_calls: Mutex<Vec<(Vec<String>, String)>>,
}

impl MemoryCaseStore {
    pub fn with_cases(cases: Vec<Case>) -> Self {
        Self {
            cases: Mutex::new(cases),
            ..Self::default()
        }
    }
}

impl CaseStore for MemoryCaseStore {
    async fn list(&self, filter: &FilterState) -> Result<Vec<Case>, StoreError> {
        let cases = self.cases.lock().unwrap();
        Ok(cases.iter().filter(|c| filter.matches(c)).cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Case, StoreError> {
        let cases = self.cases.lock().unwrap();
        cases
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                case_id: id.to_string(),
            })
    }

    async fn update_status(&self, id: &str, status: CaseStatus) -> Result<(), StoreError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                operation: String::from("update_status"),
                message: String::from("store offline"),
            });
        }
        self.status_updates
            .lock()
            .unwrap()
            .push((id.to_string(), status));
        let mut cases = self.cases.lock().unwrap();
        if let Some(case) = cases.iter_mut().find(|c| c.id == id) {
            case.status = status;
        }
        Ok(())
    }

    async fn bulk_resolve(&self, ids: &[String], content: &str) -> Result<(), StoreError> {
        if self.fail_bulk.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                operation: String::from("bulk_resolve"),
                message: String::from("store offline"),
            });
        }
        self.bulk_calls
            .lock()
            .unwrap()
            .push((ids.to_vec(), content.to_string()));
        let mut cases = self.cases.lock().unwrap();
        for case in cases.iter_mut() {
            if ids.contains(&case.id) {
                case.status = CaseStatus::Resolved;
            }
        }
        Ok(())
    }
}

/// A Case Store whose `list` parks until released, for stale-fetch tests.
///
/// `started` fires once `list` has begun (the caller's epoch token is
/// captured by then); `gate` releases the parked call.
#[derive(Debug)]
pub struct GatedCaseStore {
    pub cases: Vec<Case>,
    pub started: Mutex<Option<oneshot::Sender<()>>>,
    pub gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl GatedCaseStore {
    pub fn new(
        cases: Vec<Case>,
        started: oneshot::Sender<()>,
        gate: oneshot::Receiver<()>,
    ) -> Self {
        Self {
            cases,
            started: Mutex::new(Some(started)),
            gate: Mutex::new(Some(gate)),
        }
    }
}

impl CaseStore for GatedCaseStore {
    async fn list(&self, _filter: &FilterState) -> Result<Vec<Case>, StoreError> {
        let started: Option<oneshot::Sender<()>> = self.started.lock().unwrap().take();
        if let Some(started) = started {
            let _ = started.send(());
        }
        let gate: Option<oneshot::Receiver<()>> = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(self.cases.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Case, StoreError> {
        Err(StoreError::NotFound {
            case_id: id.to_string(),
        })
    }

    async fn update_status(&self, _id: &str, _status: CaseStatus) -> Result<(), StoreError> {
        Ok(())
    }

    async fn bulk_resolve(&self, _ids: &[String], _content: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

/// A Case Store that always fails, for error-path tests.
#[derive(Debug, Default)]
pub struct FailingCaseStore;

impl CaseStore for FailingCaseStore {
    async fn list(&self, _filter: &FilterState) -> Result<Vec<Case>, StoreError> {
        Err(StoreError::Unavailable {
            operation: String::from("list"),
            message: String::from("store offline"),
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<Case, StoreError> {
        Err(StoreError::NotFound {
            case_id: id.to_string(),
        })
    }

    async fn update_status(&self, _id: &str, _status: CaseStatus) -> Result<(), StoreError> {
        Err(StoreError::Unavailable {
            operation: String::from("update_status"),
            message: String::from("store offline"),
        })
    }

    async fn bulk_resolve(&self, _ids: &[String], _content: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable {
            operation: String::from("bulk_resolve"),
            message: String::from("store offline"),
        })
    }
}

/// A Notifier that records every notice for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<(NoticeKind, String, String)>>,
}

impl RecordingNotifier {
    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|(kind, _, _)| *kind)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((kind, title.to_string(), message.to_string()));
    }
}
