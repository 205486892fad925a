// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, CaseSnapshot, DecisionAction, DecisionDraft};
use case_triage_domain::Impact;
use time::OffsetDateTime;
use time::macros::datetime;

/// A fixed timestamp so fingerprints are reproducible across test runs.
pub const TEST_AT: OffsetDateTime = datetime!(2026-03-15 09:30:00 UTC);

pub fn create_test_actor() -> Actor {
    Actor::new(
        String::from("op-042"),
        String::from("A. Diallo"),
        String::from("supervisor"),
    )
}

pub fn create_test_snapshot() -> CaseSnapshot {
    CaseSnapshot {
        case_id: String::from("case-001"),
        subject: String::from("Blocked supplier payment"),
        bureau: String::from("Treasury"),
        impact: Some(Impact::Critical),
        delay_days: 20,
        amount: String::from("15 000 000 FCFA"),
    }
}

pub fn create_test_draft(action: DecisionAction) -> DecisionDraft {
    DecisionDraft {
        batch_id: String::from("batch-7f3a"),
        action,
        snapshot: create_test_snapshot(),
        actor: create_test_actor(),
        details: String::from("Attestation received, releasing payment"),
        at: TEST_AT,
    }
}
