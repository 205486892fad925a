// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Case, CaseStatus, Impact};
use time::macros::date;

/// Creates a representative pending case for tests.
pub fn create_test_case() -> Case {
    Case {
        id: String::from("case-001"),
        subject: String::from("Blocked supplier payment"),
        reason: String::from("Missing service attestation"),
        case_type: String::from("payment"),
        bureau: String::from("Treasury"),
        impact: Some(Impact::High),
        delay_days: 12,
        amount: String::from("4 500 000 FCFA"),
        status: CaseStatus::Pending,
        opened_on: date!(2026 - 03 - 02),
    }
}
