// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tabular export of the decision ledger for auditors.

use crate::error::ApiError;
use case_triage_ledger::Decision;
use time::format_description::well_known::Rfc3339;

/// Serializes decisions to CSV, in the order given.
///
/// Columns: timestamp, action, case id, subject, actor name, actor role,
/// details, fingerprint. Pair with [`DecisionLedger::query`] to export a
/// filtered, newest-first audit trail.
///
/// [`DecisionLedger::query`]: case_triage_ledger::DecisionLedger::query
///
/// # Errors
///
/// Returns `ApiError::Export` if a timestamp cannot be formatted or CSV
/// serialization fails (it does not, for well-formed entries).
pub fn export_decisions_csv(decisions: &[&Decision]) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "timestamp",
            "action",
            "case_id",
            "subject",
            "actor_name",
            "actor_role",
            "details",
            "fingerprint",
        ])
        .map_err(|e| csv_failure(&e.to_string()))?;

    for decision in decisions {
        let timestamp: String = decision
            .at
            .format(&Rfc3339)
            .map_err(|e| csv_failure(&e.to_string()))?;
        writer
            .write_record([
                timestamp.as_str(),
                decision.action.as_str(),
                decision.snapshot.case_id.as_str(),
                decision.snapshot.subject.as_str(),
                decision.actor.name.as_str(),
                decision.actor.role.as_str(),
                decision.details.as_str(),
                decision.fingerprint.as_str(),
            ])
            .map_err(|e| csv_failure(&e.to_string()))?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| csv_failure(&e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| csv_failure(&e.to_string()))
}

fn csv_failure(reason: &str) -> ApiError {
    ApiError::Export {
        reason: reason.to_string(),
    }
}
