// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decision fingerprinting.
//!
//! A fingerprint is the hex-encoded SHA-256 digest of a canonical JSON
//! payload built from the entry's own identifying fields: batch id, case
//! id, action, details, and timestamp (RFC 3339). Changing any of those
//! fields changes the fingerprint; auditors verify an entry offline by
//! recomputing it.
//!
//! Each fingerprint covers only its own entry — it does not incorporate
//! the previous entry's fingerprint, so the ledger is tamper-evident per
//! entry rather than a linked hash chain. Upgrading to a chain would
//! invalidate every previously exported fingerprint and needs product
//! sign-off first.

use crate::error::LedgerError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::types::DecisionAction;

/// The canonical payload a fingerprint is computed over.
///
/// Field order is fixed by this struct; `serde_json` serializes fields in
/// declaration order, which makes the JSON form canonical.
#[derive(Serialize)]
struct CanonicalDecision<'a> {
    batch_id: &'a str,
    case_id: &'a str,
    action: &'a str,
    details: &'a str,
    at: String,
}

/// Computes the fingerprint for a decision's identifying fields.
///
/// # Errors
///
/// Returns `LedgerError::Fingerprint` if the timestamp cannot be formatted
/// or the canonical payload cannot be serialized. Callers must abort the
/// append in that case; no partial entry may be stored.
pub fn compute_fingerprint(
    batch_id: &str,
    case_id: &str,
    action: DecisionAction,
    details: &str,
    at: OffsetDateTime,
) -> Result<String, LedgerError> {
    let at: String = at.format(&Rfc3339).map_err(|e| LedgerError::Fingerprint {
        reason: format!("timestamp formatting failed: {e}"),
    })?;

    let payload: CanonicalDecision<'_> = CanonicalDecision {
        batch_id,
        case_id,
        action: action.as_str(),
        details,
        at,
    };

    let canonical: String =
        serde_json::to_string(&payload).map_err(|e| LedgerError::Fingerprint {
            reason: format!("canonical serialization failed: {e}"),
        })?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
