// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod fingerprint;
mod ledger;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::LedgerError;
pub use fingerprint::compute_fingerprint;
pub use ledger::{DecisionFilter, DecisionLedger};
pub use types::{Actor, CaseSnapshot, Decision, DecisionAction, DecisionDraft};
