// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while appending to the decision ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The canonical payload for fingerprinting could not be produced.
    ///
    /// When this occurs the append is aborted and no entry is stored.
    Fingerprint {
        /// A description of the serialization failure.
        reason: String,
    },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fingerprint { reason } => {
                write!(f, "Failed to compute decision fingerprint: {reason}")
            }
        }
    }
}

impl std::error::Error for LedgerError {}
