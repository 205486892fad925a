// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Impact level string is not recognized.
    InvalidImpact(String),
    /// Case status string is not recognized.
    InvalidCaseStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A case status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// Decision action string is not recognized.
    InvalidDecisionAction(String),
    /// Case identifier is empty or invalid.
    InvalidCaseId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidImpact(msg) => write!(f, "Invalid impact: {msg}"),
            Self::InvalidCaseStatus { status } => {
                write!(f, "Invalid case status: {status}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition from '{from}' to '{to}': {reason}")
            }
            Self::InvalidDecisionAction(msg) => write!(f, "Invalid decision action: {msg}"),
            Self::InvalidCaseId(msg) => write!(f, "Invalid case id: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
