// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use case_triage_domain::DomainError;

/// Errors that can occur during wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The wizard cannot leave the select step without at least one target.
    EmptyTargetSet,
    /// The wizard cannot leave the compose step: no free-text content and
    /// the chosen template still has unfilled variables.
    IncompleteComposition {
        /// Template variables that have not been supplied.
        missing: Vec<String>,
    },
    /// The wizard has already reached its terminal step.
    WizardComplete,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::EmptyTargetSet => {
                write!(f, "At least one target case must be selected")
            }
            Self::IncompleteComposition { missing } => {
                if missing.is_empty() {
                    write!(f, "Composition content is empty")
                } else {
                    write!(
                        f,
                        "Composition is incomplete: missing template variables {}",
                        missing.join(", ")
                    )
                }
            }
            Self::WizardComplete => {
                write!(f, "The wizard has already completed")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
