// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Case model and status lifecycle.
//!
//! Cases are owned by the external Case Store; this crate never mutates
//! them directly. Status transitions are operator-initiated only and are
//! validated here before any downstream call is made.

use crate::error::DomainError;
use crate::scoring::{priority_score, sla_deadline_days};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Impact level of a blocked case.
///
/// Impact drives the priority scoring weight and the SLA deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Blocking a critical obligation.
    Critical,
    /// Blocking a high-value or time-sensitive obligation.
    High,
    /// Routine blockage with moderate consequences.
    Medium,
    /// Low-consequence blockage.
    Low,
}

impl Impact {
    /// Returns the string representation of this impact level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parses an impact level from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidImpact` if the string is not a valid
    /// impact level.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(DomainError::InvalidImpact(format!("Unknown impact: {s}"))),
        }
    }
}

impl FromStr for Impact {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a blocked case.
///
/// Status advances only through explicit operator decisions (escalation,
/// substitution, resolution); the system never advances status on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Newly reported, awaiting triage.
    Pending,
    /// Escalated to a higher authority.
    Escalated,
    /// The override ("substitution") power was exercised.
    Substituted,
    /// Remediated and closed.
    Resolved,
}

impl CaseStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Escalated => "escalated",
            Self::Substituted => "substituted",
            Self::Resolved => "resolved",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCaseStatus` if the string is not a
    /// valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "escalated" => Ok(Self::Escalated),
            "substituted" => Ok(Self::Substituted),
            "resolved" => Ok(Self::Resolved),
            _ => Err(DomainError::InvalidCaseStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition further).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// Validates that a transition from this status to another is permitted.
    ///
    /// Valid transitions are:
    /// - pending → escalated, substituted, resolved
    /// - escalated → substituted, resolved
    /// - substituted → resolved
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid: bool = match self {
            Self::Pending => new_status != Self::Pending,
            Self::Escalated => matches!(new_status, Self::Substituted | Self::Resolved),
            Self::Substituted => new_status == Self::Resolved,
            Self::Resolved => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not in the permitted table".to_string(),
            })
        }
    }
}

impl FromStr for CaseStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A blocked case as read from the Case Store.
///
/// The Case Store owns these records; this core only reads them and
/// appends decisions about them. Upstream data is messy: `impact` may be
/// absent and `amount` is free text that may contain grouping separators
/// or a currency suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// The case identifier (opaque, assigned by the Case Store).
    pub id: String,
    /// Short human-readable subject line.
    pub subject: String,
    /// Why the case is blocked.
    pub reason: String,
    /// The kind of work item (e.g., "payment", "procurement").
    pub case_type: String,
    /// The bureau responsible for the case.
    pub bureau: String,
    /// Impact level, if the upstream record carries a usable one.
    pub impact: Option<Impact>,
    /// Days the case has been blocked.
    pub delay_days: u32,
    /// Monetary amount at stake, as free text.
    pub amount: String,
    /// Current lifecycle status.
    pub status: CaseStatus,
    /// The date the case was opened.
    pub opened_on: time::Date,
}

impl Case {
    /// Computes the deterministic priority score for this case.
    ///
    /// See [`priority_score`] for the algorithm.
    #[must_use]
    pub fn priority(&self) -> u64 {
        priority_score(self.impact, self.delay_days, &self.amount)
    }

    /// Returns true if the case has been blocked past its SLA deadline.
    ///
    /// The deadline depends on impact; see [`sla_deadline_days`].
    #[must_use]
    pub fn sla_breached(&self) -> bool {
        self.delay_days > sla_deadline_days(self.impact)
    }
}
