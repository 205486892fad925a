// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decision ledger value types.
//!
//! A `Decision` is immutable once appended: the snapshot captures the case
//! as it was at decision time, and the fingerprint seals the entry's own
//! content. Audit consumers re-derive trust by recomputing the fingerprint,
//! never by asking the producer.

use case_triage_domain::{Case, DomainError, Impact, priority_score};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// The staff member (or system process) who made a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The actor's display name.
    pub name: String,
    /// The actor's role (display data, e.g. "supervisor").
    pub role: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(id: String, name: String, role: String) -> Self {
        Self { id, name, role }
    }
}

/// The kind of decision recorded against a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    /// The case was escalated to a higher authority.
    Escalation,
    /// The override ("substitution") power was exercised.
    Substitution,
    /// The case was resolved.
    Resolution,
}

impl DecisionAction {
    /// Returns the string representation of this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Escalation => "escalation",
            Self::Substitution => "substitution",
            Self::Resolution => "resolution",
        }
    }

    /// Parses an action from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDecisionAction` if the string is not a
    /// valid action.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "escalation" => Ok(Self::Escalation),
            "substitution" => Ok(Self::Substitution),
            "resolution" => Ok(Self::Resolution),
            _ => Err(DomainError::InvalidDecisionAction(format!(
                "Unknown action: {s}"
            ))),
        }
    }
}

impl FromStr for DecisionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The case as it stood at decision time.
///
/// Captured once at append time and immutable thereafter, so the ledger
/// stays meaningful even after the Case Store record changes or vanishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSnapshot {
    /// The case identifier.
    pub case_id: String,
    /// The case subject at decision time.
    pub subject: String,
    /// The responsible bureau at decision time.
    pub bureau: String,
    /// The impact level at decision time, if known.
    pub impact: Option<Impact>,
    /// Days blocked at decision time.
    pub delay_days: u32,
    /// The free-text amount at decision time.
    pub amount: String,
}

impl CaseSnapshot {
    /// Captures a snapshot from a live case record.
    #[must_use]
    pub fn from_case(case: &Case) -> Self {
        Self {
            case_id: case.id.clone(),
            subject: case.subject.clone(),
            bureau: case.bureau.clone(),
            impact: case.impact,
            delay_days: case.delay_days,
            amount: case.amount.clone(),
        }
    }

    /// Computes the priority score from the snapshotted fields.
    #[must_use]
    pub fn priority(&self) -> u64 {
        priority_score(self.impact, self.delay_days, &self.amount)
    }
}

/// A decision pending append — everything but the computed fields.
///
/// The ledger turns a draft into a [`Decision`] by computing the priority
/// and fingerprint at append time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionDraft {
    /// Groups entries committed together (one wizard confirm, one batch).
    pub batch_id: String,
    /// The kind of decision.
    pub action: DecisionAction,
    /// The case as it stood at decision time.
    pub snapshot: CaseSnapshot,
    /// Who made the decision.
    pub actor: Actor,
    /// Free-text justification.
    pub details: String,
    /// When the decision was made.
    pub at: OffsetDateTime,
}

/// An immutable, fingerprinted entry in the decision ledger.
///
/// Once appended, a decision is never mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Groups entries committed together.
    pub batch_id: String,
    /// The kind of decision.
    pub action: DecisionAction,
    /// The case as it stood at decision time.
    pub snapshot: CaseSnapshot,
    /// Priority score computed from the snapshot at append time.
    pub priority: u64,
    /// Who made the decision.
    pub actor: Actor,
    /// Free-text justification.
    pub details: String,
    /// When the decision was made.
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
    /// Hex-encoded SHA-256 over the entry's canonical payload.
    pub fingerprint: String,
}
