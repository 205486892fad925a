// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Queue filtering rules.
//!
//! A `FilterState` is the complete set of active constraints for a queue
//! view. Matching is a pure predicate so it can be evaluated anywhere a
//! case list needs narrowing, without touching shared state. An all-empty
//! filter matches every case.

use crate::scoring::parse_amount;
use crate::types::{Case, CaseStatus, Impact};
use serde::{Deserialize, Serialize};

/// An inclusive numeric range where either bound may be absent.
///
/// A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundRange<T> {
    /// Inclusive lower bound, if any.
    pub min: Option<T>,
    /// Inclusive upper bound, if any.
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> BoundRange<T> {
    /// Returns true if the value falls within the range.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Returns true if neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// An inclusive calendar date range where either bound may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive start date, if any.
    pub start: Option<time::Date>,
    /// Inclusive end date, if any.
    pub end: Option<time::Date>,
}

impl DateRange {
    /// Returns true if the date falls within the range.
    #[must_use]
    pub fn contains(&self, date: time::Date) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// Returns true if neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// The active filter constraints for a queue view.
///
/// List fields are disjunctive within the field (membership) and every
/// non-empty field must be satisfied (conjunction across fields). The
/// default value is the identity filter: it matches every case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Accepted impact levels. Empty means any.
    pub impact: Vec<Impact>,
    /// Accepted bureaux. Empty means any.
    pub bureaux: Vec<String>,
    /// Accepted case types. Empty means any.
    pub case_types: Vec<String>,
    /// Accepted statuses. Empty means any.
    pub status: Vec<CaseStatus>,
    /// Accepted delay range in days.
    pub delay_range: BoundRange<u32>,
    /// Accepted parsed-amount range.
    pub amount_range: BoundRange<u64>,
    /// Accepted opened-on date range.
    pub date_range: DateRange,
    /// Case-insensitive free-text search, if any.
    pub search: Option<String>,
    /// Constrain to SLA-breached (or non-breached) cases, if set.
    pub sla_breached: Option<bool>,
}

impl FilterState {
    /// Returns true if every field is empty, i.e. the identity filter.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.impact.is_empty()
            && self.bureaux.is_empty()
            && self.case_types.is_empty()
            && self.status.is_empty()
            && self.delay_range.is_unbounded()
            && self.amount_range.is_unbounded()
            && self.date_range.is_unbounded()
            && self.search.is_none()
            && self.sla_breached.is_none()
    }

    /// Evaluates whether a case satisfies every non-empty constraint.
    ///
    /// Pure predicate: reads only the case and the filter. The free-text
    /// search matches case-insensitively against a concatenation of the
    /// case's id, subject, reason, bureau, amount, and type.
    #[must_use]
    pub fn matches(&self, case: &Case) -> bool {
        if !self.impact.is_empty() {
            let Some(impact) = case.impact else {
                return false;
            };
            if !self.impact.contains(&impact) {
                return false;
            }
        }

        if !self.bureaux.is_empty() && !self.bureaux.contains(&case.bureau) {
            return false;
        }

        if !self.case_types.is_empty() && !self.case_types.contains(&case.case_type) {
            return false;
        }

        if !self.status.is_empty() && !self.status.contains(&case.status) {
            return false;
        }

        if !self.delay_range.contains(case.delay_days) {
            return false;
        }

        if !self.amount_range.contains(parse_amount(&case.amount)) {
            return false;
        }

        if !self.date_range.contains(case.opened_on) {
            return false;
        }

        if let Some(search) = &self.search {
            let needle: String = search.to_lowercase();
            let haystack: String = format!(
                "{} {} {} {} {} {}",
                case.id, case.subject, case.reason, case.bureau, case.amount, case.case_type
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }

        if self.sla_breached.is_some_and(|breached| case.sla_breached() != breached) {
            return false;
        }

        true
    }

    /// Merges a partial update into this filter, shallowly.
    ///
    /// Fields present in the patch replace the corresponding field whole;
    /// absent fields are left untouched.
    #[must_use]
    pub fn merged(&self, patch: FilterPatch) -> Self {
        Self {
            impact: patch.impact.unwrap_or_else(|| self.impact.clone()),
            bureaux: patch.bureaux.unwrap_or_else(|| self.bureaux.clone()),
            case_types: patch.case_types.unwrap_or_else(|| self.case_types.clone()),
            status: patch.status.unwrap_or_else(|| self.status.clone()),
            delay_range: patch.delay_range.unwrap_or(self.delay_range),
            amount_range: patch.amount_range.unwrap_or(self.amount_range),
            date_range: patch.date_range.unwrap_or(self.date_range),
            search: patch.search.unwrap_or_else(|| self.search.clone()),
            sla_breached: patch.sla_breached.unwrap_or(self.sla_breached),
        }
    }
}

/// A partial filter update for shallow merging.
///
/// Each field is wrapped in an outer `Option`: `None` leaves the current
/// value in place, `Some(v)` replaces the field with `v` (including
/// `Some(None)` to clear an optional field).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterPatch {
    /// Replacement impact list, if present.
    pub impact: Option<Vec<Impact>>,
    /// Replacement bureau list, if present.
    pub bureaux: Option<Vec<String>>,
    /// Replacement case type list, if present.
    pub case_types: Option<Vec<String>>,
    /// Replacement status list, if present.
    pub status: Option<Vec<CaseStatus>>,
    /// Replacement delay range, if present.
    pub delay_range: Option<BoundRange<u32>>,
    /// Replacement amount range, if present.
    pub amount_range: Option<BoundRange<u64>>,
    /// Replacement date range, if present.
    pub date_range: Option<DateRange>,
    /// Replacement search term, if present.
    pub search: Option<Option<String>>,
    /// Replacement SLA-breached flag, if present.
    pub sla_breached: Option<Option<bool>>,
}
