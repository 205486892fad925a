// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic priority scoring for blocked cases.
//!
//! Scoring ranks cases for triage queues. It is a pure function of the
//! case's impact, delay, and amount: there are no error paths. Malformed
//! upstream data degrades to the lowest contribution instead of failing,
//! because a case must never disappear from a queue over a bad field.

use crate::types::Impact;

/// Scoring weight for a case with no usable impact level.
const UNKNOWN_IMPACT_WEIGHT: u64 = 1;

/// Amount divisor: one point of amount factor per million of currency.
const AMOUNT_FACTOR_DIVISOR: f64 = 1_000_000.0;

/// SLA deadline (in delay days) for a case with no usable impact level.
const UNKNOWN_IMPACT_SLA_DAYS: u32 = 30;

/// Returns the scoring weight for an impact level.
#[must_use]
pub const fn impact_weight(impact: Option<Impact>) -> u64 {
    match impact {
        Some(Impact::Critical) => 100,
        Some(Impact::High) => 50,
        Some(Impact::Medium) => 20,
        Some(Impact::Low) => 5,
        None => UNKNOWN_IMPACT_WEIGHT,
    }
}

/// Returns the SLA deadline in delay days for an impact level.
///
/// A case is SLA-breached once its delay exceeds this deadline.
#[must_use]
pub const fn sla_deadline_days(impact: Option<Impact>) -> u32 {
    match impact {
        Some(Impact::Critical) => 2,
        Some(Impact::High) => 5,
        Some(Impact::Medium) => 10,
        Some(Impact::Low) => 20,
        None => UNKNOWN_IMPACT_SLA_DAYS,
    }
}

/// Parses a currency-like free-text amount into an integer value.
///
/// Every non-ASCII-digit character is stripped and the remaining digits
/// are parsed as one integer, so "15 000 000 FCFA" parses as 15000000.
/// An empty or overflowing remainder parses as 0; this function never
/// fails.
#[must_use]
pub fn parse_amount(amount: &str) -> u64 {
    let digits: String = amount.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().unwrap_or(0)
}

/// Computes the deterministic priority score for a case.
///
/// The score is `round(weight × delay_factor × amount_factor)` where:
/// - `weight` is 100/50/20/5 for critical/high/medium/low impact, 1 when
///   impact is unknown;
/// - `delay_factor` is `delay_days + 1`;
/// - `amount_factor` is `1 + parsed_amount / 1_000_000`.
///
/// For fixed impact the score is non-decreasing in both `delay_days` and
/// the parsed amount. Pure and deterministic; malformed amounts score as 0.
#[must_use]
pub fn priority_score(impact: Option<Impact>, delay_days: u32, amount: &str) -> u64 {
    let weight: u64 = impact_weight(impact);
    let delay_factor: u64 = u64::from(delay_days) + 1;
    let amount_value: u64 = parse_amount(amount);

    #[allow(clippy::cast_precision_loss)]
    let amount_factor: f64 = 1.0 + (amount_value as f64) / AMOUNT_FACTOR_DIVISOR;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score: u64 = ((weight * delay_factor) as f64 * amount_factor).round() as u64;
    score
}
