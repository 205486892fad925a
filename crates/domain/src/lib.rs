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
mod filter;
mod scoring;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use filter::{BoundRange, DateRange, FilterPatch, FilterState};
pub use scoring::{parse_amount, priority_score, sla_deadline_days};
pub use types::{Case, CaseStatus, Impact};
