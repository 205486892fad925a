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

mod boundary;
mod error;
mod export;
mod feed;
mod resolution;
mod triage;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use boundary::{CaseStore, NoticeKind, Notifier, StoreError};
pub use error::ApiError;
pub use export::export_decisions_csv;
pub use feed::{CaseFeed, FeedOutcome};
pub use resolution::{ConfirmOutcome, ResolutionService};
pub use triage::TriageService;
