// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The live case feed behind queue views.
//!
//! When filters or queue selection change rapidly, several list fetches
//! may be in flight at once. Only the most recently initiated fetch may
//! land: each refresh captures an epoch token at initiation and discards
//! its own result if the epoch moved on before it completed. Closing a
//! tab bumps the epoch the same way, so an unmounted view can never
//! write back into shared state. Stale results are a normal occurrence,
//! logged at debug and never surfaced to the user.

use crate::boundary::{CaseStore, StoreError};
use crate::error::ApiError;
use case_triage_domain::{Case, FilterState};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// The outcome of one feed refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// The fetched rows were installed as the visible set.
    Applied {
        /// How many rows were installed.
        count: usize,
    },
    /// A newer refresh superseded this one; its result was discarded.
    Stale,
}

/// The shared, refreshable case list behind a queue view.
#[derive(Debug, Default)]
pub struct CaseFeed {
    /// Monotone refresh counter; a refresh only lands if the counter
    /// still matches the token it captured at initiation.
    epoch: AtomicU64,
    rows: Mutex<Vec<Case>>,
}

impl CaseFeed {
    /// Creates an empty feed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            epoch: AtomicU64::new(0),
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Fetches the case list and installs it unless superseded.
    ///
    /// Captures an epoch token, performs the asynchronous list call, and
    /// on completion installs the rows only if no newer refresh (and no
    /// [`invalidate`](Self::invalidate)) started in the meantime.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Store` if the list call fails. A failed fetch
    /// never clears previously installed rows.
    pub async fn refresh<S: CaseStore>(
        &self,
        store: &S,
        filter: &FilterState,
    ) -> Result<FeedOutcome, ApiError> {
        let token: u64 = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, "case feed refresh started");

        let cases: Vec<Case> = store.list(filter).await.map_err(|e: StoreError| {
            warn!(token, error = %e, "case feed refresh failed");
            ApiError::Store(e)
        })?;

        let mut rows = self.rows.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        // Re-check under the row lock so a newer refresh cannot install
        // between the check and the write.
        if self.epoch.load(Ordering::SeqCst) != token {
            debug!(token, "discarding stale case feed result");
            return Ok(FeedOutcome::Stale);
        }

        let count: usize = cases.len();
        *rows = cases;
        debug!(token, count, "case feed refresh applied");
        Ok(FeedOutcome::Applied { count })
    }

    /// Invalidates every in-flight refresh.
    ///
    /// Called when the owning view closes; any fetch still in flight
    /// will observe a moved epoch and discard its result.
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns a copy of the currently visible rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Case> {
        self.rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}
