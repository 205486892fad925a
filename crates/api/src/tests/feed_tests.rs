// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{FailingCaseStore, GatedCaseStore, MemoryCaseStore, create_test_case};
use crate::{ApiError, CaseFeed, FeedOutcome};
use case_triage_domain::{Case, CaseStatus, FilterState};
use std::sync::Arc;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_refresh_installs_fetched_rows() {
    let store: MemoryCaseStore = MemoryCaseStore::with_cases(vec![
        create_test_case("case-001", CaseStatus::Pending),
        create_test_case("case-002", CaseStatus::Escalated),
    ]);
    let feed: CaseFeed = CaseFeed::new();

    let outcome: FeedOutcome = feed
        .refresh(&store, &FilterState::default())
        .await
        .unwrap();

    assert_eq!(outcome, FeedOutcome::Applied { count: 2 });
    assert_eq!(feed.rows().len(), 2);
}

#[tokio::test]
async fn test_refresh_applies_the_filter() {
    let store: MemoryCaseStore = MemoryCaseStore::with_cases(vec![
        create_test_case("case-001", CaseStatus::Pending),
        create_test_case("case-002", CaseStatus::Escalated),
    ]);
    let feed: CaseFeed = CaseFeed::new();

    let filter: FilterState = FilterState {
        status: vec![CaseStatus::Pending],
        ..FilterState::default()
    };
    let outcome: FeedOutcome = feed.refresh(&store, &filter).await.unwrap();

    assert_eq!(outcome, FeedOutcome::Applied { count: 1 });
    assert_eq!(feed.rows()[0].id, "case-001");
}

#[tokio::test]
async fn test_slow_stale_fetch_cannot_overwrite_fresher_result() {
    // Fetch A starts first but completes after fetch B; the feed must
    // reflect B's rows, not A's.
    let (started_tx, started_rx) = oneshot::channel::<()>();
    let (gate_tx, gate_rx) = oneshot::channel::<()>();

    let slow_store: Arc<GatedCaseStore> = Arc::new(GatedCaseStore::new(
        vec![create_test_case("stale-case", CaseStatus::Pending)],
        started_tx,
        gate_rx,
    ));
    let fast_store: MemoryCaseStore =
        MemoryCaseStore::with_cases(vec![create_test_case("fresh-case", CaseStatus::Pending)]);
    let feed: Arc<CaseFeed> = Arc::new(CaseFeed::new());

    let feed_a: Arc<CaseFeed> = Arc::clone(&feed);
    let store_a: Arc<GatedCaseStore> = Arc::clone(&slow_store);
    let fetch_a = tokio::spawn(async move {
        feed_a.refresh(store_a.as_ref(), &FilterState::default()).await
    });

    // Wait until A has captured its epoch token and parked.
    started_rx.await.unwrap();

    // B starts later and completes first.
    let outcome_b: FeedOutcome = feed
        .refresh(&fast_store, &FilterState::default())
        .await
        .unwrap();
    assert_eq!(outcome_b, FeedOutcome::Applied { count: 1 });

    // Release A; its result must be discarded as stale.
    gate_tx.send(()).unwrap();
    let outcome_a: FeedOutcome = fetch_a.await.unwrap().unwrap();
    assert_eq!(outcome_a, FeedOutcome::Stale);

    let rows: Vec<Case> = feed.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "fresh-case");
}

#[tokio::test]
async fn test_invalidate_discards_in_flight_fetch() {
    let (started_tx, started_rx) = oneshot::channel::<()>();
    let (gate_tx, gate_rx) = oneshot::channel::<()>();

    let slow_store: Arc<GatedCaseStore> = Arc::new(GatedCaseStore::new(
        vec![create_test_case("stale-case", CaseStatus::Pending)],
        started_tx,
        gate_rx,
    ));
    let feed: Arc<CaseFeed> = Arc::new(CaseFeed::new());

    let feed_a: Arc<CaseFeed> = Arc::clone(&feed);
    let store_a: Arc<GatedCaseStore> = Arc::clone(&slow_store);
    let fetch = tokio::spawn(async move {
        feed_a.refresh(store_a.as_ref(), &FilterState::default()).await
    });

    started_rx.await.unwrap();

    // The owning view closes before the fetch lands.
    feed.invalidate();
    gate_tx.send(()).unwrap();

    let outcome: FeedOutcome = fetch.await.unwrap().unwrap();
    assert_eq!(outcome, FeedOutcome::Stale);
    assert!(feed.rows().is_empty());
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_rows() {
    let store: MemoryCaseStore =
        MemoryCaseStore::with_cases(vec![create_test_case("case-001", CaseStatus::Pending)]);
    let feed: CaseFeed = CaseFeed::new();
    feed.refresh(&store, &FilterState::default()).await.unwrap();

    let result: Result<FeedOutcome, ApiError> =
        feed.refresh(&FailingCaseStore, &FilterState::default()).await;

    assert!(matches!(result, Err(ApiError::Store(_))));
    assert_eq!(feed.rows().len(), 1);
}
