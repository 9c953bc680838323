//! Integration tests for the durable job queue.

mod helpers;

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use adscope_entity::job::{
    AnalyzeAdPayload, FetchAdsPayload, JobPayload, JobStatus, JobType,
};

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_claim_is_atomic_under_contention() {
    let app = helpers::TestApp::new().await;

    let job = app
        .dispatcher
        .enqueue(
            JobPayload::AnalyzeAd(AnalyzeAdPayload {
                ad_id: Uuid::new_v4(),
            }),
            None,
        )
        .await
        .unwrap();

    let jobs = Arc::new(app.jobs.clone());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let jobs = Arc::clone(&jobs);
        let id = job.id;
        handles.push(tokio::spawn(async move { jobs.claim(id).await.unwrap() }));
    }

    let mut wins = 0;
    for handle in handles {
        if handle.await.unwrap() {
            wins += 1;
        }
    }
    assert_eq!(wins, 1, "exactly one concurrent claimant must win");

    let claimed = app.jobs.find_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(claimed.status, JobStatus::Running);
    assert_eq!(claimed.attempts, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_claim_fails_once_job_left_pending() {
    let app = helpers::TestApp::new().await;

    let job = app
        .dispatcher
        .enqueue(
            JobPayload::AnalyzeAd(AnalyzeAdPayload {
                ad_id: Uuid::new_v4(),
            }),
            None,
        )
        .await
        .unwrap();

    app.jobs.mark_completed(job.id).await.unwrap();
    assert!(!app.jobs.claim(job.id).await.unwrap());

    let unchanged = app.jobs.find_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, JobStatus::Completed);
    assert_eq!(unchanged.attempts, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_due_jobs_come_back_oldest_first() {
    let app = helpers::TestApp::new().await;

    let mut created = Vec::new();
    for _ in 0..3 {
        let job = app
            .dispatcher
            .enqueue(
                JobPayload::AnalyzeAd(AnalyzeAdPayload {
                    ad_id: Uuid::new_v4(),
                }),
                None,
            )
            .await
            .unwrap();
        created.push(job.id);
    }

    let due = app.jobs.find_due(10).await.unwrap();
    let due_ids: Vec<Uuid> = due.iter().map(|j| j.id).collect();
    assert_eq!(due_ids, created);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_deferred_job_is_not_due() {
    let app = helpers::TestApp::new().await;

    app.dispatcher
        .enqueue(
            JobPayload::AnalyzeAd(AnalyzeAdPayload {
                ad_id: Uuid::new_v4(),
            }),
            Some(Utc::now() + Duration::hours(1)),
        )
        .await
        .unwrap();

    assert!(app.jobs.find_due(10).await.unwrap().is_empty());
    assert!(app.processor.process_jobs(None).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_failed_job_does_not_block_later_jobs() {
    let app = helpers::TestApp::new().await;
    let brand_id = app.create_brand("Acme").await;
    let competitor_id = app.create_competitor(brand_id, "Rival Co").await;

    // References an ad that does not exist, so it must fail.
    let bad = app
        .dispatcher
        .enqueue(
            JobPayload::AnalyzeAd(AnalyzeAdPayload {
                ad_id: Uuid::new_v4(),
            }),
            None,
        )
        .await
        .unwrap();

    let good = app
        .dispatcher
        .enqueue(
            JobPayload::FetchCompetitorAds(FetchAdsPayload {
                competitor_id,
                limit: Some(3),
            }),
            None,
        )
        .await
        .unwrap();

    let outcomes = app.processor.process_jobs(None).await.unwrap();
    assert_eq!(outcomes.len(), 2);

    let failed = app.jobs.find_by_id(bad.id).await.unwrap().unwrap();
    assert_eq!(failed.status, JobStatus::Failed);
    assert_eq!(failed.last_error.as_deref(), Some("Ad not found"));
    assert!(failed.completed_at.is_none());

    let completed = app.jobs.find_by_id(good.id).await.unwrap().unwrap();
    assert_eq!(completed.status, JobStatus::Completed);
    assert!(completed.last_error.is_none());
    assert!(completed.completed_at.is_some());

    // The fetch really ran: the stub scraper's ads were persisted.
    let ads = app.ads.find_by_competitor(competitor_id, 50).await.unwrap();
    assert_eq!(ads.len(), 3);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_malformed_payload_fails_that_job_only() {
    let app = helpers::TestApp::new().await;

    // Insert a job whose payload does not match its type.
    let bad = app
        .jobs
        .create(
            JobType::FetchCompetitorAds,
            &serde_json::json!({ "competitorId": "not-a-uuid" }),
            Utc::now(),
        )
        .await
        .unwrap();

    let outcomes = app.processor.process_jobs(None).await.unwrap();
    assert_eq!(outcomes.len(), 1);

    let failed = app.jobs.find_by_id(bad.id).await.unwrap().unwrap();
    assert_eq!(failed.status, JobStatus::Failed);
    let error = failed.last_error.unwrap();
    assert!(
        error.starts_with("Malformed FETCH_COMPETITOR_ADS payload"),
        "unexpected error: {error}"
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_batch_limit_caps_one_drain() {
    let app = helpers::TestApp::new().await;

    for _ in 0..4 {
        app.dispatcher
            .enqueue(
                JobPayload::AnalyzeAd(AnalyzeAdPayload {
                    ad_id: Uuid::new_v4(),
                }),
                None,
            )
            .await
            .unwrap();
    }

    let first = app.processor.process_jobs(Some(3)).await.unwrap();
    assert_eq!(first.len(), 3);

    let second = app.processor.process_jobs(Some(3)).await.unwrap();
    assert_eq!(second.len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_limit_one_takes_the_oldest_job() {
    let app = helpers::TestApp::new().await;

    let older = app
        .dispatcher
        .enqueue(
            JobPayload::AnalyzeAd(AnalyzeAdPayload {
                ad_id: Uuid::new_v4(),
            }),
            None,
        )
        .await
        .unwrap();
    let newer = app
        .dispatcher
        .enqueue(
            JobPayload::AnalyzeAd(AnalyzeAdPayload {
                ad_id: Uuid::new_v4(),
            }),
            None,
        )
        .await
        .unwrap();

    let outcomes = app.processor.process_jobs(Some(1)).await.unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].id, older.id);

    let untouched = app.jobs.find_by_id(newer.id).await.unwrap().unwrap();
    assert_eq!(untouched.status, JobStatus::Pending);
    assert_eq!(untouched.attempts, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_completion_clears_previous_error() {
    let app = helpers::TestApp::new().await;

    let job = app
        .dispatcher
        .enqueue(
            JobPayload::AnalyzeAd(AnalyzeAdPayload {
                ad_id: Uuid::new_v4(),
            }),
            None,
        )
        .await
        .unwrap();

    app.jobs.mark_failed(job.id, "transient").await.unwrap();
    app.jobs.mark_completed(job.id).await.unwrap();

    let done = app.jobs.find_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(done.status, JobStatus::Completed);
    assert!(done.last_error.is_none());
}
