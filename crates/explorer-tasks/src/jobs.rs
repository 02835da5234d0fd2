//! The four task entry points and the shared upload helper.
//!
//! Each task is a single linear sequence with no intermediate state, no
//! retry, and no resumption after partial failure; errors propagate to
//! whatever invoked the task (CLI, scheduler, or inline dispatcher).

use bytes::Bytes;
use chrono::{Duration, Utc};

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_entity::query::model::Query;
use explorer_entity::task::request::TaskRequest;
use explorer_storage::keys;

use crate::deps::TaskDeps;
use crate::dispatch::TaskDispatcher;
use crate::report;

/// Run a stored query, upload the CSV under a random key, and email the
/// presigned download link to `email`.
///
/// Returns the presigned URL. Fails with a not-found error if the query
/// does not exist; exporter/storage/mail errors propagate unchanged.
pub async fn execute_query(deps: &TaskDeps, query_id: i64, email: &str) -> AppResult<String> {
    let query = find_query(deps, query_id).await?;
    let data = deps.exporter.export_csv(query.id).await?;

    let key = keys::export_key();
    let url = upload(deps, &key, data).await?;

    deps.mailer
        .send(
            email,
            &report::ready_subject(&query.title),
            &report::ready_body(&url),
        )
        .await?;

    Ok(url)
}

/// Snapshot a single query: export and upload under a key derived from the
/// query id and the current timestamp. No email is sent.
///
/// Returns the object key the snapshot was stored under.
pub async fn snapshot_query(deps: &TaskDeps, query_id: i64) -> AppResult<String> {
    tracing::info!(query_id, "Starting snapshot for query");
    let query = find_query(deps, query_id).await?;
    let data = deps.exporter.export_csv(query.id).await?;

    let key = keys::snapshot_key(query.id, Utc::now());
    tracing::info!(query_id, key = %key, "Uploading snapshot");
    let url = upload(deps, &key, data).await?;
    tracing::info!(query_id, url = %url, "Done uploading snapshot");

    Ok(key)
}

/// Dispatch one `snapshot_query` task per query flagged `snapshot = true`.
///
/// Fire-and-forget: individual snapshot outcomes are invisible here. An
/// enqueue failure still propagates. Returns the number of dispatched tasks.
pub async fn snapshot_queries(
    deps: &TaskDeps,
    dispatcher: &dyn TaskDispatcher,
) -> AppResult<usize> {
    tracing::info!("Starting query snapshots...");
    let ids = deps.queries.snapshot_ids().await?;
    tracing::info!(count = ids.len(), "Found queries to snapshot, dispatching tasks");

    for query_id in &ids {
        dispatcher
            .dispatch(TaskRequest::SnapshotQuery {
                query_id: *query_id,
            })
            .await?;
    }

    tracing::info!("Done dispatching snapshot tasks");
    Ok(ids.len())
}

/// Delete all query log rows with `run_at` older than `days` days.
///
/// Bulk delete, no batching, no dry-run, irreversible. Returns the number
/// of rows deleted.
pub async fn truncate_querylogs(deps: &TaskDeps, days: i64) -> AppResult<u64> {
    let cutoff = Utc::now() - Duration::days(days);

    let count = deps.query_logs.count_older_than(cutoff).await?;
    tracing::info!(count, days, "Deleting query log entries older than threshold");

    let deleted = deps.query_logs.delete_older_than(cutoff).await?;
    tracing::info!(deleted, "Done deleting query log entries");

    Ok(deleted)
}

/// Shared upload helper: write the bytes under `key` and presign a
/// retrieval URL. No content-type, no retry, no checksum.
pub(crate) async fn upload(deps: &TaskDeps, key: &str, data: Bytes) -> AppResult<String> {
    deps.store.put(key, data).await?;
    deps.store.presign(key).await
}

async fn find_query(deps: &TaskDeps, query_id: i64) -> AppResult<Query> {
    deps.queries
        .find_by_id(query_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Query {query_id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{self, TestHarness};
    use explorer_core::error::ErrorKind;

    #[tokio::test]
    async fn test_execute_query_sends_one_email_and_uploads_once() {
        let h = TestHarness::new(vec![testutil::query(1, "testquery", false)]);

        let url = execute_query(&h.deps, 1, "reports@example.com")
            .await
            .unwrap();

        let puts = h.store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert!(puts[0].0.ends_with(".csv"));

        let sent = h.mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (to, subject, body) = &sent[0];
        assert_eq!(to, "reports@example.com");
        assert_eq!(subject, "[SQL Explorer] Report \"testquery\" is ready");
        assert!(body.contains(&url));
    }

    #[tokio::test]
    async fn test_execute_query_random_keys_differ() {
        let h = TestHarness::new(vec![testutil::query(1, "q", false)]);

        execute_query(&h.deps, 1, "a@example.com").await.unwrap();
        execute_query(&h.deps, 1, "a@example.com").await.unwrap();

        let puts = h.store.puts.lock().unwrap();
        assert_eq!(puts.len(), 2);
        assert_ne!(puts[0].0, puts[1].0);
    }

    #[tokio::test]
    async fn test_execute_query_missing_query_is_not_found() {
        let h = TestHarness::new(vec![]);

        let err = execute_query(&h.deps, 99, "a@example.com")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        assert!(h.store.puts.lock().unwrap().is_empty());
        assert!(h.mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_query_uses_deterministic_key_and_no_email() {
        let h = TestHarness::new(vec![testutil::query(7, "snap", true)]);

        let key = snapshot_query(&h.deps, 7).await.unwrap();

        assert!(key.starts_with("query-7.snap-"));
        assert!(key.ends_with(".csv"));

        let puts = h.store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].0, key);
        assert!(h.mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_query_missing_query_is_not_found() {
        let h = TestHarness::new(vec![]);

        let err = snapshot_query(&h.deps, 5).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_snapshot_queries_dispatches_flagged_only() {
        let h = TestHarness::new(vec![
            testutil::query(1, "a", true),
            testutil::query(2, "b", true),
            testutil::query(3, "c", true),
            testutil::query(4, "d", false),
        ]);
        let dispatcher = testutil::RecordingDispatcher::default();

        let dispatched = snapshot_queries(&h.deps, &dispatcher).await.unwrap();
        assert_eq!(dispatched, 3);

        let requests = dispatcher.dispatched.lock().unwrap();
        assert_eq!(
            *requests,
            vec![
                TaskRequest::SnapshotQuery { query_id: 1 },
                TaskRequest::SnapshotQuery { query_id: 2 },
                TaskRequest::SnapshotQuery { query_id: 3 },
            ]
        );
    }

    #[tokio::test]
    async fn test_truncate_querylogs_boundary() {
        let h = TestHarness::new(vec![]);
        h.query_logs.insert(testutil::log(1, 31));
        h.query_logs.insert(testutil::log(2, 29));

        let deleted = truncate_querylogs(&h.deps, 30).await.unwrap();
        assert_eq!(deleted, 1);

        let remaining = h.query_logs.logs.lock().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[tokio::test]
    async fn test_truncate_querylogs_empty_is_zero() {
        let h = TestHarness::new(vec![]);
        assert_eq!(truncate_querylogs(&h.deps, 30).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_upload_returns_presigned_url_for_key() {
        let h = TestHarness::new(vec![]);

        let url = upload(&h.deps, "abc.csv", Bytes::from_static(b"a,b\n1,2\n"))
            .await
            .unwrap();
        assert_eq!(url, "https://reports.example.com/abc.csv");
    }
}
