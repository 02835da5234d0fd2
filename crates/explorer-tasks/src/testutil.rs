//! In-memory fakes for the external service seams, shared across the
//! test modules in this crate.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};

use explorer_core::result::AppResult;
use explorer_core::traits::exporter::QueryExporter;
use explorer_core::traits::mailer::Mailer;
use explorer_core::traits::store::ReportStore;
use explorer_entity::query::model::Query;
use explorer_entity::query::store::{QueryLogStore, QueryStore};
use explorer_entity::query::QueryLog;
use explorer_entity::task::request::TaskRequest;

use crate::deps::TaskDeps;
use crate::dispatch::TaskDispatcher;

/// Build a query fixture.
pub fn query(id: i64, title: &str, snapshot: bool) -> Query {
    Query {
        id,
        title: title.to_string(),
        sql: "SELECT 1".to_string(),
        description: None,
        snapshot,
        created_at: Utc::now(),
        last_run_at: None,
    }
}

/// Build a query log fixture whose `run_at` is `age_days` days in the past.
pub fn log(id: i64, age_days: i64) -> QueryLog {
    QueryLog {
        id,
        query_id: None,
        sql: "SELECT 1".to_string(),
        duration_ms: Some(1.5),
        run_at: Utc::now() - Duration::days(age_days),
    }
}

/// Fixed set of stored queries.
#[derive(Debug, Default)]
pub struct MemoryQueryStore {
    pub queries: Vec<Query>,
}

#[async_trait]
impl QueryStore for MemoryQueryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Query>> {
        Ok(self.queries.iter().find(|q| q.id == id).cloned())
    }

    async fn snapshot_ids(&self) -> AppResult<Vec<i64>> {
        Ok(self
            .queries
            .iter()
            .filter(|q| q.snapshot)
            .map(|q| q.id)
            .collect())
    }
}

/// Mutable set of query logs with age-based deletion.
#[derive(Debug, Default)]
pub struct MemoryQueryLogStore {
    pub logs: Mutex<Vec<QueryLog>>,
}

impl MemoryQueryLogStore {
    pub fn insert(&self, log: QueryLog) {
        self.logs.lock().unwrap().push(log);
    }
}

#[async_trait]
impl QueryLogStore for MemoryQueryLogStore {
    async fn count_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<i64> {
        Ok(self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.run_at < cutoff)
            .count() as i64)
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let mut logs = self.logs.lock().unwrap();
        let before = logs.len();
        logs.retain(|l| l.run_at >= cutoff);
        Ok((before - logs.len()) as u64)
    }
}

/// Exporter returning a fixed CSV payload.
#[derive(Debug)]
pub struct StaticExporter {
    pub csv: Bytes,
}

impl Default for StaticExporter {
    fn default() -> Self {
        Self {
            csv: Bytes::from_static(b"a,b,c\r\n1,2,3\r\n"),
        }
    }
}

#[async_trait]
impl QueryExporter for StaticExporter {
    async fn export_csv(&self, _query_id: i64) -> AppResult<Bytes> {
        Ok(self.csv.clone())
    }
}

/// Report store recording every put; presign echoes the key back.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub puts: Mutex<Vec<(String, Bytes)>>,
}

#[async_trait]
impl ReportStore for RecordingStore {
    async fn put(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.puts.lock().unwrap().push((key.to_string(), data));
        Ok(())
    }

    async fn presign(&self, key: &str) -> AppResult<String> {
        Ok(format!("https://reports.example.com/{key}"))
    }
}

/// Mailer recording every (to, subject, body) triple.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Dispatcher recording every request without executing it.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub dispatched: Mutex<Vec<TaskRequest>>,
}

#[async_trait]
impl TaskDispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: TaskRequest) -> AppResult<()> {
        self.dispatched.lock().unwrap().push(request);
        Ok(())
    }
}

/// A full dependency bundle plus handles to the recording fakes.
pub struct TestHarness {
    pub deps: TaskDeps,
    pub store: Arc<RecordingStore>,
    pub mailer: Arc<RecordingMailer>,
    pub query_logs: Arc<MemoryQueryLogStore>,
}

impl TestHarness {
    pub fn new(queries: Vec<Query>) -> Self {
        let store = Arc::new(RecordingStore::default());
        let mailer = Arc::new(RecordingMailer::default());
        let query_logs = Arc::new(MemoryQueryLogStore::default());

        let deps = TaskDeps {
            queries: Arc::new(MemoryQueryStore { queries }),
            query_logs: Arc::clone(&query_logs) as Arc<dyn QueryLogStore>,
            exporter: Arc::new(StaticExporter::default()),
            store: Arc::clone(&store) as Arc<dyn ReportStore>,
            mailer: Arc::clone(&mailer) as Arc<dyn Mailer>,
        };

        Self {
            deps,
            store,
            mailer,
            query_logs,
        }
    }
}
