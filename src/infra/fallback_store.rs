use crate::app::ports::FallbackCachePort;
use crate::error::CacheError;
use crate::types::RawRecord;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// Durable fallback cache backed by a SQLite file.
///
/// One row per category; a write replaces the row. Rows are never expired.
pub struct SqliteFallbackCache {
    conn: Mutex<Connection>,
}

impl SqliteFallbackCache {
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, CacheError> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(db_path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, CacheError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            CREATE TABLE IF NOT EXISTS category_results (
                category_id  TEXT PRIMARY KEY,
                records      TEXT NOT NULL,
                stored_at    INTEGER NOT NULL
            );
            "#,
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn read(&self, category_id: &str) -> Result<Option<Vec<RawRecord>>, CacheError> {
        let conn = self.conn.lock().map_err(|_| CacheError::Poisoned)?;
        let mut stmt = conn
            .prepare("SELECT records, stored_at FROM category_results WHERE category_id = ?1")?;
        let mut rows = stmt.query(params![category_id])?;
        if let Some(row) = rows.next()? {
            let json: String = row.get(0)?;
            let stored_at: i64 = row.get(1)?;
            let age_secs = chrono::Utc::now().timestamp() - stored_at;
            info!("Fallback entry for '{}' is {}s old", category_id, age_secs);
            Ok(Some(serde_json::from_str(&json)?))
        } else {
            Ok(None)
        }
    }

    fn write(&self, category_id: &str, records: &[RawRecord]) -> Result<(), CacheError> {
        let json = serde_json::to_string(records)?;
        let now = chrono::Utc::now().timestamp();
        let conn = self.conn.lock().map_err(|_| CacheError::Poisoned)?;
        conn.execute(
            "INSERT INTO category_results (category_id, records, stored_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(category_id) DO UPDATE SET records=excluded.records, stored_at=excluded.stored_at",
            params![category_id, json, now],
        )?;
        debug!("Cached {} records for '{}'", records.len(), category_id);
        Ok(())
    }
}

#[async_trait]
impl FallbackCachePort for SqliteFallbackCache {
    async fn get(&self, category_id: &str) -> Result<Option<Vec<RawRecord>>, CacheError> {
        self.read(category_id)
    }

    async fn set(&self, category_id: &str, records: &[RawRecord]) -> Result<(), CacheError> {
        self.write(category_id, records)
    }
}

/// Process-local fallback cache for tests and throwaway runs.
#[derive(Default)]
pub struct InMemoryFallbackCache {
    entries: Mutex<HashMap<String, Vec<RawRecord>>>,
}

impl InMemoryFallbackCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FallbackCachePort for InMemoryFallbackCache {
    async fn get(&self, category_id: &str) -> Result<Option<Vec<RawRecord>>, CacheError> {
        let entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(category_id).cloned())
    }

    async fn set(&self, category_id: &str, records: &[RawRecord]) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        entries.insert(category_id.to_string(), records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn record(value: serde_json::Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn missing_entry_is_none() {
        let cache = SqliteFallbackCache::open_in_memory().unwrap();
        assert!(cache.get("antenatal").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites_previous_entry() {
        let cache = SqliteFallbackCache::open_in_memory().unwrap();
        cache.set("antenatal", &[record(json!({"FSD_ID": 1}))]).await.unwrap();
        cache
            .set("antenatal", &[record(json!({"FSD_ID": 2})), record(json!({"FSD_ID": 3}))])
            .await
            .unwrap();

        let cached = cache.get("antenatal").await.unwrap().unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0]["FSD_ID"], json!(2));

        let conn = cache.conn.lock().unwrap();
        let rows: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM category_results WHERE category_id = 'antenatal' AND stored_at > 0",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn entries_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.db");
        let records = vec![record(json!({"School_Id": 10, "Org_Name": "Kura"}))];

        {
            let cache = SqliteFallbackCache::open(&path).unwrap();
            cache.set("primary-schools", &records).await.unwrap();
        }

        let reopened = SqliteFallbackCache::open(&path).unwrap();
        assert_eq!(reopened.get("primary-schools").await.unwrap(), Some(records));
    }

    #[tokio::test]
    async fn column_order_is_preserved() {
        let cache = SqliteFallbackCache::open_in_memory().unwrap();
        let mut row = RawRecord::new();
        row.insert("Z".into(), json!(1));
        row.insert("A".into(), json!(2));
        cache.set("budgeting", &[row]).await.unwrap();

        let cached = cache.get("budgeting").await.unwrap().unwrap();
        let keys: Vec<&String> = cached[0].keys().collect();
        assert_eq!(keys, vec!["Z", "A"]);
    }

    #[tokio::test]
    async fn empty_result_set_is_still_an_entry() {
        let cache = InMemoryFallbackCache::new();
        cache.set("well-child", &[]).await.unwrap();
        assert_eq!(cache.get("well-child").await.unwrap(), Some(vec![]));
        assert!(cache.get("antenatal").await.unwrap().is_none());
    }
}
