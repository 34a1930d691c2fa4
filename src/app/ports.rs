use crate::error::{CacheError, RemoteQueryError};
use crate::types::RawRecord;
use async_trait::async_trait;

/// Executes a SQL query against the remote data catalog.
#[async_trait]
pub trait RemoteQueryPort: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<Vec<RawRecord>, RemoteQueryError>;
}

/// Last-known-good results per category, kept only so lookups survive upstream outages.
///
/// This is not a freshness cache: entries never expire and are read only after
/// a remote failure.
#[async_trait]
pub trait FallbackCachePort: Send + Sync {
    async fn get(&self, category_id: &str) -> Result<Option<Vec<RawRecord>>, CacheError>;
    async fn set(&self, category_id: &str, records: &[RawRecord]) -> Result<(), CacheError>;
}
