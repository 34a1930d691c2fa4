#![allow(dead_code)]

use async_trait::async_trait;
use nearby_services::app::ports::{FallbackCachePort, RemoteQueryPort};
use nearby_services::app::LookupService;
use nearby_services::catalog::CategoryCatalog;
use nearby_services::config::ResourceConfig;
use nearby_services::error::{CacheError, RemoteQueryError};
use nearby_services::infra::InMemoryFallbackCache;
use nearby_services::types::RawRecord;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn rows(values: Vec<Value>) -> Vec<RawRecord> {
    values
        .into_iter()
        .map(|v| v.as_object().cloned().expect("test rows are objects"))
        .collect()
}

pub fn catalog() -> Arc<CategoryCatalog> {
    Arc::new(
        CategoryCatalog::standard(&ResourceConfig {
            family_services: "fs-resource".into(),
            schools: "schools-resource".into(),
            early_education: "ece-resource".into(),
        })
        .expect("standard catalog"),
    )
}

/// Remote catalog double whose responses and failures are controlled by the test.
#[derive(Clone, Default)]
pub struct ScriptedRemote {
    pub records: Arc<Mutex<Vec<RawRecord>>>,
    pub failing: Arc<AtomicBool>,
    pub calls: Arc<AtomicUsize>,
    pub last_sql: Arc<Mutex<Option<String>>>,
}

impl ScriptedRemote {
    pub fn returning(records: Vec<RawRecord>) -> Self {
        let remote = Self::default();
        *remote.records.lock().unwrap() = records;
        remote
    }

    pub fn set_records(&self, records: Vec<RawRecord>) {
        *self.records.lock().unwrap() = records;
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteQueryPort for ScriptedRemote {
    async fn execute(&self, sql: &str) -> Result<Vec<RawRecord>, RemoteQueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_sql.lock().unwrap() = Some(sql.to_string());
        if self.failing.load(Ordering::SeqCst) {
            return Err(RemoteQueryError::Status { status: 500 });
        }
        Ok(self.records.lock().unwrap().clone())
    }
}

/// Cache double that is never reachable.
pub struct UnavailableCache;

#[async_trait]
impl FallbackCachePort for UnavailableCache {
    async fn get(&self, _category_id: &str) -> Result<Option<Vec<RawRecord>>, CacheError> {
        Err(CacheError::Poisoned)
    }

    async fn set(&self, _category_id: &str, _records: &[RawRecord]) -> Result<(), CacheError> {
        Err(CacheError::Poisoned)
    }
}

pub fn service_with(remote: ScriptedRemote, cache: Box<dyn FallbackCachePort>) -> LookupService {
    LookupService::new(catalog(), Box::new(remote), cache)
}

pub fn service(remote: ScriptedRemote) -> LookupService {
    service_with(remote, Box::new(InMemoryFallbackCache::new()))
}
