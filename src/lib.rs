pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod query;
pub mod server;
pub mod types;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

pub mod observability;

use crate::app::ports::FallbackCachePort;
use crate::app::LookupService;
use crate::catalog::CategoryCatalog;
use crate::config::Config;
use crate::infra::{InMemoryFallbackCache, ReqwestQueryClient, SqliteFallbackCache};
use std::sync::Arc;

/// Wire the lookup service from configuration.
///
/// With `ephemeral_cache` the fallback cache lives only for this process
/// instead of the SQLite file at `cache.path`.
pub fn build_lookup_service(config: &Config, ephemeral_cache: bool) -> anyhow::Result<LookupService> {
    let catalog = Arc::new(CategoryCatalog::standard(&config.resources)?);
    let remote = ReqwestQueryClient::new(config.remote.query_url.clone(), config.remote.timeout())?;
    let cache: Box<dyn FallbackCachePort> = if ephemeral_cache {
        Box::new(InMemoryFallbackCache::new())
    } else {
        Box::new(SqliteFallbackCache::open(&config.cache.path)?)
    };
    Ok(LookupService::new(catalog, Box::new(remote), cache))
}
