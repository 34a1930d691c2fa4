use crate::app::ports::{FallbackCachePort, RemoteQueryPort};
use crate::catalog::CategoryCatalog;
use crate::error::{LookupError, RemoteQueryError, Result};
use crate::observability::metrics;
use crate::types::RawRecord;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Looks up listings for a category, falling back to the last good result set
/// when the data catalog is unavailable.
pub struct LookupUseCase<Q: RemoteQueryPort + ?Sized, C: FallbackCachePort + ?Sized> {
    pub catalog: Arc<CategoryCatalog>,
    pub remote: Box<Q>,
    pub cache: Box<C>,
}

impl<Q: RemoteQueryPort + ?Sized, C: FallbackCachePort + ?Sized> LookupUseCase<Q, C> {
    pub fn new(catalog: Arc<CategoryCatalog>, remote: Box<Q>, cache: Box<C>) -> Self {
        Self { catalog, remote, cache }
    }

    #[instrument(skip(self))]
    pub async fn get_for_category(&self, category_id: &str) -> Result<Vec<RawRecord>> {
        let category = self.catalog.get_category(category_id)?;
        let sql = category.build_query()?;
        debug!("Querying {} source for '{}'", category.source_type(), category_id);

        match self.remote.execute(&sql).await {
            Ok(records) => {
                // A failed refresh only costs freshness on the next outage
                match self.cache.set(category_id, &records).await {
                    Ok(()) => metrics::cache::write_success(),
                    Err(e) => {
                        metrics::cache::write_error();
                        warn!("Failed to store results for '{}' in fallback cache: {}", category_id, e);
                    }
                }
                Ok(records)
            }
            Err(remote_err) => self.fall_back(category_id, remote_err).await,
        }
    }

    async fn fall_back(
        &self,
        category_id: &str,
        remote_err: RemoteQueryError,
    ) -> Result<Vec<RawRecord>> {
        let cached = match self.cache.get(category_id).await {
            Ok(cached) => cached,
            Err(cache_err) => {
                warn!("Fallback cache unavailable for '{}': {}", category_id, cache_err);
                None
            }
        };

        match cached {
            Some(records) => {
                metrics::cache::fallback_served(category_id);
                warn!(
                    "Failed to fetch results from data catalog ({}). Returning {} cached results",
                    remote_err,
                    records.len()
                );
                Ok(records)
            }
            None => {
                metrics::cache::fallback_miss(category_id);
                info!("No cached results for '{}' to fall back on", category_id);
                Err(LookupError::RemoteQuery(remote_err))
            }
        }
    }
}
