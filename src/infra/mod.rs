// Infrastructure adapters for the application ports

pub mod fallback_store;
pub mod http_client;

pub use fallback_store::{InMemoryFallbackCache, SqliteFallbackCache};
pub use http_client::ReqwestQueryClient;
