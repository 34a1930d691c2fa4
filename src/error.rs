use thiserror::Error;

/// Any failure talking to the remote data catalog.
///
/// Transport, status and decoding problems all collapse into this one type so
/// the lookup orchestrator has a single place to decide between falling back
/// to cached results and propagating the failure.
#[derive(Error, Debug)]
pub enum RemoteQueryError {
    #[error("HTTP request to data catalog failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("data catalog responded with status {status}")]
    Status { status: u16 },

    #[error("unexpected response from data catalog: {message}")]
    Malformed { message: String },
}

/// Failure reading or writing the durable fallback cache.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("cached records could not be (de)serialized: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache connection lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error(transparent)]
    RemoteQuery(#[from] RemoteQueryError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },

    #[error("Category '{0}' registered more than once")]
    DuplicateCategory(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
