use serde_json::{Map, Value};

/// A single row as returned by the data catalog, in column order.
pub type RawRecord = Map<String, Value>;

/// Field names read from family services rows.
pub mod fields {
    pub const PROVIDER_ID: &str = "FSD_ID";
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}
