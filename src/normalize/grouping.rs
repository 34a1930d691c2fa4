use crate::normalize::fields;
use crate::types::{fields::PROVIDER_ID, fields::SERVICE_NAME, RawRecord};
use std::cmp::Ordering;

/// One provider and every service row returned for it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedProvider {
    /// The first row seen for this provider; supplies the provider fields.
    pub provider: RawRecord,
    /// All rows for this provider, sorted by service name.
    pub services: Vec<RawRecord>,
}

/// Sort key for provider ids: numeric ids order numerically, anything else as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum ProviderKey {
    Missing,
    Number(i64),
    Text(String),
}

fn provider_key(record: &RawRecord) -> ProviderKey {
    if let Some(id) = fields::integer(record, PROVIDER_ID) {
        ProviderKey::Number(id)
    } else if let Some(id) = fields::text(record, PROVIDER_ID) {
        ProviderKey::Text(id)
    } else {
        ProviderKey::Missing
    }
}

fn service_name_order(a: &RawRecord, b: &RawRecord) -> Ordering {
    let a = fields::text(a, SERVICE_NAME).unwrap_or_default();
    let b = fields::text(b, SERVICE_NAME).unwrap_or_default();
    a.cmp(&b)
}

/// Group family services rows by provider.
///
/// Rows are stably sorted by provider id and split into runs of equal ids.
/// Output is in ascending provider id order.
pub fn group_providers(records: Vec<RawRecord>) -> Vec<GroupedProvider> {
    let mut keyed: Vec<(ProviderKey, RawRecord)> =
        records.into_iter().map(|r| (provider_key(&r), r)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut providers: Vec<GroupedProvider> = Vec::new();
    let mut current_key: Option<ProviderKey> = None;

    for (key, record) in keyed {
        if current_key.as_ref() == Some(&key) {
            if let Some(group) = providers.last_mut() {
                group.services.push(record);
                continue;
            }
        }
        providers.push(GroupedProvider {
            provider: record.clone(),
            services: vec![record],
        });
        current_key = Some(key);
    }

    for group in &mut providers {
        group.services.sort_by(service_name_order);
    }
    providers
}
