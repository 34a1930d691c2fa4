//! Reshape raw catalog rows into the listing shapes served to clients.

pub mod fields;
pub mod grouping;

pub use grouping::{group_providers, GroupedProvider};

use crate::catalog::{Category, SourceType};
use crate::constants::school_type_description;
use crate::types::RawRecord;
use serde::{Deserialize, Serialize};

const ADDRESS_PARTS: [&str; 3] = ["Add1_Line1", "Add1_Suburb", "Add1_City"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            source_type: category.source_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_availability: Option<String>,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Description of the school's Org_Type, when it is a known type.
    #[serde(rename = "type")]
    pub school_type: Option<String>,
    pub description: Option<String>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_enrolled: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarlyEducationCentre {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub centre_type: Option<String>,
    pub description: Option<String>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_enrolled: Option<i64>,
    pub subsidy_20_hrs: bool,
}

/// Listings for one category, shaped for its source type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryListing {
    Providers(Vec<Provider>),
    Schools(Vec<School>),
    EarlyEducation(Vec<EarlyEducationCentre>),
}

impl CategoryListing {
    pub fn len(&self) -> usize {
        match self {
            CategoryListing::Providers(v) => v.len(),
            CategoryListing::Schools(v) => v.len(),
            CategoryListing::EarlyEducation(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shape raw rows for a category. Only family services rows are grouped;
/// school and early learning rows map one-to-one.
pub fn shape(source_type: SourceType, records: Vec<RawRecord>) -> CategoryListing {
    match source_type {
        SourceType::FamilyServices => CategoryListing::Providers(
            group_providers(records).iter().map(provider).collect(),
        ),
        SourceType::Schools => CategoryListing::Schools(records.iter().map(school).collect()),
        SourceType::EarlyEducation => {
            CategoryListing::EarlyEducation(records.iter().map(early_education_centre).collect())
        }
    }
}

pub fn provider(group: &GroupedProvider) -> Provider {
    let p = &group.provider;
    Provider {
        id: fields::integer(p, "FSD_ID"),
        name: fields::text(p, "PROVIDER_NAME"),
        description: fields::text(p, "ORGANISATION_PURPOSE"),
        address: fields::text(p, "PHYSICAL_ADDRESS"),
        latitude: fields::float(p, "LATITUDE"),
        longitude: fields::float(p, "LONGITUDE"),
        website: fields::text(p, "PROVIDER_WEBSITE_1"),
        email: fields::text(p, "PUBLISHED_CONTACT_EMAIL_1"),
        phone: fields::text(p, "PUBLISHED_PHONE_1"),
        contact_availability: fields::text(p, "PROVIDER_CONTACT_AVAILABILITY"),
        services: group.services.iter().map(service).collect(),
    }
}

fn service(record: &RawRecord) -> Service {
    Service {
        id: fields::integer(record, "SERVICE_ID"),
        name: fields::text(record, "SERVICE_NAME"),
        detail: fields::text(record, "SERVICE_DETAIL"),
    }
}

pub fn school(record: &RawRecord) -> School {
    School {
        id: fields::integer(record, "School_Id"),
        name: fields::text(record, "Org_Name"),
        school_type: fields::text(record, "Org_Type")
            .and_then(|t| school_type_description(&t))
            .map(str::to_string),
        description: fields::text(record, "Definition"),
        address: fields::address(record, &ADDRESS_PARTS),
        latitude: fields::float(record, "Latitude"),
        longitude: fields::float(record, "Longitude"),
        website: fields::text(record, "URL"),
        email: fields::text(record, "Email"),
        phone: fields::text(record, "Telephone"),
        total_enrolled: fields::integer(record, "Total"),
    }
}

pub fn early_education_centre(record: &RawRecord) -> EarlyEducationCentre {
    let subsidy_20_hrs = record
        .get("20_Hrs_ECE")
        .and_then(|v| v.as_str())
        .map(|v| v.eq_ignore_ascii_case("yes"))
        .unwrap_or(false);

    EarlyEducationCentre {
        id: fields::integer(record, "ECE_Id"),
        name: fields::text(record, "Org_Name"),
        centre_type: fields::text(record, "Org_Type"),
        description: fields::text(record, "Definition"),
        address: fields::address(record, &ADDRESS_PARTS),
        latitude: fields::float(record, "Latitude"),
        longitude: fields::float(record, "Longitude"),
        email: fields::text(record, "Email"),
        phone: fields::text(record, "Telephone"),
        total_enrolled: fields::integer(record, "All_Children"),
        subsidy_20_hrs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn row(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn family_services_rows_become_providers_with_services() {
        let listing = shape(
            SourceType::FamilyServices,
            vec![
                row(json!({
                    "FSD_ID": 1, "PROVIDER_NAME": "Plunket", "LATITUDE": "-41.2",
                    "LONGITUDE": "174.7", "SERVICE_ID": 11, "SERVICE_NAME": "B", "SERVICE_DETAIL": "b"
                })),
                row(json!({"FSD_ID": 1, "SERVICE_ID": 12, "SERVICE_NAME": "A"})),
                row(json!({"FSD_ID": 2, "SERVICE_ID": 21, "SERVICE_NAME": "C"})),
            ],
        );

        let CategoryListing::Providers(providers) = listing else {
            panic!("expected providers");
        };
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].id, Some(1));
        assert_eq!(providers[0].name.as_deref(), Some("Plunket"));
        assert_eq!(providers[0].latitude, Some(-41.2));
        let names: Vec<_> = providers[0].services.iter().map(|s| s.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(providers[1].services[0].id, Some(21));
    }

    #[test]
    fn school_type_is_described_and_address_joined() {
        let s = school(&row(json!({
            "School_Id": 1234, "Org_Name": "Te Kura", "Org_Type": "Full Primary",
            "Add1_Line1": "1 School Rd", "Add1_Suburb": null, "Add1_City": "Nelson",
            "Total": "250", "Latitude": -41.27, "Longitude": 173.28
        })));

        assert_eq!(s.id, Some(1234));
        assert_eq!(s.school_type.as_deref(), Some("Primary school: covering years 1 to 8"));
        assert_eq!(s.address, "1 School Rd, Nelson");
        assert_eq!(s.total_enrolled, Some(250));
    }

    #[test]
    fn unknown_school_type_has_no_description() {
        let s = school(&row(json!({"Org_Type": "Secondary (Year 9-15)"})));
        assert_eq!(s.school_type, None);
    }

    #[test]
    fn twenty_hours_subsidy_needs_yes_string() {
        let yes = early_education_centre(&row(json!({"20_Hrs_ECE": "YES", "All_Children": 30})));
        let no = early_education_centre(&row(json!({"20_Hrs_ECE": "No"})));
        let odd = early_education_centre(&row(json!({"20_Hrs_ECE": true})));
        assert!(yes.subsidy_20_hrs);
        assert_eq!(yes.total_enrolled, Some(30));
        assert!(!no.subsidy_20_hrs);
        assert!(!odd.subsidy_20_hrs);
    }

    #[test]
    fn school_rows_map_one_to_one() {
        let listing = shape(
            SourceType::Schools,
            vec![row(json!({"School_Id": 1})), row(json!({"School_Id": 1}))],
        );
        assert_eq!(listing.len(), 2);
    }

    #[test]
    fn listing_serializes_as_plain_array_with_type_field() {
        let listing = shape(
            SourceType::EarlyEducation,
            vec![row(json!({"ECE_Id": 5, "Org_Type": "Kindergarten"}))],
        );
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["type"], json!("Kindergarten"));
        assert_eq!(json[0]["id"], json!(5));
    }
}
