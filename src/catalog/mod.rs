//! Static registry of queryable categories.
//!
//! The catalog is built once at startup from the configured resource ids and
//! shared by reference afterwards; nothing mutates it.

pub mod filters;

use crate::config::ResourceConfig;
use crate::constants::{
    EARLY_EDUCATION, EARLY_EDUCATION_NAME, FAMILY_SERVICES_CATEGORIES, PARENTING_SUPPORT,
    PRIMARY_SCHOOLS, PRIMARY_SCHOOLS_NAME,
};
use crate::error::{ConfigError, LookupError};
use crate::query;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Which kind of remote resource a category is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    FamilyServices,
    Schools,
    EarlyEducation,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::FamilyServices => "FAMILY_SERVICES",
            SourceType::Schools => "SCHOOLS",
            SourceType::EarlyEducation => "EARLY_EDUCATION",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote datastore resource plus the query strategy for its source type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub source_type: SourceType,
    pub resource: String,
}

impl DataSource {
    pub fn new(source_type: SourceType, resource: impl Into<String>) -> Self {
        Self {
            source_type,
            resource: resource.into(),
        }
    }

    /// Build the SQL sent to the data catalog for `category_id`.
    pub fn build_query(&self, category_id: &str) -> Result<String, LookupError> {
        match self.source_type {
            SourceType::FamilyServices => query::family_services::build(&self.resource, category_id),
            SourceType::Schools => Ok(query::schools::build(&self.resource)),
            SourceType::EarlyEducation => Ok(query::early_education::build(&self.resource)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub data_source: Arc<DataSource>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, data_source: Arc<DataSource>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data_source,
        }
    }

    pub fn source_type(&self) -> SourceType {
        self.data_source.source_type
    }

    pub fn build_query(&self) -> Result<String, LookupError> {
        self.data_source.build_query(&self.id)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog from an ordered list, rejecting duplicate ids.
    pub fn new(categories: Vec<Category>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(ConfigError::DuplicateCategory(category.id.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// The fixed production registry bound to the configured resources.
    pub fn standard(resources: &ResourceConfig) -> Result<Self, ConfigError> {
        let family_services = Arc::new(DataSource::new(
            SourceType::FamilyServices,
            resources.family_services.clone(),
        ));
        let schools = Arc::new(DataSource::new(SourceType::Schools, resources.schools.clone()));
        let early_education = Arc::new(DataSource::new(
            SourceType::EarlyEducation,
            resources.early_education.clone(),
        ));

        let mut categories = Vec::with_capacity(FAMILY_SERVICES_CATEGORIES.len() + 2);
        for (id, name) in FAMILY_SERVICES_CATEGORIES {
            categories.push(Category::new(id, name, family_services.clone()));
            // early learning sits second in the listing
            if id == PARENTING_SUPPORT {
                categories.push(Category::new(
                    EARLY_EDUCATION,
                    EARLY_EDUCATION_NAME,
                    early_education.clone(),
                ));
            }
        }
        categories.push(Category::new(PRIMARY_SCHOOLS, PRIMARY_SCHOOLS_NAME, schools));

        Self::new(categories)
    }

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_category(&self, id: &str) -> Result<&Category, LookupError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| LookupError::UnknownCategory(id.to_string()))
    }

}
