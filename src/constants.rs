/// Category identifiers and shared constants.
/// Slugs appear in URLs and as keys in the fallback cache, so they must stay stable.

// Family services categories (share the family services resource)
pub const PARENTING_SUPPORT: &str = "parenting-support";
pub const BREASTFEEDING: &str = "breastfeeding";
pub const ANTENATAL: &str = "antenatal";
pub const MENTAL_HEALTH: &str = "mental-health";
pub const BUDGETING: &str = "budgeting";
pub const WELL_CHILD: &str = "well-child";

// Single-category sources
pub const EARLY_EDUCATION: &str = "early-education";
pub const PRIMARY_SCHOOLS: &str = "primary-schools";

/// (id, display name) in listing order
pub const FAMILY_SERVICES_CATEGORIES: [(&str, &str); 6] = [
    (PARENTING_SUPPORT, "Parenting support"),
    (BREASTFEEDING, "Breastfeeding support"),
    (ANTENATAL, "Antenatal classes"),
    (MENTAL_HEALTH, "Anxiety and depression support"),
    (BUDGETING, "Budgeting and financial help"),
    (WELL_CHILD, "Well Child/Tamariki Ora providers"),
];

pub const EARLY_EDUCATION_NAME: &str = "Early learning and Kohanga Reo";
pub const PRIMARY_SCHOOLS_NAME: &str = "Primary schools";

// Defaults for configuration
pub const DEFAULT_QUERY_URL: &str =
    "https://catalogue.data.govt.nz/api/3/action/datastore_search_sql";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_CACHE_PATH: &str = "data/lookup_cache.db";
pub const DEFAULT_PORT: u16 = 8000;

/// Org_Type values accepted by the schools query, with the description shown to users.
pub const SCHOOL_TYPES: [(&str, &str); 6] = [
    ("Composite", "Composite school: offering primary, intermediate and secondary education in one school for years 1 - 13"),
    ("Composite (Year 1-10)", "Composite school: offering primary, intermediate and secondary education in one school for years 1 - 10"),
    ("Contributing", "Primary school: covering years 1 to 6"),
    ("Correspondence School", "Correspondence School: distance learning for students who are not able to attend a local school, or for courses the local school does not offer"),
    ("Full Primary", "Primary school: covering years 1 to 8"),
    ("Special School", "Special School: providing education for children with particular needs, arising from special talents, learning or behavioural issues"),
];

/// Look up the human-readable description for a school Org_Type.
pub fn school_type_description(org_type: &str) -> Option<&'static str> {
    SCHOOL_TYPES
        .iter()
        .find(|(t, _)| *t == org_type)
        .map(|(_, description)| *description)
}
