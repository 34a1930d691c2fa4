use crate::catalog::filters::filter_for;
use crate::error::LookupError;

/// Build the family services query for one category.
///
/// `SELECT DISTINCT` without category columns collapses rows that differ only
/// by category, and the ORDER BY keeps paging and grouping deterministic.
pub fn build(resource: &str, category_id: &str) -> Result<String, LookupError> {
    let filter = filter_for(category_id)
        .ok_or_else(|| LookupError::UnknownCategory(category_id.to_string()))?;

    Ok(format!(
        r#"
            SELECT DISTINCT "FSD_ID", "PROVIDER_NAME", "ORGANISATION_PURPOSE",
                   "SERVICE_ID", "SERVICE_NAME", "SERVICE_DETAIL",
                   "PHYSICAL_ADDRESS", "LATITUDE", "LONGITUDE", "PROVIDER_WEBSITE_1",
                   "PUBLISHED_CONTACT_EMAIL_1", "PUBLISHED_PHONE_1", "PROVIDER_CONTACT_AVAILABILITY"
              FROM "{resource}"
             WHERE "LATITUDE" IS NOT NULL
               AND "LONGITUDE" IS NOT NULL
               AND "LATITUDE" != '0'
               AND "LONGITUDE" != '0'
               AND ( {filter} )
          ORDER BY "LONGITUDE", "FSD_ID"
        "#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_resource_filter_and_ordering() {
        let sql = build("fs-resource", "breastfeeding").unwrap();
        assert!(sql.contains(r#"FROM "fs-resource""#));
        assert!(sql.contains("SELECT DISTINCT \"FSD_ID\""));
        assert!(sql.contains("'%lactation%'"));
        assert!(sql.contains(r#""LATITUDE" != '0'"#));
        assert!(sql.trim_end().ends_with(r#"ORDER BY "LONGITUDE", "FSD_ID""#));
    }

    #[test]
    fn build_is_deterministic() {
        let first = build("fs-resource", "mental-health").unwrap();
        let second = build("fs-resource", "mental-health").unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn categories_differ_only_by_filter() {
        let antenatal = build("fs", "antenatal").unwrap();
        let well_child = build("fs", "well-child").unwrap();
        assert_ne!(antenatal, well_child);
        assert!(antenatal.contains("'%ante%natal%'"));
        assert!(!well_child.contains("'%ante%natal%'"));
    }

    #[test]
    fn unknown_category_has_no_query() {
        let err = build("fs", "foo").unwrap_err();
        assert!(matches!(err, LookupError::UnknownCategory(ref id) if id == "foo"));
    }
}
