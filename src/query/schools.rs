/// Primary schools query. There is a single schools category so no filter applies;
/// the Org_Type allow-list matches the descriptions in `constants::SCHOOL_TYPES`.
pub fn build(resource: &str) -> String {
    format!(
        r#"
            SELECT "School_Id", "Org_Name", "Org_Type", "Definition", "Total",
                   "Add1_Line1", "Add1_Suburb", "Add1_City",
                   "Latitude", "Longitude",
                   "URL", "Telephone", "Email"
              FROM "{resource}"
             WHERE "Org_Type" IN ('Composite', 'Composite (Year 1-10)', 'Contributing',
                                  'Correspondence School', 'Full Primary', 'Special School')
               AND "Latitude" IS NOT NULL
               AND "Longitude" IS NOT NULL
        "#
    )
}
