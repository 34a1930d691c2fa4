pub fn build(resource: &str) -> String {
    format!(
        r#"
            SELECT "ECE_Id", "Org_Name", "Org_Type", "Definition", "All_Children",
                   "Add1_Line1", "Add1_Suburb", "Add1_City",
                   "Latitude", "Longitude",
                   "Telephone", "Email", "20_Hrs_ECE"
              FROM "{resource}"
             WHERE "Latitude" IS NOT NULL
               AND "Longitude" IS NOT NULL
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_ece_projection_with_coordinates() {
        let sql = build("ece-resource");
        assert!(sql.contains(r#"FROM "ece-resource""#));
        assert!(sql.contains(r#""20_Hrs_ECE""#));
        assert!(sql.contains(r#""Latitude" IS NOT NULL"#));
        assert!(!sql.contains("ORDER BY"));
    }
}
