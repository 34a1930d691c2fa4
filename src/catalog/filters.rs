//! Per-category filter predicates for the family services resource.
//!
//! Each predicate is a fragment of the data catalog's SQL dialect and is
//! AND-ed into the family services query as-is.

use crate::constants::{
    ANTENATAL, BREASTFEEDING, BUDGETING, EARLY_EDUCATION, MENTAL_HEALTH, PARENTING_SUPPORT,
    WELL_CHILD,
};

const PARENTING_SUPPORT_FILTER: &str = r#"
        (
            "LEVEL_2_CATEGORY" LIKE '%Babies and Toddlers 0-5%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Family / Whānau Support%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Parenting - Skills and Support%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Helplines - Parenting%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Support Groups - Parents%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Young Parents%'
        ) AND (
            LOWER("SERVICE_DETAIL") NOT LIKE '%child%care%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%toys%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%kindergarten%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%play%group%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%students%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%social%work%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%older people%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%adolescen%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%counselling%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%therap%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%mediat%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%legal%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%school%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%budget%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%mental health%'
          AND
            LOWER("SERVICE_NAME") NOT LIKE '%teen%'
          AND
            LOWER("SERVICE_NAME") NOT LIKE '%play%'
        ) AND (
            LOWER("SERVICE_DETAIL") LIKE '%parent%'
          OR
            LOWER("ORGANISATION_PURPOSE") LIKE '%parent%'
        )
"#;

const EARLY_EDUCATION_FILTER: &str = r#"
        (
            LOWER("SERVICE_DETAIL") NOT LIKE '%after_school%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%after_school%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%afterschool%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%afterschool%'
        ) AND (
          "LEVEL_2_CATEGORY" LIKE '%Early Childhood Education%'
        )
"#;

const BREASTFEEDING_FILTER: &str = r#"
        (
            LOWER("SERVICE_DETAIL") LIKE '%breast%fe%'
          OR
            LOWER("ORGANISATION_PURPOSE") LIKE '%breast%fe%'
          OR
            LOWER("SERVICE_DETAIL") LIKE '%lactation%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Breast Feeding Support%'
        )
"#;

const ANTENATAL_FILTER: &str = r#"
        (
            LOWER("SERVICE_DETAIL") LIKE '%ante%natal%'
          OR
            LOWER("ORGANISATION_PURPOSE") LIKE '%ante%natal%'
        ) AND (
            LOWER("PROVIDER_NAME") NOT LIKE '%postnatal%'
        ) AND (
            "LEVEL_2_CATEGORY" LIKE '%Pregnancy and Childbirth%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Well Child Health (Tamariki Ora)%'
          OR
            LOWER("PROVIDER_NAME") LIKE '%plunket%'
        )
"#;

const MENTAL_HEALTH_FILTER: &str = r#"
        (
            LOWER("SERVICE_DETAIL") NOT LIKE 'eating%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '% eating%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '% eating%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE 'eating%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%sexual%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%sexual%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%youth%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%youth%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%teen%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%teen%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%workplace%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%workplace%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%gender%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%gender%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%course%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%course%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%budget%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%budget%'
        ) AND (
            LOWER("SERVICE_DETAIL") LIKE '%mental%'
          OR
            LOWER("ORGANISATION_PURPOSE") LIKE '%mental%'
          OR
            LOWER("SERVICE_DETAIL") LIKE '%depression%'
          OR
            LOWER("ORGANISATION_PURPOSE") LIKE '%depression%'
          OR
            LOWER("SERVICE_DETAIL") LIKE '%distress%'
          OR
            LOWER("ORGANISATION_PURPOSE") LIKE '%distress%'
        ) AND (
            "LEVEL_2_CATEGORY" LIKE '%Counselling%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Depression%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Anxiety Problems%'
        ) AND (
            "LEVEL_2_CATEGORY" NOT LIKE '%Crime%'
          AND
            "LEVEL_2_CATEGORY" NOT LIKE '%Relationships%'
          AND
            "LEVEL_2_CATEGORY" NOT LIKE '%Youth%'
          AND
            "LEVEL_2_CATEGORY" NOT LIKE '%Children%'
        )
"#;

const BUDGETING_FILTER: &str = r#"
        (
            "LEVEL_2_CATEGORY" LIKE '%Other budgeting services%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Financial Assistance%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%Financial mentors%'
          OR
            "LEVEL_2_CATEGORY" LIKE '%MoneyMates%'
        ) AND (
            "LEVEL_2_CATEGORY" NOT LIKE '%Education%'
          AND
            "LEVEL_2_CATEGORY" NOT LIKE '%Disability%'
          AND
            "LEVEL_2_CATEGORY" NOT LIKE '%Child Care%'
        ) AND (
            LOWER("SERVICE_DETAIL") NOT LIKE '%student%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%student%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%education%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%education%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%job%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%job%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%older people%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%older people%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%awards%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%awards%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%superannuation%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%superannuation%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%supergold%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%supergold%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%retirement%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%retirement%'
          AND
            LOWER("SERVICE_DETAIL") NOT LIKE '%pension%'
          AND
            LOWER("ORGANISATION_PURPOSE") NOT LIKE '%pension%'
          AND
            LOWER("PROVIDER_NAME") NOT LIKE 'work and income%'
        )
"#;

const WELL_CHILD_FILTER: &str = r#"
        (
            "LEVEL_2_CATEGORY" LIKE '%Well Child Health (Tamariki Ora)%'
        )
"#;

/// Look up the filter predicate for a category, if it has one.
pub fn filter_for(category_id: &str) -> Option<&'static str> {
    let filter = match category_id {
        PARENTING_SUPPORT => PARENTING_SUPPORT_FILTER,
        EARLY_EDUCATION => EARLY_EDUCATION_FILTER,
        BREASTFEEDING => BREASTFEEDING_FILTER,
        ANTENATAL => ANTENATAL_FILTER,
        MENTAL_HEALTH => MENTAL_HEALTH_FILTER,
        BUDGETING => BUDGETING_FILTER,
        WELL_CHILD => WELL_CHILD_FILTER,
        _ => return None,
    };
    Some(filter)
}
