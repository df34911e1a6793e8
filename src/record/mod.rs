mod models;

pub use models::*;

use chrono::NaiveDate;

use crate::error::SeedError;
use crate::issuers::Issuer;
use crate::names::NameSource;
use crate::schema::BaseSchema;

/// Top-level schema keys with a dedicated field on `CredentialRecord`.
const NAMED_FIELDS: &[&str] = &[
    "issuer",
    "issuer_type",
    "ncvet_verified",
    "certificate_id",
    "learner_name",
    "certificate_title",
    "course_title",
    "completion_date",
    "verification_url",
    "metadata",
];

/// Builds one credential record: deep-copies the base schema, overwrites the
/// identity and record fields for the issuer, and merges (never replaces) the
/// metadata mapping. Pure over its inputs apart from the name source.
pub fn build_record(
    schema: &BaseSchema,
    issuer: Issuer,
    learner_name: &str,
    course_title: &str,
    certificate_id: String,
    issued_on: NaiveDate,
    names: &mut dyn NameSource,
) -> Result<CredentialRecord, SeedError> {
    if learner_name.trim().is_empty() {
        return Err(SeedError::InvalidInput("learner name is empty".to_string()));
    }
    if course_title.trim().is_empty() {
        return Err(SeedError::InvalidInput(format!(
            "course title for {} is empty",
            learner_name
        )));
    }

    let mut extra = schema.fields().clone();
    for key in NAMED_FIELDS {
        extra.remove(*key);
    }

    let mut metadata = schema.metadata();
    for (key, value) in issuer.metadata_overlay(course_title, issued_on, names) {
        metadata.insert(key, value);
    }

    let issuer_type = issuer.issuer_type();
    Ok(CredentialRecord {
        issuer: issuer.display_name().to_string(),
        issuer_type,
        ncvet_verified: issuer_type.is_ncvet(),
        verification_url: issuer.verification_url(&certificate_id),
        certificate_id,
        learner_name: learner_name.to_string(),
        certificate_title: issuer.certificate_title().to_string(),
        course_title: course_title.to_string(),
        completion_date: issued_on,
        metadata,
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StubNames;

    impl NameSource for StubNames {
        fn full_name(&mut self) -> String {
            "Test Instructor".to_string()
        }
    }

    fn schema() -> BaseSchema {
        BaseSchema::from_value(json!({
            "schema_version": "1.0",
            "issuer": "",
            "country": "IN",
            "metadata": {
                "language": "English",
                "organization_logo": "",
                "delivery_mode": "online"
            }
        }))
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    fn build(issuer: Issuer, learner: &str, course: &str, id: &str) -> CredentialRecord {
        build_record(
            &schema(),
            issuer,
            learner,
            course,
            id.to_string(),
            date(),
            &mut StubNames,
        )
        .unwrap()
    }

    #[test]
    fn record_keeps_every_base_schema_key() {
        let record = build(Issuer::Coursera, "Alice Johnson", "Data Science", "COURSERA-1000");
        let value = serde_json::to_value(&record).unwrap();
        for key in ["schema_version", "issuer", "country", "metadata"] {
            assert!(value.get(key).is_some(), "missing base key {}", key);
        }
        assert_eq!(value["schema_version"], json!("1.0"));
        assert_eq!(value["country"], json!("IN"));
    }

    #[test]
    fn metadata_is_merged_not_replaced() {
        let record = build(Issuer::Coursera, "Alice Johnson", "Data Science", "COURSERA-1000");
        // Overlay wins where keys collide, untouched base keys survive.
        assert_eq!(record.metadata["organization_logo"], json!("coursera_logo.png"));
        assert_eq!(record.metadata["delivery_mode"], json!("online"));
        assert_eq!(record.metadata["language"], json!("English"));
    }

    #[test]
    fn ncvet_verified_tracks_issuer_type() {
        for issuer in Issuer::all() {
            let record = build(issuer, "Bob Smith", "B.Com", "X-1");
            assert_eq!(record.ncvet_verified, record.issuer_type.is_ncvet());
            assert_eq!(record.issuer_type, issuer.issuer_type());
        }
    }

    #[test]
    fn verification_url_rederivable_from_stored_record() {
        let record = build(Issuer::FutureSkills, "Charlie Lee", "Cloud Computing Essentials", "FUTURE-1000");
        assert_eq!(
            record.verification_url,
            Issuer::FutureSkills.verification_url(&record.certificate_id)
        );
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let result = build_record(
            &schema(),
            Issuer::Coursera,
            "",
            "Data Science",
            "COURSERA-1000".to_string(),
            date(),
            &mut StubNames,
        );
        assert!(matches!(result, Err(SeedError::InvalidInput(_))));

        let result = build_record(
            &schema(),
            Issuer::Coursera,
            "Alice Johnson",
            "   ",
            "COURSERA-1000".to_string(),
            date(),
            &mut StubNames,
        );
        assert!(matches!(result, Err(SeedError::InvalidInput(_))));
    }

    #[test]
    fn udemy_instructor_comes_from_name_source() {
        let record = build(Issuer::Udemy, "Ethan Wong", "SQL Fundamentals", "UDEMY-100006");
        assert_eq!(record.metadata["instructor_name"], json!("Test Instructor"));
    }

    #[test]
    fn university_duration_follows_title_convention() {
        let record = build(Issuer::University, "Alice Johnson", "B.Sc Computer Science", "UNIV-3000");
        assert_eq!(record.metadata["course_duration"], json!("3 years"));
        assert_eq!(record.certificate_title, "Degree Certificate");

        let record = build(Issuer::University, "Alice Johnson", "M.Sc Data Science", "UNIV-3001");
        assert_eq!(record.metadata["course_duration"], json!("4 years"));
    }

    #[test]
    fn completion_date_serializes_as_iso_date() {
        let record = build(Issuer::Coursera, "Alice Johnson", "Data Science", "COURSERA-1000");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["completion_date"], json!("2025-10-01"));
        assert_eq!(value["issuer_type"], json!("non_ncvet"));
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = build(Issuer::University, "Diana Patel", "B.A English", "UNIV-3003");
        let raw = serde_json::to_string(&record).unwrap();
        let back: CredentialRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.certificate_id, record.certificate_id);
        assert_eq!(back.extra, record.extra);
    }
}
