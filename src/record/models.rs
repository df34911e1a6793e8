use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether the issuer is recognized by the national skills-certification
/// authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuerType {
    Ncvet,
    NonNcvet,
}

impl IssuerType {
    pub fn is_ncvet(self) -> bool {
        matches!(self, IssuerType::Ncvet)
    }
}

/// One issued certificate or degree, as persisted to the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub issuer: String,
    pub issuer_type: IssuerType,
    pub ncvet_verified: bool,
    pub certificate_id: String,
    pub learner_name: String,
    pub certificate_title: String,
    pub course_title: String,
    pub completion_date: NaiveDate,
    pub verification_url: String,
    pub metadata: Map<String, Value>,
    /// Base-schema fields without a dedicated column above. Carried through
    /// serialization so every record contains the full schema key set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
