use chrono::NaiveDate;
use regex::Regex;
use serde_json::{json, Map, Value};
use std::sync::OnceLock;

use crate::error::SeedError;
use crate::names::NameSource;
use crate::record::{CredentialRecord, IssuerType};

static BACHELORS_TITLE: OnceLock<Regex> = OnceLock::new();

/// Degree programs follow a naming convention: bachelor's titles start with
/// "B." (B.Sc, B.Com, B.A, B.Tech).
pub fn degree_duration(title: &str) -> &'static str {
    let re = BACHELORS_TITLE.get_or_init(|| Regex::new(r"^B\.").unwrap());
    if re.is_match(title) {
        "3 years"
    } else {
        "4 years"
    }
}

/// The issuer policy bundle: identity constants, identifier strategy,
/// metadata overlay, and certificate layout details. One generic pipeline
/// handles every issuer through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Issuer {
    Coursera,
    #[value(name = "futureskills")]
    FutureSkills,
    Udemy,
    University,
}

impl Issuer {
    pub fn all() -> [Issuer; 4] {
        [
            Issuer::Coursera,
            Issuer::FutureSkills,
            Issuer::Udemy,
            Issuer::University,
        ]
    }

    /// Value of the `issuer` field on generated records.
    pub fn display_name(&self) -> &'static str {
        match self {
            Issuer::Coursera => "Coursera",
            Issuer::FutureSkills => "FutureSkills Prime",
            Issuer::Udemy => "Udemy",
            Issuer::University => "University",
        }
    }

    /// Heading text on the rendered certificate.
    pub fn banner(&self) -> &'static str {
        match self {
            Issuer::Coursera => "Coursera",
            Issuer::FutureSkills => "FutureSkills Prime",
            Issuer::Udemy => "Udemy",
            Issuer::University => "Prestige University",
        }
    }

    /// Subdirectory under the data folder where record JSON is stored.
    pub fn bucket(&self) -> &'static str {
        match self {
            Issuer::Coursera => "coursera",
            Issuer::FutureSkills => "futureskill",
            Issuer::Udemy => "udemy",
            Issuer::University => "university",
        }
    }

    pub fn issuer_type(&self) -> IssuerType {
        match self {
            Issuer::Coursera | Issuer::Udemy => IssuerType::NonNcvet,
            Issuer::FutureSkills | Issuer::University => IssuerType::Ncvet,
        }
    }

    pub fn certificate_title(&self) -> &'static str {
        match self {
            Issuer::University => "Degree Certificate",
            _ => "Certificate of Completion",
        }
    }

    /// Prefix and numbering offset for index-derived identifiers. `None` for
    /// issuers whose catalogue carries pre-assigned identifiers.
    fn id_scheme(&self) -> Option<(&'static str, usize)> {
        match self {
            Issuer::Coursera => Some(("COURSERA", 1000)),
            Issuer::FutureSkills => Some(("FUTURE", 1000)),
            Issuer::University => Some(("UNIV", 3000)),
            Issuer::Udemy => None,
        }
    }

    /// Derives the certificate identifier for the pair at `index` in
    /// catalogue order. Issuers without an index scheme require the
    /// catalogue entry to carry its own identifier.
    pub fn certificate_id(
        &self,
        index: usize,
        preassigned: Option<&str>,
    ) -> Result<String, SeedError> {
        match self.id_scheme() {
            Some((prefix, offset)) => Ok(format!("{}-{}", prefix, offset + index)),
            None => preassigned
                .map(str::to_string)
                .ok_or_else(|| {
                    SeedError::InvalidInput(format!(
                        "{} entries must carry a pre-assigned certificate_id",
                        self.display_name()
                    ))
                }),
        }
    }

    /// Verification URL is a pure function of the issuer base URL and the
    /// certificate identifier.
    pub fn verification_url(&self, certificate_id: &str) -> String {
        match self {
            Issuer::Coursera => format!("https://www.coursera.org/verify/{}", certificate_id),
            Issuer::FutureSkills => {
                format!("https://futureskillsprime.in/verify/{}", certificate_id)
            }
            Issuer::Udemy => format!("https://www.udemy.com/certificate/{}", certificate_id),
            Issuer::University => format!("https://university.edu/verify/{}", certificate_id),
        }
    }

    pub fn completion_phrase(&self) -> &'static str {
        match self {
            Issuer::Coursera | Issuer::Udemy => "has successfully completed the course:",
            Issuer::FutureSkills | Issuer::University => {
                "has successfully completed the program:"
            }
        }
    }

    /// Issuer-specific metadata, merged over the base-schema metadata.
    pub fn metadata_overlay(
        &self,
        course_title: &str,
        issued_on: NaiveDate,
        names: &mut dyn NameSource,
    ) -> Map<String, Value> {
        let issue_date = issued_on.to_string();
        let overlay = match self {
            Issuer::Coursera => json!({
                "instructor_name": "Coursera Instructor",
                "organization_name": "Coursera, Inc.",
                "organization_logo": "coursera_logo.png",
                "issue_date": issue_date,
                "credential_type": "Course Completion",
                "course_duration": "40 hours",
                "language": "English",
                "signatories": ["Coursera Team"],
            }),
            Issuer::FutureSkills => json!({
                "organization_name": "NASSCOM / MeitY",
                "organization_logo": "futureskills_logo.png",
                "issue_date": issue_date,
                "skill_level": "Foundation",
                "nsqf_alignment": 4,
                "course_duration": "20 hours",
                "signatories": ["Authorized FutureSkills Official"],
            }),
            Issuer::Udemy => json!({
                "instructor_name": names.full_name(),
                "organization_name": "Udemy, Inc.",
                "organization_logo": "udemy_logo.png",
                "course_duration": "20 hours",
                "language": "English",
                "issue_date": issue_date,
                "credential_type": "Course Completion",
                "signatories": ["Udemy Instructor Team"],
            }),
            Issuer::University => json!({
                "organization_name": "Prestige University",
                "organization_logo": "university_logo.png",
                "issue_date": issue_date,
                "course_duration": degree_duration(course_title),
                "accreditation_info": "Nationally Accredited",
                "signatories": ["Registrar", "Vice Chancellor"],
                "credential_type": "Degree",
                "language": "English",
            }),
        };
        match overlay {
            Value::Object(map) => map,
            _ => unreachable!("overlay literals are objects"),
        }
    }

    /// Extra lines in the certificate details block, below the course title.
    pub fn detail_lines(&self, record: &CredentialRecord) -> Vec<String> {
        match self {
            Issuer::Coursera => Vec::new(),
            Issuer::FutureSkills => {
                let skill = record
                    .metadata
                    .get("skill_level")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let nsqf = record
                    .metadata
                    .get("nsqf_alignment")
                    .map(Value::to_string)
                    .unwrap_or_default();
                vec![format!("Skill Level: {} | NSQF Level: {}", skill, nsqf)]
            }
            Issuer::Udemy | Issuer::University => {
                let duration = record
                    .metadata
                    .get("course_duration")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                vec![format!("Duration: {}", duration)]
            }
        }
    }

    /// Fixed footer line, where the issuer's certificates carry one.
    pub fn disclaimer(&self) -> Option<&'static str> {
        match self {
            Issuer::Udemy => {
                Some("This is a mock certificate generated for demonstration purposes.")
            }
            _ => None,
        }
    }

    /// Top/bottom page margin in millimeters.
    pub fn vertical_margin(&self) -> f64 {
        match self {
            Issuer::Udemy => 15.0,
            _ => 10.0,
        }
    }
}
