use serde::Deserialize;
use std::path::Path;

use crate::error::SeedError;
use crate::issuers::Issuer;

/// Which learners received which courses or degrees. Ordered: learners in
/// listed order, courses in listed order, so derived identifiers are stable.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    pub learners: Vec<LearnerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LearnerEntry {
    pub learner: String,
    pub courses: Vec<CourseEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(from = "CourseSpec")]
pub struct CourseEntry {
    pub title: String,
    /// Pre-assigned identifier, for issuers that do not derive one.
    pub certificate_id: Option<String>,
}

/// External catalogues may list a course as a bare title string or as an
/// object carrying a pre-assigned identifier.
#[derive(Deserialize)]
#[serde(untagged)]
enum CourseSpec {
    Title(String),
    Full {
        title: String,
        #[serde(default)]
        certificate_id: Option<String>,
    },
}

impl From<CourseSpec> for CourseEntry {
    fn from(spec: CourseSpec) -> Self {
        match spec {
            CourseSpec::Title(title) => CourseEntry {
                title,
                certificate_id: None,
            },
            CourseSpec::Full {
                title,
                certificate_id,
            } => CourseEntry {
                title,
                certificate_id,
            },
        }
    }
}

impl Catalogue {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SeedError::InvalidInput(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| SeedError::InvalidInput(format!("{}: {}", path.display(), e)))
    }

    /// Flat (learner, course) pairs in catalogue order; the enumeration
    /// position of a pair is its certificate index.
    pub fn pairs(&self) -> impl Iterator<Item = (&LearnerEntry, &CourseEntry)> {
        self.learners
            .iter()
            .flat_map(|entry| entry.courses.iter().map(move |course| (entry, course)))
    }

    /// The fixed seed catalogue for an issuer.
    pub fn builtin(issuer: Issuer) -> Catalogue {
        match issuer {
            Issuer::Coursera => plain(&[
                ("Alice Johnson", &["Data Science Specialization", "Machine Learning Specialization"][..]),
                ("Bob Smith", &["Python for Everybody", "AI for Everyone"]),
                ("Charlie Lee", &["Deep Learning Specialization"]),
                ("Diana Patel", &["Cloud Computing", "Cybersecurity Specialization"]),
                ("Ethan Brown", &["Digital Marketing"]),
                ("Fiona Williams", &["Blockchain Basics", "Business Analytics Specialization"]),
                ("George Martin", &["Google IT Support Professional Certificate"]),
            ]),
            Issuer::FutureSkills => plain(&[
                ("Alice Johnson", &["AI & Machine Learning Foundations"][..]),
                ("Bob Smith", &["Data Analytics Foundation", "Cybersecurity Basics"]),
                ("Charlie Lee", &["Cloud Computing Essentials"]),
                ("Diana Patel", &["Digital Marketing", "Product Management"]),
                ("Ethan Brown", &["IoT Fundamentals"]),
                ("Fiona Williams", &["Blockchain & FinTech Basics", "Design Thinking"]),
                ("George Martin", &["Python Programming for Beginners"]),
            ]),
            Issuer::Udemy => assigned(&[
                ("Alice Johnson", &[("Python Masterclass", "UDEMY-100001"), ("Data Science Bootcamp", "UDEMY-100002")][..]),
                ("Bob Smith", &[("React for Beginners", "UDEMY-100003")]),
                ("Charlie Lee", &[("JavaScript Essentials", "UDEMY-100004")]),
                ("Diana Patel", &[("Excel for Professionals", "UDEMY-100005")]),
                ("Ethan Wong", &[("SQL Fundamentals", "UDEMY-100006")]),
                ("Fiona Green", &[("HTML & CSS Basics", "UDEMY-100007")]),
                ("George Brown", &[("Python Automation", "UDEMY-100008")]),
            ]),
            Issuer::University => plain(&[
                ("Alice Johnson", &["B.Sc Computer Science"][..]),
                ("Bob Smith", &["B.Com"]),
                ("Charlie Lee", &["B.A English"]),
                ("Diana Patel", &["B.Sc Computer Science", "B.A English"]),
                ("Ethan Brown", &["B.Tech IT"]),
                ("Fiona Williams", &["B.Com"]),
                ("George Martin", &["B.Tech IT", "B.Sc Computer Science"]),
            ]),
        }
    }
}

fn plain(entries: &[(&str, &[&str])]) -> Catalogue {
    Catalogue {
        learners: entries
            .iter()
            .map(|(learner, courses)| LearnerEntry {
                learner: learner.to_string(),
                courses: courses
                    .iter()
                    .map(|title| CourseEntry {
                        title: title.to_string(),
                        certificate_id: None,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn assigned(entries: &[(&str, &[(&str, &str)])]) -> Catalogue {
    Catalogue {
        learners: entries
            .iter()
            .map(|(learner, courses)| LearnerEntry {
                learner: learner.to_string(),
                courses: courses
                    .iter()
                    .map(|(title, id)| CourseEntry {
                        title: title.to_string(),
                        certificate_id: Some(id.to_string()),
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn pairs_iterate_in_catalogue_order() {
        let catalogue = Catalogue::builtin(Issuer::Coursera);
        let pairs: Vec<_> = catalogue.pairs().collect();
        assert_eq!(pairs[0].0.learner, "Alice Johnson");
        assert_eq!(pairs[0].1.title, "Data Science Specialization");
        assert_eq!(pairs[1].1.title, "Machine Learning Specialization");
        assert_eq!(pairs[2].0.learner, "Bob Smith");
        assert_eq!(pairs.len(), 11);
    }

    #[test]
    fn udemy_catalogue_carries_preassigned_ids() {
        let catalogue = Catalogue::builtin(Issuer::Udemy);
        for (_, course) in catalogue.pairs() {
            assert!(course.certificate_id.is_some());
        }
        let first = catalogue.pairs().next().unwrap().1;
        assert_eq!(first.certificate_id.as_deref(), Some("UDEMY-100001"));
    }

    #[test]
    fn index_issuers_have_no_preassigned_ids() {
        for issuer in [Issuer::Coursera, Issuer::FutureSkills, Issuer::University] {
            for (_, course) in Catalogue::builtin(issuer).pairs() {
                assert!(course.certificate_id.is_none());
            }
        }
    }

    #[test]
    fn loads_external_catalogue_with_mixed_course_forms() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"learner": "Alice Johnson", "courses": ["Data Science"]}},
                {{"learner": "Bob Smith", "courses": [{{"title": "Python", "certificate_id": "UDEMY-9"}}]}}
            ]"#
        )
        .unwrap();

        let catalogue = Catalogue::load(file.path()).unwrap();
        assert_eq!(catalogue.learners.len(), 2);
        assert_eq!(catalogue.learners[0].courses[0].certificate_id, None);
        assert_eq!(
            catalogue.learners[1].courses[0].certificate_id.as_deref(),
            Some("UDEMY-9")
        );
    }

    #[test]
    fn malformed_catalogue_is_invalid_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"learner\": 3}}").unwrap();
        let err = Catalogue::load(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::InvalidInput(_)));
    }
}
