use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::catalogue::{Catalogue, CourseEntry};
use crate::config::Config;
use crate::error::SeedError;
use crate::issuers::Issuer;
use crate::names::NameSource;
use crate::pdf::Renderer;
use crate::record::{self, CredentialRecord};
use crate::schema::BaseSchema;
use crate::storage;

/// Summary of one generated certificate: what was issued and where the
/// rendered document landed.
#[derive(Debug, Clone)]
pub struct GeneratedCertificate {
    pub certificate_id: String,
    pub learner_name: String,
    pub course_title: String,
    pub document_path: PathBuf,
}

/// Runs one issuer's batch over a catalogue: derive identifier, build the
/// record, render the certificate, persist both. A malformed entry or failed
/// record is logged and skipped; later entries keep their catalogue-position
/// index so identifiers stay stable.
pub fn run_batch(
    issuer: Issuer,
    catalogue: &Catalogue,
    schema: &BaseSchema,
    renderer: &Renderer,
    config: &Config,
    names: &mut dyn NameSource,
) -> Result<Vec<GeneratedCertificate>, SeedError> {
    let data_folder = config.data_folder.join(issuer.bucket());
    storage::ensure_dirs(&data_folder, &config.cert_folder)?;

    let issued_on = config
        .issue_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut generated = Vec::new();
    for (index, (entry, course)) in catalogue.pairs().enumerate() {
        let result = generate_one(
            issuer,
            schema,
            renderer,
            names,
            &entry.learner,
            course,
            index,
            issued_on,
            &data_folder,
            &config.cert_folder,
        );
        match result {
            Ok(cert) => {
                info!(
                    "{} | {} | {} -> {}",
                    cert.certificate_id,
                    cert.learner_name,
                    cert.course_title,
                    cert.document_path.display()
                );
                generated.push(cert);
            }
            Err(err) => {
                error!(
                    "skipping entry {} ({} / {}): {}",
                    index, entry.learner, course.title, err
                );
            }
        }
    }

    info!(
        "{}: {} certificates generated",
        issuer.display_name(),
        generated.len()
    );
    Ok(generated)
}

#[allow(clippy::too_many_arguments)]
fn generate_one(
    issuer: Issuer,
    schema: &BaseSchema,
    renderer: &Renderer,
    names: &mut dyn NameSource,
    learner: &str,
    course: &CourseEntry,
    index: usize,
    issued_on: chrono::NaiveDate,
    data_folder: &Path,
    cert_folder: &Path,
) -> Result<GeneratedCertificate, SeedError> {
    let certificate_id = issuer.certificate_id(index, course.certificate_id.as_deref())?;
    let record = record::build_record(
        schema,
        issuer,
        learner,
        &course.title,
        certificate_id,
        issued_on,
        names,
    )?;

    let pdf_bytes = renderer.render(issuer, &record)?;
    let json_bytes =
        serde_json::to_vec_pretty(&record).map_err(std::io::Error::from)?;

    let json_path = data_folder.join(format!("{}.json", record.certificate_id));
    storage::write_atomic(&json_path, &json_bytes)?;

    let pdf_path = cert_folder.join(format!("{}.pdf", record.certificate_id));
    storage::write_atomic(&pdf_path, &pdf_bytes)?;

    let CredentialRecord {
        certificate_id,
        learner_name,
        course_title,
        ..
    } = record;
    Ok(GeneratedCertificate {
        certificate_id,
        learner_name,
        course_title,
        document_path: pdf_path,
    })
}
