// Certificate PDF generation
// Uses genpdf - requires Liberation or similar fonts in standard paths
use genpdf::elements::{Break, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Alignment, Element, Margins, Size};

use crate::error::SeedError;
use crate::issuers::Issuer;
use crate::record::CredentialRecord;

const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/TTF",
    "/System/Library/Fonts/Supplemental",
    "/Library/Fonts",
];

const FONT_NAMES: &[&str] = &["LiberationSans", "DejaVuSans", "Arial"];

/// Renders credential records as single-page landscape A4 certificates.
/// Fonts are resolved once at construction and reused for every document.
pub struct Renderer {
    fonts: FontFamily<FontData>,
}

impl Renderer {
    pub fn new() -> Result<Self, SeedError> {
        let fonts = discover_fonts().ok_or_else(|| {
            SeedError::Render(
                "no suitable fonts found; install fonts-liberation".to_string(),
            )
        })?;
        Ok(Self { fonts })
    }

    /// Lays out one certificate and returns the PDF bytes. Fails with a
    /// render error when a field required by the layout is empty.
    pub fn render(&self, issuer: Issuer, record: &CredentialRecord) -> Result<Vec<u8>, SeedError> {
        require_fields(record)?;

        let mut doc = genpdf::Document::new(self.fonts.clone());
        doc.set_title(record.certificate_title.clone());
        // A4 landscape
        doc.set_paper_size(Size::new(297.0, 210.0));

        let mut decorator = genpdf::SimplePageDecorator::new();
        let vertical = issuer.vertical_margin();
        decorator.set_margins(Margins::trbl(vertical, 10.0, vertical, 10.0));
        doc.set_page_decorator(decorator);

        let banner_style = Style::new().bold().with_font_size(28);
        let title_style = Style::new().bold().with_font_size(20);
        let body_style = Style::new().with_font_size(16);
        let learner_style = Style::new().bold().with_font_size(20);
        let course_style = Style::new().bold().with_font_size(18);
        let detail_style = Style::new().with_font_size(14);

        doc.push(centered(issuer.banner()).styled(banner_style));
        doc.push(Break::new(1.0));
        doc.push(centered(&record.certificate_title).styled(title_style));
        doc.push(Break::new(1.0));
        doc.push(centered("This is to certify that").styled(body_style));
        doc.push(Break::new(0.5));
        doc.push(centered(&record.learner_name).styled(learner_style));
        doc.push(Break::new(0.5));
        doc.push(centered(issuer.completion_phrase()).styled(body_style));
        doc.push(Break::new(0.5));
        doc.push(centered(&record.course_title).styled(course_style));
        doc.push(Break::new(1.0));

        for line in issuer.detail_lines(record) {
            doc.push(centered(&line).styled(detail_style));
        }
        doc.push(
            centered(&format!("Completion Date: {}", record.completion_date))
                .styled(detail_style),
        );
        doc.push(centered(&format!("Certificate ID: {}", record.certificate_id)).styled(detail_style));
        doc.push(centered(&format!("Verify at: {}", record.verification_url)).styled(detail_style));

        if let Some(disclaimer) = issuer.disclaimer() {
            doc.push(Break::new(2.0));
            doc.push(centered(disclaimer).styled(Style::new().italic().with_font_size(9)));
        }

        let mut bytes = Vec::new();
        doc.render(&mut bytes)
            .map_err(|e| SeedError::Render(e.to_string()))?;
        Ok(bytes)
    }
}

/// Try common font paths - genpdf needs actual font files for metrics.
pub fn discover_fonts() -> Option<FontFamily<FontData>> {
    FONT_DIRS
        .iter()
        .find(|p| std::path::Path::new(p).exists())
        .and_then(|path| {
            FONT_NAMES
                .iter()
                .find_map(|name| genpdf::fonts::from_files(*path, name, None).ok())
        })
}

fn centered(text: &str) -> Paragraph {
    Paragraph::new(text).aligned(Alignment::Center)
}

fn require_fields(record: &CredentialRecord) -> Result<(), SeedError> {
    let required = [
        ("certificate_title", &record.certificate_title),
        ("learner_name", &record.learner_name),
        ("course_title", &record.course_title),
        ("certificate_id", &record.certificate_id),
        ("verification_url", &record.verification_url),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(SeedError::Render(format!("missing required field {}", name)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::Map;

    fn sample_record() -> CredentialRecord {
        CredentialRecord {
            issuer: "Coursera".to_string(),
            issuer_type: crate::record::IssuerType::NonNcvet,
            ncvet_verified: false,
            certificate_id: "COURSERA-1000".to_string(),
            learner_name: "Alice Johnson".to_string(),
            certificate_title: "Certificate of Completion".to_string(),
            course_title: "Data Science Specialization".to_string(),
            completion_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            verification_url: "https://www.coursera.org/verify/COURSERA-1000".to_string(),
            metadata: Map::new(),
            extra: Map::new(),
        }
    }

    #[test]
    fn renders_pdf_bytes() {
        // Skip on hosts without a usable font family installed.
        let Ok(renderer) = Renderer::new() else {
            return;
        };
        let bytes = renderer.render(Issuer::Coursera, &sample_record()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_course_titles_still_render() {
        let Ok(renderer) = Renderer::new() else {
            return;
        };
        let mut record = sample_record();
        record.course_title = "An Extremely Comprehensive and Unreasonably Long Specialization \
                               Title That Must Wrap Across Multiple Lines of the Page"
            .to_string();
        assert!(renderer.render(Issuer::Udemy, &record).is_ok());
    }

    #[test]
    fn empty_required_field_is_render_error() {
        let Ok(renderer) = Renderer::new() else {
            return;
        };
        let mut record = sample_record();
        record.learner_name = String::new();
        let err = renderer.render(Issuer::Coursera, &record).unwrap_err();
        assert!(matches!(err, SeedError::Render(_)));
    }
}
