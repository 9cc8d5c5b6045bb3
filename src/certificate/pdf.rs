//! Certificate PDF rendering

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

use crate::{
    certificate::Grade,
    error::{AppError, AppResult},
    utils::time::{format_display_date, format_file_timestamp},
};

// A4 portrait
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const BORDER_MARGIN_MM: f32 = 12.7;

// Points to millimetres
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Everything printed on a certificate
#[derive(Debug, Clone)]
pub struct CertificateData {
    pub recipient_name: String,
    pub topic_name: String,
    pub score: i32,
    pub total_questions: i64,
    pub grade: Grade,
    pub serial: String,
    pub issued_at: DateTime<Utc>,
}

/// Render a certificate PDF into `output_dir`, returning the file path.
///
/// Layout is a single A4 page: centred title and recital lines, the
/// recipient and topic in bold, score/grade line, issue date, serial number
/// and a full-page border.
pub fn render_to_dir(output_dir: &Path, data: &CertificateData) -> AppResult<PathBuf> {
    fs::create_dir_all(output_dir)
        .map_err(|e| AppError::Pdf(format!("cannot create certificate directory: {e}")))?;

    let filename = format!(
        "certificate_{}_{}.pdf",
        sanitize_for_filename(&data.recipient_name),
        format_file_timestamp(data.issued_at),
    );
    let path = output_dir.join(filename);

    let (doc, page, layer) =
        PdfDocument::new("Certificate of Achievement", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");

    let helvetica = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(e.to_string()))?;
    let helvetica_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    let layer = doc.get_page(page).get_layer(layer);

    // Vertical positions mirror the classic certificate layout, measured
    // from the top of the page.
    centered_text(&layer, "CERTIFICATE OF ACHIEVEMENT", 32.0, from_top(50.8), &helvetica_bold);
    centered_text(&layer, "This is to certify that", 16.0, from_top(71.1), &helvetica);
    centered_text(&layer, &data.recipient_name, 24.0, from_top(88.9), &helvetica_bold);
    centered_text(
        &layer,
        "has successfully completed the quiz on",
        16.0,
        from_top(106.7),
        &helvetica,
    );
    centered_text(&layer, &data.topic_name, 20.0, from_top(124.5), &helvetica_bold);

    let score_line = format!(
        "Score: {}/{} | Grade: {}",
        data.score, data.total_questions, data.grade
    );
    centered_text(&layer, &score_line, 14.0, from_top(142.2), &helvetica);

    let date_line = format!("Date: {}", format_display_date(data.issued_at));
    centered_text(&layer, &date_line, 12.0, from_top(160.0), &helvetica);

    let serial_line = format!("Certificate ID: {}", data.serial);
    centered_text(&layer, &serial_line, 9.0, Mm(BORDER_MARGIN_MM + 6.0), &helvetica);

    layer.set_outline_thickness(3.0);
    layer.add_line(page_border());

    let file = File::create(&path)
        .map_err(|e| AppError::Pdf(format!("cannot create certificate file: {e}")))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    Ok(path)
}

/// Horizontally centred text line.
///
/// The builtin Helvetica fonts carry no glyph metrics, so the width is
/// approximated with an average glyph advance of half the font size. Good
/// enough for the short lines a certificate carries.
fn centered_text(
    layer: &printpdf::PdfLayerReference,
    text: &str,
    font_size: f32,
    y: Mm,
    font: &printpdf::IndirectFontRef,
) {
    let approx_width_mm = text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM;
    let x = (PAGE_WIDTH_MM - approx_width_mm).max(0.0) / 2.0;
    layer.use_text(text, font_size, Mm(x), y, font);
}

fn from_top(mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - mm)
}

fn page_border() -> Line {
    let left = BORDER_MARGIN_MM;
    let right = PAGE_WIDTH_MM - BORDER_MARGIN_MM;
    let bottom = BORDER_MARGIN_MM;
    let top = PAGE_HEIGHT_MM - BORDER_MARGIN_MM;

    Line {
        points: vec![
            (Point::new(Mm(left), Mm(bottom)), false),
            (Point::new(Mm(right), Mm(bottom)), false),
            (Point::new(Mm(right), Mm(top)), false),
            (Point::new(Mm(left), Mm(top)), false),
        ],
        is_closed: true,
    }
}

/// Keep certificate filenames filesystem-safe
fn sanitize_for_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::crypto::generate_certificate_serial;
    use crate::utils::time::now_utc;

    fn sample_data() -> CertificateData {
        CertificateData {
            recipient_name: "Test User".to_string(),
            topic_name: "JavaScript Basics".to_string(),
            score: 9,
            total_questions: 10,
            grade: Grade::A,
            serial: generate_certificate_serial(),
            issued_at: now_utc(),
        }
    }

    #[test]
    fn test_render_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();

        let path = render_to_dir(dir.path(), &sample_data()).unwrap();

        assert!(path.exists());
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_filename_is_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = sample_data();
        data.recipient_name = "Eva / de Souza".to_string();

        let path = render_to_dir(dir.path(), &data).unwrap();
        let filename = path.file_name().unwrap().to_string_lossy().into_owned();

        assert!(filename.starts_with("certificate_Eva___de_Souza_"));
        assert!(!filename.contains('/'));
    }
}
