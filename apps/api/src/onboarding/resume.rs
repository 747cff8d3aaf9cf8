//! Resume step intake. Files are type-checked and measured, never parsed or kept.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Accepts a MIME type, ignoring parameters and case.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Some(ResumeFormat::Pdf),
            DOCX_MIME => Some(ResumeFormat::Docx),
            _ => None,
        }
    }
}

/// Where the resume on file came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeSource {
    Upload {
        file_name: String,
        format: ResumeFormat,
        size_bytes: usize,
    },
    Linkedin,
}

#[derive(Debug, Error, PartialEq)]
pub enum UploadError {
    #[error("Please upload a PDF or DOCX file (got '{0}')")]
    UnsupportedType(String),

    #[error("The uploaded file is empty")]
    Empty,

    #[error("No file field in upload")]
    MissingFile,
}

/// A file received from the drag-and-drop zone or the file browser.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

pub fn validate_upload(upload: &ResumeUpload) -> Result<ResumeSource, UploadError> {
    let format = ResumeFormat::from_mime(&upload.content_type)
        .ok_or_else(|| UploadError::UnsupportedType(upload.content_type.clone()))?;
    if upload.data.is_empty() {
        return Err(UploadError::Empty);
    }
    Ok(ResumeSource::Upload {
        file_name: upload.file_name.clone(),
        format,
        size_bytes: upload.data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, data: &'static [u8]) -> ResumeUpload {
        ResumeUpload {
            file_name: "resume".to_string(),
            content_type: content_type.to_string(),
            data: Bytes::from_static(data),
        }
    }

    #[test]
    fn test_pdf_and_docx_accepted() {
        let pdf = validate_upload(&upload("application/pdf", b"%PDF-1.7")).unwrap();
        assert!(matches!(
            pdf,
            ResumeSource::Upload { format: ResumeFormat::Pdf, size_bytes: 8, .. }
        ));
        let docx = validate_upload(&upload(DOCX_MIME, b"PK\x03\x04")).unwrap();
        assert!(matches!(
            docx,
            ResumeSource::Upload { format: ResumeFormat::Docx, .. }
        ));
    }

    #[test]
    fn test_mime_parameters_ignored() {
        assert_eq!(
            ResumeFormat::from_mime("Application/PDF; charset=binary"),
            Some(ResumeFormat::Pdf)
        );
    }

    #[test]
    fn test_other_types_rejected() {
        assert_eq!(
            validate_upload(&upload("application/msword", b"doc")),
            Err(UploadError::UnsupportedType("application/msword".to_string()))
        );
        assert!(validate_upload(&upload("image/png", b"png")).is_err());
    }

    #[test]
    fn test_empty_file_rejected() {
        assert_eq!(
            validate_upload(&upload("application/pdf", b"")),
            Err(UploadError::Empty)
        );
    }
}
