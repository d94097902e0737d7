//! Boundary validation and the request/response envelope around an analysis

use crate::config::ValidationConfig;
use crate::error::{AtsError, Result};
use crate::processing::analyzer::ATSAnalyzer;
use crate::processing::score::ATSScore;
use serde::{Deserialize, Serialize};

/// Uploads larger than this are rejected before extraction
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ATSScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// HTTP-style status: 200, 400 for rejected input, 500 otherwise
    #[serde(skip)]
    pub status: u16,
}

impl ApiResponse {
    pub fn ok(score: ATSScore) -> Self {
        Self {
            success: true,
            data: Some(score),
            error: None,
            details: None,
            status: 200,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: None,
            status: 400,
        }
    }

    pub fn internal_error(details: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some("Internal server error".to_string()),
            details: Some(details.into()),
            status: 500,
        }
    }
}

fn validate_text(text: &str, field: &str, label: &str, min_chars: usize, max_chars: usize) -> Result<()> {
    // Only truly empty input is "required"; whitespace falls through to the length check
    if text.is_empty() {
        return Err(AtsError::Validation(format!("{} is required.", field)));
    }

    let len = text.trim().chars().count();
    if len < min_chars {
        return Err(AtsError::Validation(format!(
            "{} is too short (minimum {} characters).",
            label, min_chars
        )));
    }
    if len > max_chars {
        return Err(AtsError::Validation(format!(
            "{} exceeds maximum length of {} characters.",
            label, max_chars
        )));
    }
    Ok(())
}

pub fn validate_resume_text(text: &str, limits: &ValidationConfig) -> Result<()> {
    validate_text(text, "Resume text", "Resume", limits.min_resume_chars, limits.max_chars)
}

pub fn validate_job_description(text: &str, limits: &ValidationConfig) -> Result<()> {
    validate_text(
        text,
        "Job description",
        "Job description",
        limits.min_job_chars,
        limits.max_chars,
    )
}

pub fn validate_file_size(size_bytes: u64) -> Result<()> {
    if size_bytes > MAX_FILE_SIZE {
        return Err(AtsError::Validation("File size exceeds 5MB limit.".to_string()));
    }
    Ok(())
}

/// Strip NUL bytes and surrounding whitespace
pub fn sanitize_text(text: &str) -> String {
    text.replace('\0', "").trim().to_string()
}

/// Validate both texts, then return them sanitized and ready for analysis
pub fn prepare_texts(resume_text: &str, job_description: &str, limits: &ValidationConfig) -> Result<(String, String)> {
    validate_resume_text(resume_text, limits)?;
    validate_job_description(job_description, limits)?;
    Ok((sanitize_text(resume_text), sanitize_text(job_description)))
}

/// Validate, sanitize and analyze one request
pub fn handle_request(
    request: &AnalyzeRequest,
    analyzer: &ATSAnalyzer,
    limits: &ValidationConfig,
) -> ApiResponse {
    let (resume_text, job_description) =
        match prepare_texts(&request.resume_text, &request.job_description, limits) {
            Ok(texts) => texts,
            Err(e) => {
                log::warn!("Rejected analysis request: {}", e);
                return ApiResponse::bad_request(e.to_string());
            }
        };

    let score = analyzer.analyze(&resume_text, &job_description, request.resume_file_name.as_deref());
    ApiResponse::ok(score)
}

/// Parse a JSON request body and handle it; malformed bodies are internal errors
pub fn handle_request_json(body: &str, analyzer: &ATSAnalyzer, limits: &ValidationConfig) -> ApiResponse {
    match serde_json::from_str::<AnalyzeRequest>(body) {
        Ok(request) => handle_request(&request, analyzer, limits),
        Err(e) => {
            log::error!("Analysis error: {}", e);
            ApiResponse::internal_error(e.to_string())
        }
    }
}
