use axum::body::Bytes;
use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::pkg::internal::ai::prompt::build_prompt;
use crate::pkg::internal::ai::sanitize::{fallback, parse_analysis, AnalysisResult};
use crate::pkg::internal::storage;
use crate::pkg::server::state::AppState;
use crate::prelude::*;

/// POST /analyze: multipart `resume` (PDF) + `job_description` (text).
/// Validation and extraction failures are 400s; analysis failures are
/// absorbed into the fallback result, so a reachable model is not required
/// for a 200.
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("invalid multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("could not read resume upload: {e}")))?;
                resume = Some((filename, data));
            }
            "job_description" => {
                let text = field.text().await.map_err(|e| {
                    Error::Validation(format!("could not read job description: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (filename, data) =
        resume.ok_or_else(|| Error::Validation("Resume PDF is required".to_string()))?;
    let job_description = job_description
        .filter(|jd| !jd.is_empty())
        .ok_or_else(|| Error::Validation("Job description is required".to_string()))?;
    if filename.is_empty() {
        return Err(Error::Validation("No selected file".to_string()));
    }
    tracing::info!(
        "analyzing {} against a {} character job description",
        &filename,
        job_description.len()
    );

    let path = storage::store(&state.upload_dir, &data).await?;
    let stored = match storage::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            storage::cleanup(&path).await;
            return Err(err);
        }
    };
    let resume_text = match state.extractor.extract(&stored) {
        Ok(text) => text,
        Err(err) => {
            storage::cleanup(&path).await;
            return Err(err);
        }
    };

    let prompt = build_prompt(&resume_text, &job_description);
    let result = match state.ai_client.generate(&prompt).await {
        Ok(raw) => parse_analysis(&raw),
        Err(err) => {
            tracing::error!("analysis call failed: {err}");
            fallback(&err.to_string())
        }
    };

    storage::cleanup(&path).await;
    Ok(Json(result))
}
