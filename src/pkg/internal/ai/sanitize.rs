use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The one response shape `/analyze` is allowed to produce, success or not.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_percentage: u8,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub formatting_issues: Vec<String>,
    pub summary_feedback: String,
}

/// Strips a leading ```json / ``` fence and a trailing ``` fence, then trims.
/// A no-op on fence-free input.
pub fn clean_json(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

/// Parses raw model output into an `AnalysisResult`, substituting the fixed
/// fallback on any failure so callers never see a malformed result.
pub fn parse_analysis(raw: &str) -> AnalysisResult {
    match try_parse(raw) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!("analysis response rejected: {err}");
            fallback(&err.to_string())
        }
    }
}

fn try_parse(raw: &str) -> Result<AnalysisResult> {
    let cleaned = clean_json(raw);
    if cleaned.is_empty() {
        return Err(Error::MalformedResponse(
            "model returned an empty response".into(),
        ));
    }
    let result: AnalysisResult =
        serde_json::from_str(cleaned).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    if result.match_percentage > 100 {
        return Err(Error::MalformedResponse(format!(
            "match_percentage {} out of range",
            result.match_percentage
        )));
    }
    Ok(result)
}

pub fn fallback(cause: &str) -> AnalysisResult {
    AnalysisResult {
        match_percentage: 0,
        matching_skills: vec![],
        missing_skills: vec![format!("Error: {cause}")],
        formatting_issues: vec!["AI Analysis Failed".into()],
        summary_feedback: "The system encountered an error while processing the document.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = r#"{"match_percentage": 80, "matching_skills": ["rust"], "missing_skills": [], "formatting_issues": [], "summary_feedback": "solid"}"#;

    #[test]
    fn strips_json_fence() {
        assert_eq!(
            clean_json("```json\n{\"match_percentage\": 80}\n```"),
            "{\"match_percentage\": 80}"
        );
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(clean_json("```\n{}\n```"), "{}");
    }

    #[test]
    fn is_noop_on_clean_input() {
        assert_eq!(clean_json(CLEAN), CLEAN);
    }

    #[test]
    fn is_idempotent() {
        let once = clean_json("```json\n{\"a\": 1}\n```").to_string();
        assert_eq!(clean_json(&once), once);
    }

    #[test]
    fn parses_valid_result() {
        let result = parse_analysis(CLEAN);
        assert_eq!(result.match_percentage, 80);
        assert_eq!(result.matching_skills, vec!["rust".to_string()]);
        assert_eq!(result.summary_feedback, "solid");
    }

    #[test]
    fn parses_fenced_result() {
        let fenced = format!("```json\n{CLEAN}\n```");
        assert_eq!(parse_analysis(&fenced).match_percentage, 80);
    }

    #[test]
    fn non_json_falls_back() {
        let result = parse_analysis("I'm sorry, I can't help with that.");
        assert_eq!(result.match_percentage, 0);
        assert!(result.matching_skills.is_empty());
        assert!(result.missing_skills[0].starts_with("Error: "));
        assert_eq!(result.formatting_issues, vec!["AI Analysis Failed"]);
    }

    #[test]
    fn empty_response_falls_back() {
        let result = parse_analysis("");
        assert_eq!(result.match_percentage, 0);
        assert!(result.missing_skills[0].starts_with("Error: "));
    }

    #[test]
    fn out_of_range_percentage_falls_back() {
        let oversized = CLEAN.replace(": 80", ": 150");
        let result = parse_analysis(&oversized);
        assert_eq!(result.match_percentage, 0);
        assert_eq!(result.formatting_issues, vec!["AI Analysis Failed"]);
    }

    #[test]
    fn fallback_shape_is_fixed() {
        let result = fallback("connection refused");
        assert_eq!(result.match_percentage, 0);
        assert!(result.matching_skills.is_empty());
        assert_eq!(result.missing_skills, vec!["Error: connection refused"]);
        assert_eq!(result.formatting_issues, vec!["AI Analysis Failed"]);
        assert_eq!(
            result.summary_feedback,
            "The system encountered an error while processing the document."
        );
    }
}
