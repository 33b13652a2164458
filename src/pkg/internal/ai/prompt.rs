/// Resume text beyond this many characters is dropped to bound request size.
const RESUME_LIMIT: usize = 15_000;
/// Same bound for the job description.
const JD_LIMIT: usize = 5_000;

/// Builds the fixed ATS instruction prompt. Pure string templating, no
/// validation beyond truncation.
pub fn build_prompt(resume_text: &str, jd_text: &str) -> String {
    format!(
        r#"You are an advanced Applicant Tracking System (ATS) AI.

Task: Compare the provided Resume against the Job Description.

Resume Text (Truncated):
{}

Job Description:
{}

Output Requirement:
You MUST return the response in strict JSON format (NO MARKDOWN) with this structure:
{{
    "match_percentage": <integer_0_to_100>,
    "matching_skills": ["skill1", "skill2", ...],
    "missing_skills": ["skill1", "skill2", ...],
    "formatting_issues": ["issue1", "issue2", ...],
    "summary_feedback": "<short_executive_summary_string>"
}}
"#,
        truncate_chars(resume_text, RESUME_LIMIT),
        truncate_chars(jd_text, JD_LIMIT),
    )
}

// character-based so a multibyte resume never splits mid-scalar
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_both_texts_and_schema_keys() {
        let prompt = build_prompt("ten years of rust", "senior rust engineer");
        assert!(prompt.contains("ten years of rust"));
        assert!(prompt.contains("senior rust engineer"));
        for key in [
            "match_percentage",
            "matching_skills",
            "missing_skills",
            "formatting_issues",
            "summary_feedback",
        ] {
            assert!(prompt.contains(key), "prompt missing key {key}");
        }
    }

    #[test]
    fn resume_is_truncated_to_limit() {
        let resume = "r".repeat(RESUME_LIMIT + 500);
        let prompt = build_prompt(&resume, "jd");
        let longest_run = prompt
            .split(|c| c != 'r')
            .map(str::len)
            .max()
            .unwrap_or(0);
        assert_eq!(longest_run, RESUME_LIMIT);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(JD_LIMIT + 100);
        let truncated = truncate_chars(&text, JD_LIMIT);
        assert_eq!(truncated.chars().count(), JD_LIMIT);
    }

    #[test]
    fn short_input_is_untouched() {
        assert_eq!(truncate_chars("short", RESUME_LIMIT), "short");
    }
}
