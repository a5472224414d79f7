//! Critic response parsing
//!
//! Extracts a 0-100 script score from free-form critic responses. Pure
//! text pattern matching, no I/O.
//!
//! Critics are prompted for the protocol in [`crate::prompt::template`]:
//! `APPROVE` for a passing script, `REJECT: <reasons>` otherwise, ideally
//! with a JSON `{"score": N}` body. Real providers drift from the
//! protocol, so several fallback formats are accepted.

/// Parse a critic response into a 0-100 score.
///
/// # Supported formats
///
/// 1. **JSON** (preferred): `{"score": 88, "feedback": "..."}`
/// 2. **Fraction**: `88/100` or `Score: 72/100`
/// 3. **Keyword protocol**: a bare `APPROVE` reads as 90, a bare
///    `REJECT: ...` as 60 (rejected but salvageable)
/// 4. **Standalone number** in [0, 100], accepted only when the response
///    mentions scoring ("score", "rate"); incidental tokens like a draft
///    version must not read as a score
///
/// Returns `default` when nothing parses. The result is clamped to [0, 100].
///
/// # Examples
///
/// ```
/// use oracle_domain::council::parsing::parse_critique_score;
///
/// assert_eq!(parse_critique_score(r#"{"score": 88}"#, 50.0), 88.0);
/// assert_eq!(parse_critique_score("I rate this 72/100", 50.0), 72.0);
/// assert_eq!(parse_critique_score("no score here", 65.0), 65.0);
/// ```
pub fn parse_critique_score(response: &str, default: f64) -> f64 {
    // Try to find JSON in the response
    if let Some(start) = response.find('{')
        && let Some(end) = response[start..].rfind('}')
    {
        let json_str = &response[start..start + end + 1];
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(json_str)
            && let Some(score) = parsed.get("score").and_then(|v| v.as_f64())
        {
            return score.clamp(0.0, 100.0);
        }
    }

    // "N/100" pattern anywhere in the text
    for word in response.split_whitespace() {
        if let Some(num_str) = word.strip_suffix("/100")
            && let Ok(num) = num_str.parse::<f64>()
        {
            return num.clamp(0.0, 100.0);
        }
    }

    // Keyword protocol from the critic prompt
    let upper = response.to_uppercase();
    if upper.contains("REJECT") {
        return 60.0;
    }
    if upper.contains("APPROVE") {
        return 90.0;
    }

    // Standalone number in the valid range, only next to a scoring cue
    let lower = response.to_lowercase();
    if lower.contains("score") || lower.contains("rate") {
        for word in response.split_whitespace() {
            if let Ok(num) = word
                .trim_matches(|c: char| !c.is_ascii_digit() && c != '.')
                .parse::<f64>()
                && (0.0..=100.0).contains(&num)
            {
                return num;
            }
        }
    }

    default.clamp(0.0, 100.0)
}

/// Extract the rejection feedback from a critic response, if present.
///
/// `REJECT: Weak hook, no CTA.` yields `Weak hook, no CTA.`
pub fn parse_rejection_feedback(response: &str) -> Option<String> {
    let upper = response.to_uppercase();
    let idx = upper.find("REJECT")?;
    let rest = &response[idx + "REJECT".len()..];
    let feedback = rest.trim_start_matches([':', ' ']).trim();
    if feedback.is_empty() {
        None
    } else {
        Some(feedback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_score() {
        let response = r#"{"score": 88, "feedback": "Strong opening"}"#;
        assert_eq!(parse_critique_score(response, 50.0), 88.0);

        // Inside a markdown code block
        let response = "Evaluation:\n```json\n{\"score\": 73, \"feedback\": \"ok\"}\n```";
        assert_eq!(parse_critique_score(response, 50.0), 73.0);
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_critique_score("I rate this 88/100", 50.0), 88.0);
        assert_eq!(parse_critique_score("Score: 42/100 overall", 50.0), 42.0);
    }

    #[test]
    fn test_parse_keyword_protocol() {
        assert_eq!(parse_critique_score("APPROVE", 50.0), 90.0);
        assert_eq!(
            parse_critique_score("REJECT: Weak pain point. Fix the hook.", 50.0),
            60.0
        );
    }

    #[test]
    fn test_reject_wins_over_approve() {
        // "I cannot approve this. REJECT." — conservative reading
        assert_eq!(
            parse_critique_score("I cannot approve this. REJECT.", 50.0),
            60.0
        );
    }

    #[test]
    fn test_parse_standalone_number() {
        assert_eq!(parse_critique_score("My score is 91.", 50.0), 91.0);
        assert_eq!(parse_critique_score("I rate it 77 overall", 50.0), 77.0);
    }

    #[test]
    fn test_incidental_numbers_without_cue_fall_through() {
        // A draft label is not a score
        assert_eq!(parse_critique_score("draft v2", 65.0), 65.0);
        assert_eq!(parse_critique_score("Scene 3 drags a bit", 70.0), 70.0);
    }

    #[test]
    fn test_clamp_json_score() {
        assert_eq!(parse_critique_score(r#"{"score": 130}"#, 50.0), 100.0);
        assert_eq!(parse_critique_score(r#"{"score": -5}"#, 50.0), 0.0);
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(parse_critique_score("no numbers anywhere", 65.0), 65.0);
        assert_eq!(parse_critique_score("", 70.0), 70.0);
    }

    #[test]
    fn test_rejection_feedback() {
        let feedback = parse_rejection_feedback("REJECT: Weak hook, no CTA.");
        assert_eq!(feedback.unwrap(), "Weak hook, no CTA.");

        assert!(parse_rejection_feedback("APPROVE").is_none());
        assert!(parse_rejection_feedback("REJECT").is_none());
    }
}
