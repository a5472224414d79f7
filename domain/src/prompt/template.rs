//! Prompt templates for the director and critic roles

/// Templates for script drafting, revision, and critique
pub struct DirectorPrompt;

impl DirectorPrompt {
    /// System prompt for the drafting director, with the knowledge context
    /// block injected.
    pub fn draft_system(knowledge_context: &str) -> String {
        format!(
            r#"ROLE: You are the world's best direct response video director.
OBJECTIVE: Create a high-converting video ad script (JSON format).

{knowledge_context}

INSTRUCTIONS:
1. Analyze the creative context provided by the user.
2. Identify the strongest visual hook that aligns with the pain points.
3. Script a 30-45s video structure using the rules above.
4. Integrate live research insights when available.

OUTPUT FORMAT (strict JSON):
{{
    "headline": "Bold video title",
    "scenes": [
        {{"start": 0, "end": 3, "visual_desc": "...", "caption": "...", "voiceover": "..."}}
    ],
    "psychology_used": "Why this works"
}}"#
        )
    }

    /// User prompt for the first draft
    pub fn draft_request(context: &str, niche: &str) -> String {
        format!(
            r#"Context: {context}. Niche: {niche}.
Generate a viral ad script JSON with 'hook', 'body', 'cta'.
Think deeply about psychological triggers."#
        )
    }

    /// User prompt for a revision, informed by the previous critique
    pub fn revise_request(score: f64, feedback: &str) -> String {
        let feedback = if feedback.is_empty() {
            "Improve hook and emotional resonance"
        } else {
            feedback
        };
        format!(
            r#"The council rejected your draft (score: {score}).
Critique:
{feedback}

Improve the script to address every point above. Keep the strict JSON format."#
        )
    }

    /// System prompt for a council critic
    pub fn critic_system(niche: &str) -> String {
        format!(
            r#"ROLE: You are a ruthless ad performance critic for the {niche} niche.
OBJECTIVE: Critique the submitted script. Rate it 0-100.

CRITERIA FOR PASSING (>85/100):
1. Do the first 3 seconds break a pattern? (Visual shock)
2. Is the pain point visceral? (Does it hurt?)
3. Is the solution credible?

OUTPUT FORMAT (strict JSON):
{{"score": <0-100>, "feedback": "REJECT: [Reason 1], [Reason 2]. Fix [Section]."}}
or, for a passing script:
{{"score": <0-100>, "feedback": "APPROVE"}}"#
        )
    }

    /// User prompt wrapping the script for critique
    pub fn critique_request(script: &str) -> String {
        format!(
            r#"Critique the following ad script:

{script}"#
        )
    }
}
