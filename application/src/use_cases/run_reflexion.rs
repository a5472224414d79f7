//! Run reflexion use case (orchestrator)
//!
//! Drives the bounded generate -> evaluate -> (accept | revise) cycle
//! against the council evaluator. The loop is strictly sequential: each
//! revision depends on the prior critique. Termination is guaranteed by
//! the turn budget regardless of provider behavior.

use crate::config::ReflexionConfig;
use crate::ports::{DraftGenerator, KnowledgeContext};
use crate::use_cases::evaluate_script::EvaluateScript;
use oracle_domain::{
    CouncilVerdict, DirectorPrompt, ReflexionSession, ReflexionStatus, ReflexionTurn,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Terminal result of one reflexion run
///
/// Callers always receive this well-formed object; the orchestrator never
/// propagates a raw error across its boundary. Turn exhaustion surfaces as
/// `Rejected`, a missing or broken collaborator as `Error`, and the two
/// are distinguishable by the status field.
#[derive(Debug, Clone, Serialize)]
pub struct ReflexionOutcome {
    pub status: ReflexionStatus,
    pub final_draft: Option<String>,
    pub last_verdict: Option<CouncilVerdict>,
    pub turns_taken: usize,
    pub history: Vec<ReflexionTurn>,
}

impl ReflexionOutcome {
    fn from_session(session: ReflexionSession) -> Self {
        Self {
            status: session.status,
            turns_taken: session.turns_taken(),
            last_verdict: session.last_verdict().cloned(),
            final_draft: session.current_draft.clone(),
            history: session.history,
        }
    }

    /// Precondition failure before any session state existed
    fn precondition_error() -> Self {
        Self {
            status: ReflexionStatus::Error,
            final_draft: None,
            last_verdict: None,
            turns_taken: 0,
            history: Vec::new(),
        }
    }
}

/// Use case for running the full draft/critique/revise loop
pub struct RunReflexion {
    generator: Option<Arc<dyn DraftGenerator>>,
    council: Arc<EvaluateScript>,
    knowledge: Arc<dyn KnowledgeContext>,
    config: ReflexionConfig,
}

impl RunReflexion {
    /// Wire the orchestrator. The generator is optional by design: its
    /// absence is reported as an `Error` outcome at execution time rather
    /// than a construction failure, so the routing layer can still expose
    /// the endpoint and return a well-formed status.
    pub fn new(
        generator: Option<Arc<dyn DraftGenerator>>,
        council: Arc<EvaluateScript>,
        knowledge: Arc<dyn KnowledgeContext>,
        config: ReflexionConfig,
    ) -> Self {
        Self {
            generator,
            council,
            knowledge,
            config,
        }
    }

    /// Run the loop for one creative context.
    pub async fn execute(&self, context: &str, niche: &str) -> ReflexionOutcome {
        // Orchestration precondition: without a generator no meaningful
        // loop can proceed. Short-circuits without consuming a turn.
        let Some(generator) = &self.generator else {
            warn!("No draft generator configured; reflexion cannot run");
            return ReflexionOutcome::precondition_error();
        };

        let mut session = match ReflexionSession::new(self.config.max_turns) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Invalid reflexion configuration");
                return ReflexionOutcome::precondition_error();
            }
        };

        info!(niche, max_turns = session.max_turns, "Starting reflexion run");

        // Initial draft, steered by the injected knowledge context
        let knowledge_block = self.knowledge.context_block(niche).await;
        let prompt = format!(
            "{}\n\n{}",
            DirectorPrompt::draft_system(&knowledge_block),
            DirectorPrompt::draft_request(context, niche)
        );
        match generator.generate(&prompt).await {
            Ok(draft) => session.accept_draft(draft),
            Err(e) => {
                warn!(error = %e, "Initial draft generation failed");
                session.fail();
                return ReflexionOutcome::from_session(session);
            }
        }

        loop {
            let draft = session.current_draft.clone().unwrap_or_default();
            let verdict = self.council.execute(&draft, None).await;
            info!(
                turn = session.turn,
                score = verdict.final_score,
                verdict = %verdict.verdict,
                "Council reviewed draft"
            );

            let score = verdict.final_score;
            let feedback = verdict.feedback.clone();
            session.record_evaluation(verdict);

            match session.status {
                ReflexionStatus::Approved => {
                    info!(turns = session.turns_taken(), "Script approved");
                    break;
                }
                ReflexionStatus::Rejected => {
                    info!(turns = session.turns_taken(), "Turn budget exhausted");
                    break;
                }
                ReflexionStatus::InProgress => {
                    let revise = DirectorPrompt::revise_request(score, &feedback);
                    match generator.generate(&revise).await {
                        Ok(draft) => session.record_revision(draft),
                        Err(e) => {
                            warn!(error = %e, "Revision generation failed");
                            session.fail();
                            break;
                        }
                    }
                }
                ReflexionStatus::Error => break,
            }
        }

        ReflexionOutcome::from_session(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CouncilConfig;
    use crate::ports::{CriticError, CriticProvider, GeneratorError};
    use async_trait::async_trait;
    use oracle_domain::{CouncilCritique, FeatureMap};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedCritic {
        /// Scores returned per call, last one repeating
        scores: Vec<f64>,
        calls: AtomicUsize,
    }

    impl ScriptedCritic {
        fn always(score: f64) -> Self {
            Self {
                scores: vec![score],
                calls: AtomicUsize::new(0),
            }
        }

        fn sequence(scores: Vec<f64>) -> Self {
            Self {
                scores,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CriticProvider for ScriptedCritic {
        fn name(&self) -> &str {
            "scripted"
        }

        fn weight(&self) -> f64 {
            1.0
        }

        fn fallback_score(&self) -> f64 {
            50.0
        }

        async fn critique(
            &self,
            _script: &str,
            _visual_features: Option<&FeatureMap>,
        ) -> Result<CouncilCritique, CriticError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let score = *self.scores.get(call).or(self.scores.last()).unwrap();
            Ok(CouncilCritique::new("scripted", score, "critique text"))
        }
    }

    struct CountingGenerator {
        calls: AtomicUsize,
    }

    impl CountingGenerator {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl DraftGenerator for CountingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("draft v{}", call + 1))
        }
    }

    struct BrokenGenerator;

    #[async_trait]
    impl DraftGenerator for BrokenGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            Err(GeneratorError::RequestFailed("connection reset".into()))
        }
    }

    struct FixedKnowledge;

    #[async_trait]
    impl KnowledgeContext for FixedKnowledge {
        async fn context_block(&self, niche: &str) -> String {
            format!("=== RULES ({niche}) ===")
        }
    }

    fn council_with(critic: ScriptedCritic) -> Arc<EvaluateScript> {
        Arc::new(EvaluateScript::new(vec![Arc::new(critic)], CouncilConfig::default()).unwrap())
    }

    fn orchestrator(
        generator: Option<Arc<dyn DraftGenerator>>,
        council: Arc<EvaluateScript>,
    ) -> RunReflexion {
        RunReflexion::new(
            generator,
            council,
            Arc::new(FixedKnowledge),
            ReflexionConfig { max_turns: 3 },
        )
    }

    #[tokio::test]
    async fn test_always_reject_terminates_after_three_evaluations() {
        let critic = ScriptedCritic::always(40.0);
        let council = council_with(critic);
        let generator = CountingGenerator::new();
        let run = orchestrator(
            Some(generator.clone() as Arc<dyn DraftGenerator>),
            Arc::clone(&council),
        );

        let outcome = run.execute("gym ad", "fitness").await;

        assert_eq!(outcome.status, ReflexionStatus::Rejected);
        assert_eq!(outcome.turns_taken, 3);
        assert_eq!(outcome.history.len(), 3);
        // One initial draft + two revisions
        assert_eq!(generator.calls.load(Ordering::SeqCst), 3);
        // Last draft and critique survive for inspection
        assert!(outcome.final_draft.is_some());
        assert!(outcome.last_verdict.is_some());
    }

    #[tokio::test]
    async fn test_first_draft_approval_takes_zero_turns() {
        let council = council_with(ScriptedCritic::always(92.0));
        let generator = CountingGenerator::new();
        let run = orchestrator(Some(generator.clone() as Arc<dyn DraftGenerator>), council);

        let outcome = run.execute("gym ad", "fitness").await;

        assert_eq!(outcome.status, ReflexionStatus::Approved);
        assert_eq!(outcome.turns_taken, 0);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_approval_after_one_revision() {
        let council = council_with(ScriptedCritic::sequence(vec![60.0, 92.0]));
        let run = orchestrator(
            Some(CountingGenerator::new() as Arc<dyn DraftGenerator>),
            council,
        );

        let outcome = run.execute("gym ad", "fitness").await;

        assert_eq!(outcome.status, ReflexionStatus::Approved);
        assert_eq!(outcome.turns_taken, 1);
        assert_eq!(outcome.final_draft.as_deref(), Some("draft v2"));
    }

    #[tokio::test]
    async fn test_missing_generator_errors_without_consuming_turns() {
        let council = council_with(ScriptedCritic::always(40.0));
        let run = orchestrator(None, council);

        let outcome = run.execute("gym ad", "fitness").await;

        assert_eq!(outcome.status, ReflexionStatus::Error);
        assert_eq!(outcome.turns_taken, 0);
        assert!(outcome.history.is_empty());
        assert!(outcome.final_draft.is_none());
    }

    #[tokio::test]
    async fn test_generator_failure_surfaces_as_error() {
        let council = council_with(ScriptedCritic::always(40.0));
        let run = orchestrator(Some(Arc::new(BrokenGenerator)), council);

        let outcome = run.execute("gym ad", "fitness").await;

        assert_eq!(outcome.status, ReflexionStatus::Error);
        assert_ne!(outcome.status, ReflexionStatus::Rejected);
    }

    #[tokio::test]
    async fn test_error_and_rejection_are_distinct_statuses() {
        let rejected = orchestrator(
            Some(CountingGenerator::new() as Arc<dyn DraftGenerator>),
            council_with(ScriptedCritic::always(40.0)),
        )
        .execute("ad", "fitness")
        .await;
        let errored = orchestrator(None, council_with(ScriptedCritic::always(40.0)))
            .execute("ad", "fitness")
            .await;

        assert_eq!(rejected.status, ReflexionStatus::Rejected);
        assert_eq!(errored.status, ReflexionStatus::Error);
    }
}
