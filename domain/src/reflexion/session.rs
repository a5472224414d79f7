//! Reflexion session state
//!
//! One session owns the state of a single draft/critique/revise run. It is
//! created at the start of an evaluation request, exclusively owned by that
//! request, and discarded once a terminal status is reached. Persistence is
//! an external collaborator concern.

use crate::core::error::DomainError;
use crate::council::critique::CouncilVerdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reflexion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReflexionStatus {
    /// The loop is still drafting, evaluating, or revising
    InProgress,
    /// The council approved a draft
    Approved,
    /// Turn budget exhausted without approval. Designed terminal outcome,
    /// not an error: the last draft and critique are retained.
    Rejected,
    /// A required collaborator was missing or failed; no meaningful loop
    /// could proceed
    Error,
}

impl ReflexionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReflexionStatus::InProgress)
    }
}

impl std::fmt::Display for ReflexionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReflexionStatus::InProgress => write!(f, "IN_PROGRESS"),
            ReflexionStatus::Approved => write!(f, "APPROVED"),
            ReflexionStatus::Rejected => write!(f, "REJECTED"),
            ReflexionStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// One evaluated draft in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflexionTurn {
    pub draft: String,
    pub verdict: CouncilVerdict,
    pub evaluated_at: DateTime<Utc>,
}

/// State of one bounded generate -> critique -> revise run
///
/// `turn` is 0-indexed and counts revisions: the first draft is evaluated
/// at turn 0, and each revision increments it. The loop performs at most
/// `max_turns` evaluations, so termination is guaranteed regardless of
/// collaborator behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflexionSession {
    pub turn: usize,
    pub max_turns: usize,
    pub current_draft: Option<String>,
    pub history: Vec<ReflexionTurn>,
    pub status: ReflexionStatus,
}

impl ReflexionSession {
    /// Start a session. `max_turns` must be positive.
    pub fn new(max_turns: usize) -> Result<Self, DomainError> {
        if max_turns == 0 {
            return Err(DomainError::ZeroMaxTurns);
        }
        Ok(Self {
            turn: 0,
            max_turns,
            current_draft: None,
            history: Vec::new(),
            status: ReflexionStatus::InProgress,
        })
    }

    /// Accept a draft (initial or revised) for the current turn.
    pub fn accept_draft(&mut self, draft: impl Into<String>) {
        self.current_draft = Some(draft.into());
    }

    /// Record a council evaluation of the current draft and transition.
    ///
    /// Approval terminates the session. A rejection on the final permitted
    /// evaluation terminates it as `Rejected`; otherwise the session stays
    /// in progress awaiting a revision.
    pub fn record_evaluation(&mut self, verdict: CouncilVerdict) {
        let draft = self.current_draft.clone().unwrap_or_default();
        let approved = verdict.is_approved();
        self.history.push(ReflexionTurn {
            draft,
            verdict,
            evaluated_at: Utc::now(),
        });

        if approved {
            self.status = ReflexionStatus::Approved;
        } else if !self.can_revise() {
            self.status = ReflexionStatus::Rejected;
        }
    }

    /// Record a revised draft, consuming one turn.
    pub fn record_revision(&mut self, draft: impl Into<String>) {
        self.turn += 1;
        self.accept_draft(draft);
    }

    /// Mark the session failed on a missing or broken collaborator.
    pub fn fail(&mut self) {
        self.status = ReflexionStatus::Error;
    }

    /// Whether another revision is permitted after a rejection.
    pub fn can_revise(&self) -> bool {
        self.turn + 1 < self.max_turns
    }

    /// Turns consumed by this session.
    ///
    /// Revisions performed on approval (0 for a first-draft approval),
    /// `max_turns` on exhaustion.
    pub fn turns_taken(&self) -> usize {
        match self.status {
            ReflexionStatus::Rejected => self.max_turns,
            _ => self.turn,
        }
    }

    /// The most recent verdict, if any evaluation happened.
    pub fn last_verdict(&self) -> Option<&CouncilVerdict> {
        self.history.last().map(|t| &t.verdict)
    }

    /// Number of evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.history.len()
    }
}
