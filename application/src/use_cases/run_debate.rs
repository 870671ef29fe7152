//! Run Debate use case
//!
//! Takes turns until the session reaches `completed`.

use super::take_turn::{TakeTurnUseCase, TurnError};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use agora_domain::DebateSession;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Turns beyond the rounds themselves: welcome, closing call, two closing
/// statements, fact-check, summary
const NON_ROUND_TURNS: u32 = 6;

#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error("Debate {debate_id} did not complete within {turns} turns")]
    TurnLimitExceeded { debate_id: String, turns: u32 },
}

pub struct RunDebateUseCase {
    take_turn: Arc<TakeTurnUseCase>,
}

impl RunDebateUseCase {
    pub fn new(take_turn: Arc<TakeTurnUseCase>) -> Self {
        Self { take_turn }
    }

    pub async fn execute(&self, session: &DebateSession) -> Result<DebateSession, RunDebateError> {
        self.execute_with_progress(session, &NoProgress).await
    }

    /// Drive `session` to completion, resuming from wherever it stands
    pub async fn execute_with_progress(
        &self,
        session: &DebateSession,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<DebateSession, RunDebateError> {
        if session.status().is_terminal() {
            return Ok(session.clone());
        }

        // The opening round is always played, even with a ceiling of zero.
        let turn_limit = session
            .max_rounds()
            .max(1)
            .saturating_mul(2)
            .saturating_add(NON_ROUND_TURNS);
        let debate_id = session.id();
        info!(debate_id, turn_limit, "Running debate");

        for _ in 0..turn_limit {
            let outcome = self
                .take_turn
                .execute_with_progress(debate_id, progress)
                .await?;
            if outcome.status_changed() {
                debug!(
                    debate_id,
                    from = %outcome.previous_status,
                    to = %outcome.session.status(),
                    "Phase advanced"
                );
            }
            if outcome.is_complete() {
                info!(
                    debate_id,
                    rounds = outcome.session.current_round(),
                    messages = outcome.session.messages().len(),
                    "Debate completed"
                );
                return Ok(outcome.session);
            }
        }

        Err(RunDebateError::TurnLimitExceeded {
            debate_id: debate_id.to_string(),
            turns: turn_limit,
        })
    }
}
