//! Debate Orchestrator use case
//!
//! The stateless entry points behind the four inbound actions. Each call
//! receives the relevant slice of session state, decides which persona
//! acts, and returns that persona's utterance. Nothing is stored here;
//! applying the utterance to the session is the caller's job.

use crate::agents::{DebateAgents, DebaterTurn};
use crate::config::DebateConfig;
use crate::ports::model_invoker::{ModelInvocationError, ModelInvoker};
use agora_domain::{
    Action, AgentResponse, DebateMessage, DebateStatus, DebaterPositions, DomainError, Persona,
    PersonaRoster, Turn, Verdict, select_next_turn, transcript,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while producing a turn
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("A non-empty proposition is required to initialize a debate")]
    MissingProposition,

    #[error("Action '{0}' requires a non-empty transcript context")]
    MissingContext(Action),

    #[error("Invalid invocation payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Model invocation failed: {0}")]
    Invocation(#[from] ModelInvocationError),
}

impl OrchestratorError {
    /// True when the input was rejected before any model call
    pub fn is_precondition(&self) -> bool {
        match self {
            OrchestratorError::MissingProposition
            | OrchestratorError::MissingContext(_)
            | OrchestratorError::InvalidPayload(_) => true,
            OrchestratorError::Domain(e) => e.is_precondition(),
            OrchestratorError::Invocation(_) => false,
        }
    }
}

/// Transcript state handed to `respond`, `fact_check` and `summarize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnContext {
    pub messages: Vec<DebateMessage>,
    pub current_round: u32,
    pub debater_positions: DebaterPositions,
    /// Round ceiling; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rounds: Option<u32>,
    /// Session status, used to tell closing statements from rebuttals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DebateStatus>,
}

/// Use case producing the next utterance for each inbound action
pub struct DebateOrchestrator {
    agents: DebateAgents,
    config: DebateConfig,
}

impl DebateOrchestrator {
    pub fn new(config: DebateConfig, invoker: Arc<dyn ModelInvoker>) -> Self {
        Self {
            agents: DebateAgents::new(&config, invoker),
            config,
        }
    }

    pub fn config(&self) -> &DebateConfig {
        &self.config
    }

    pub fn roster(&self) -> &PersonaRoster {
        self.config.roster()
    }

    /// Host's welcome, with freshly assigned positions in the metadata
    pub async fn initialize(
        &self,
        proposition: Option<&str>,
    ) -> Result<AgentResponse, OrchestratorError> {
        let proposition = proposition
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(OrchestratorError::MissingProposition)?;

        info!(proposition, "Initializing debate");
        Ok(self.agents.orchestrator.initialize(proposition).await?)
    }

    /// Next exchange turn: a debater statement or the host's closing call
    pub async fn respond(
        &self,
        context: Option<&TurnContext>,
        proposition: Option<&str>,
    ) -> Result<AgentResponse, OrchestratorError> {
        let context = context.ok_or(OrchestratorError::MissingContext(Action::Respond))?;
        let closing = context.status == Some(DebateStatus::Closing);

        let mut turn = select_next_turn(&context.messages)?;
        if turn == Turn::RoundBoundary {
            if closing {
                // Both closing statements are in; the next step is the fact-check.
                return Err(DomainError::UnresolvableSpeaker.into());
            }
            let max_rounds = context.max_rounds.unwrap_or(self.config.rules().max_rounds);
            let carry_on = self
                .agents
                .orchestrator
                .should_continue(&context.messages, context.current_round, max_rounds)
                .await?;
            let verdict = if carry_on {
                Verdict::Continue
            } else {
                Verdict::Close
            };
            info!(
                round = context.current_round,
                max_rounds,
                ?verdict,
                "Round boundary"
            );
            turn = turn.after_verdict(verdict);
        }

        match turn {
            Turn::Debater(persona) => {
                let agent = self
                    .agents
                    .debater(persona)
                    .ok_or(DomainError::UnresolvableSpeaker)?;
                let position = context
                    .debater_positions
                    .position_of(persona)
                    .ok_or(DomainError::PositionsMissing)?;
                debug!(%persona, %position, closing, "Debater turn selected");
                let turn = DebaterTurn {
                    messages: &context.messages,
                    proposition,
                    position,
                    closing,
                };
                Ok(agent.respond(&turn).await?)
            }
            Turn::CallForClosing => Ok(self.agents.orchestrator.call_for_closing().await?),
            Turn::RoundBoundary => Err(DomainError::UnresolvableSpeaker.into()),
        }
    }

    /// Fact-check report over every debater statement
    pub async fn fact_check(
        &self,
        context: Option<&TurnContext>,
    ) -> Result<AgentResponse, OrchestratorError> {
        let context = Self::non_empty(context, Action::FactCheck)?;
        Ok(self.agents.fact_checker.fact_check(&context.messages).await?)
    }

    /// Final four-part summary.
    ///
    /// Without a proposition the host's welcome stands in for it, and an
    /// empty topic is used when there is no welcome either.
    pub async fn summarize(
        &self,
        context: Option<&TurnContext>,
        proposition: Option<&str>,
    ) -> Result<AgentResponse, OrchestratorError> {
        let context = Self::non_empty(context, Action::Summarize)?;
        let proposition = match proposition.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => p,
            None => {
                warn!("No proposition supplied for the summary, using the host's welcome");
                transcript::first_from(&context.messages, Persona::Orchestrator)
                    .map(|m| m.content.as_str())
                    .unwrap_or_default()
            }
        };
        Ok(self
            .agents
            .summariser
            .summarize(&context.messages, proposition)
            .await?)
    }

    fn non_empty(
        context: Option<&TurnContext>,
        action: Action,
    ) -> Result<&TurnContext, OrchestratorError> {
        context
            .filter(|c| !c.messages.is_empty())
            .ok_or(OrchestratorError::MissingContext(action))
    }
}
