//! The host persona: opens the debate, judges round boundaries, calls for
//! closing statements

use super::core::AgentCore;
use crate::ports::model_invoker::ModelInvocationError;
use agora_domain::{
    AgentResponse, DebatePromptTemplate, DebateMessage, DebateRules, DebaterPositions, NextAction,
    Persona, Position, Verdict, transcript,
};
use rand::Rng;
use tracing::{debug, info};

/// How many trailing messages the continue-or-close query sees
const CONTINUE_CHECK_WINDOW: usize = 4;

pub struct OrchestratorAgent {
    core: AgentCore,
    rules: DebateRules,
}

impl OrchestratorAgent {
    pub fn new(core: AgentCore, rules: DebateRules) -> Self {
        Self { core, rules }
    }

    pub fn core(&self) -> &AgentCore {
        &self.core
    }

    fn system_prompt(&self) -> String {
        DebatePromptTemplate::orchestrator_system(self.core.profile())
    }

    /// Welcome the participants, assigning positions with a fair coin.
    pub async fn initialize(&self, proposition: &str) -> Result<AgentResponse, ModelInvocationError> {
        let debater_a = if rand::thread_rng().gen_bool(0.5) {
            Position::For
        } else {
            Position::Against
        };
        self.initialize_with_positions(proposition, DebaterPositions::new(debater_a))
            .await
    }

    /// Welcome the participants with caller-chosen positions
    pub async fn initialize_with_positions(
        &self,
        proposition: &str,
        positions: DebaterPositions,
    ) -> Result<AgentResponse, ModelInvocationError> {
        info!(
            debater_a = %positions.debater_a(),
            debater_b = %positions.debater_b(),
            "Assigned debater positions"
        );
        let roster = self.core.roster();
        let prompt = DebatePromptTemplate::welcome(
            proposition,
            positions,
            roster.get(Persona::DebaterA),
            roster.get(Persona::DebaterB),
            &self.rules,
        );

        let response = self
            .core
            .speak(&self.system_prompt(), &prompt, Some(NextAction::Continue))
            .await?;
        Ok(response.with_positions(positions))
    }

    /// Decide whether another round should be played.
    ///
    /// Once `current_round` reaches `max_rounds` the answer is `false`
    /// without consulting the model.
    pub async fn should_continue(
        &self,
        messages: &[DebateMessage],
        current_round: u32,
        max_rounds: u32,
    ) -> Result<bool, ModelInvocationError> {
        if current_round >= max_rounds {
            debug!(current_round, max_rounds, "Round ceiling reached");
            return Ok(false);
        }

        let recent: Vec<(String, String)> = transcript::recent(messages, CONTINUE_CHECK_WINDOW)
            .iter()
            .map(|m| (self.core.label(m.persona), m.content.clone()))
            .collect();
        let prompt = DebatePromptTemplate::continue_check(&recent, current_round, max_rounds);

        let raw = self.core.invoke(&self.system_prompt(), &prompt).await?;
        let verdict = Verdict::parse(&raw);
        debug!(?verdict, raw = %raw.trim(), "Continue-or-close verdict");
        Ok(verdict.should_continue())
    }

    /// Ask both debaters for their closing statements
    pub async fn call_for_closing(&self) -> Result<AgentResponse, ModelInvocationError> {
        let prompt = DebatePromptTemplate::closing_call(self.rules.closing_word_limit);
        self.core
            .speak(
                &self.system_prompt(),
                &prompt,
                Some(NextAction::ClosingStatements),
            )
            .await
    }
}
