//! Debater personas: opening statement, rebuttals, closing statement

use super::core::AgentCore;
use crate::ports::model_invoker::ModelInvocationError;
use agora_domain::{
    AgentResponse, DebateMessage, DebatePromptTemplate, DebateRules, NextAction, Persona,
    Position, transcript,
};
use tracing::{debug, warn};

/// Everything a debater needs to produce one turn
#[derive(Debug, Clone, Copy)]
pub struct DebaterTurn<'a> {
    pub messages: &'a [DebateMessage],
    /// The proposition as the user wrote it, when the caller has it
    pub proposition: Option<&'a str>,
    pub position: Position,
    /// Closing statements have been called for
    pub closing: bool,
}

/// Which kind of statement a turn produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Opening,
    Rebuttal,
    Closing,
}

pub struct DebaterAgent {
    core: AgentCore,
    rules: DebateRules,
}

impl DebaterAgent {
    pub fn new(core: AgentCore, rules: DebateRules) -> Self {
        Self { core, rules }
    }

    pub fn core(&self) -> &AgentCore {
        &self.core
    }

    /// Opening if this debater has not spoken yet, closing if called for,
    /// rebuttal otherwise.
    pub fn statement_kind(&self, turn: &DebaterTurn<'_>) -> StatementKind {
        if turn.closing {
            StatementKind::Closing
        } else if transcript::has_spoken(turn.messages, self.core.persona()) {
            StatementKind::Rebuttal
        } else {
            StatementKind::Opening
        }
    }

    pub async fn respond(
        &self,
        turn: &DebaterTurn<'_>,
    ) -> Result<AgentResponse, ModelInvocationError> {
        let persona = self.core.persona();
        let proposition = self.proposition(turn);
        let system =
            DebatePromptTemplate::debater_system(self.core.profile(), turn.position, &proposition);

        // The host's messages are moderation, not argument.
        let history = self.core.render(
            turn.messages
                .iter()
                .filter(|m| m.persona != Persona::Orchestrator),
        );

        let kind = self.statement_kind(turn);
        debug!(%persona, ?kind, position = %turn.position, "Debater turn");
        let prompt = match kind {
            StatementKind::Opening => {
                DebatePromptTemplate::opening_statement(turn.position, self.rules.opening_word_limit)
            }
            StatementKind::Rebuttal => {
                DebatePromptTemplate::rebuttal(&history, self.rules.followup_word_limit)
            }
            StatementKind::Closing => DebatePromptTemplate::closing_statement(
                &history,
                turn.position,
                self.rules.closing_word_limit,
            ),
        };

        let next_action = match (kind, persona) {
            (StatementKind::Closing, Persona::DebaterB) => NextAction::FactCheck,
            (StatementKind::Closing, _) => NextAction::ClosingStatements,
            _ => NextAction::Continue,
        };

        self.core.speak(&system, &prompt, Some(next_action)).await
    }

    fn proposition(&self, turn: &DebaterTurn<'_>) -> String {
        if let Some(proposition) = turn.proposition.filter(|p| !p.trim().is_empty()) {
            return proposition.to_string();
        }
        warn!(
            persona = %self.core.persona(),
            "No proposition supplied, falling back to the host's first message"
        );
        transcript::first_from(turn.messages, Persona::Orchestrator)
            .map(|m| m.content.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedInvoker;
    use agora_domain::{PersonaRoster, Role};
    use chrono::Utc;
    use std::sync::Arc;

    fn agent(persona: Persona, invoker: Arc<ScriptedInvoker>) -> DebaterAgent {
        let core = AgentCore::new(persona, Arc::new(PersonaRoster::default()), invoker);
        DebaterAgent::new(core, DebateRules::default())
    }

    fn message(seq: u64, persona: Persona, content: &str) -> DebateMessage {
        DebateMessage::new("T1", seq, persona, content, Utc::now())
    }

    fn turn<'a>(messages: &'a [DebateMessage], position: Position) -> DebaterTurn<'a> {
        DebaterTurn {
            messages,
            proposition: Some("Remote work improves productivity"),
            position,
            closing: false,
        }
    }

    #[tokio::test]
    async fn test_first_turn_is_opening_statement() {
        let invoker = Arc::new(ScriptedInvoker::new(["Opening."]));
        let agent = agent(Persona::DebaterA, invoker.clone());
        let messages = vec![message(1, Persona::Orchestrator, "Welcome!")];

        let response = agent.respond(&turn(&messages, Position::For)).await.unwrap();

        assert_eq!(response.role, Role::Debater);
        assert_eq!(response.persona, Persona::DebaterA);
        assert_eq!(response.next_action, Some(NextAction::Continue));
        let request = invoker.last_request().unwrap();
        assert!(request.user_prompt.contains("opening statement arguing FOR"));
        assert!(request.user_prompt.contains("Maximum 200 words"));
        assert!(request.system_prompt.contains("\"Remote work improves productivity\""));
    }

    #[tokio::test]
    async fn test_later_turn_is_rebuttal_without_host_messages() {
        let invoker = Arc::new(ScriptedInvoker::new(["Rebuttal."]));
        let agent = agent(Persona::DebaterA, invoker.clone());
        let messages = vec![
            message(1, Persona::Orchestrator, "Welcome!"),
            message(2, Persona::DebaterA, "Offices distract."),
            message(3, Persona::DebaterB, "Offices collaborate."),
        ];

        agent.respond(&turn(&messages, Position::For)).await.unwrap();

        let prompt = invoker.last_request().unwrap().user_prompt;
        assert!(prompt.contains("SONNY: Offices distract."));
        assert!(prompt.contains("AVA: Offices collaborate."));
        assert!(!prompt.contains("Welcome!"));
        assert!(prompt.contains("Maximum 150 words"));
    }

    #[tokio::test]
    async fn test_closing_statement_from_b_hands_over_to_fact_check() {
        let invoker = Arc::new(ScriptedInvoker::new(["Closing A.", "Closing B."]));
        let messages = vec![
            message(1, Persona::DebaterA, "a"),
            message(2, Persona::DebaterB, "b"),
            message(3, Persona::Orchestrator, "Closing statements, please."),
        ];
        let mut closing = turn(&messages, Position::Against);
        closing.closing = true;

        let a = agent(Persona::DebaterA, invoker.clone());
        let b = agent(Persona::DebaterB, invoker.clone());

        let response_a = a.respond(&closing).await.unwrap();
        let response_b = b.respond(&closing).await.unwrap();

        assert_eq!(response_a.next_action, Some(NextAction::ClosingStatements));
        assert_eq!(response_b.next_action, Some(NextAction::FactCheck));
        assert!(invoker.last_request().unwrap().user_prompt.contains("closing statements"));
    }

    #[tokio::test]
    async fn test_missing_proposition_falls_back_to_first_host_message() {
        let invoker = Arc::new(ScriptedInvoker::empty());
        let agent = agent(Persona::DebaterB, invoker.clone());
        let messages = vec![
            message(1, Persona::Orchestrator, "Welcome to the debate on tea."),
            message(2, Persona::DebaterA, "Tea is best."),
        ];
        let mut fallback = turn(&messages, Position::Against);
        fallback.proposition = None;

        agent.respond(&fallback).await.unwrap();

        let system = invoker.last_request().unwrap().system_prompt;
        assert!(system.contains("\"Welcome to the debate on tea.\""));
    }

    #[test]
    fn test_statement_kind() {
        let agent = agent(Persona::DebaterB, Arc::new(ScriptedInvoker::empty()));
        let messages = vec![message(1, Persona::DebaterA, "a")];
        assert_eq!(
            agent.statement_kind(&turn(&messages, Position::For)),
            StatementKind::Opening
        );

        let messages = vec![
            message(1, Persona::DebaterA, "a"),
            message(2, Persona::DebaterB, "b"),
            message(3, Persona::DebaterA, "a2"),
        ];
        assert_eq!(
            agent.statement_kind(&turn(&messages, Position::For)),
            StatementKind::Rebuttal
        );
    }
}
