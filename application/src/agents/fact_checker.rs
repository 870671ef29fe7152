//! Fact-checker persona

use super::core::AgentCore;
use crate::ports::model_invoker::ModelInvocationError;
use agora_domain::{AgentResponse, DebateMessage, DebatePromptTemplate, NextAction, transcript};

pub struct FactCheckerAgent {
    core: AgentCore,
}

impl FactCheckerAgent {
    pub fn new(core: AgentCore) -> Self {
        Self { core }
    }

    pub fn core(&self) -> &AgentCore {
        &self.core
    }

    /// Review every debater statement from every round
    pub async fn fact_check(
        &self,
        messages: &[DebateMessage],
    ) -> Result<AgentResponse, ModelInvocationError> {
        let statements = transcript::debater_messages(messages)
            .enumerate()
            .map(|(i, m)| format!("[{}] {}: {}", i + 1, self.core.label(m.persona), m.content))
            .collect::<Vec<_>>()
            .join("\n\n");

        let profile = self.core.profile();
        let system = DebatePromptTemplate::fact_checker_system(profile);
        let prompt = DebatePromptTemplate::fact_check(&statements, &profile.name);

        self.core
            .speak(&system, &prompt, Some(NextAction::Summarize))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_invoker::NO_RESPONSE_SENTINEL;
    use crate::testing::ScriptedInvoker;
    use agora_domain::{Persona, PersonaRoster, Role};
    use chrono::Utc;
    use std::sync::Arc;

    fn agent(invoker: Arc<ScriptedInvoker>) -> FactCheckerAgent {
        FactCheckerAgent::new(AgentCore::new(
            Persona::FactChecker,
            Arc::new(PersonaRoster::default()),
            invoker,
        ))
    }

    fn transcript() -> Vec<DebateMessage> {
        let now = Utc::now();
        vec![
            DebateMessage::new("T1", 1, Persona::Orchestrator, "Welcome!", now),
            DebateMessage::new("T1", 2, Persona::DebaterA, "Water boils at 100C at sea level.", now),
            DebateMessage::new("T1", 3, Persona::DebaterB, "Agreed, at standard pressure.", now),
        ]
    }

    #[tokio::test]
    async fn test_labels_every_debater_statement() {
        let invoker = Arc::new(ScriptedInvoker::new(["All claims accurate. -K-9"]));
        let response = agent(invoker.clone()).fact_check(&transcript()).await.unwrap();

        assert_eq!(response.role, Role::FactChecker);
        assert_eq!(response.next_action, Some(NextAction::Summarize));
        let prompt = invoker.last_request().unwrap().user_prompt;
        assert!(prompt.contains("[1] SONNY: Water boils"));
        assert!(prompt.contains("[2] AVA: Agreed"));
        assert!(!prompt.contains("Welcome!"));
        assert!(prompt.contains("Sign with \"-K-9\""));
    }

    #[tokio::test]
    async fn test_clean_transcript_still_yields_a_report() {
        let invoker = Arc::new(ScriptedInvoker::new([""]));
        let response = agent(invoker).fact_check(&transcript()).await.unwrap();

        assert!(!response.content.is_empty());
        assert_eq!(response.content, NO_RESPONSE_SENTINEL);
    }

    #[tokio::test]
    async fn test_uses_fact_checker_model() {
        let invoker = Arc::new(ScriptedInvoker::empty());
        agent(invoker.clone()).fact_check(&transcript()).await.unwrap();

        let params = invoker.last_request().unwrap().params;
        assert_eq!(params.model, agora_domain::Model::ClaudeHaiku35);
        assert!((params.temperature - 0.3).abs() < f32::EPSILON);
    }
}
