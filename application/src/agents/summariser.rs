//! Summariser persona

use super::core::AgentCore;
use crate::ports::model_invoker::ModelInvocationError;
use agora_domain::{
    AgentResponse, DebateMessage, DebatePromptTemplate, NextAction, Persona, transcript,
};

pub struct SummariserAgent {
    core: AgentCore,
}

impl SummariserAgent {
    pub fn new(core: AgentCore) -> Self {
        Self { core }
    }

    pub fn core(&self) -> &AgentCore {
        &self.core
    }

    /// Four-part summary of the debate, informed by the latest fact-check
    pub async fn summarize(
        &self,
        messages: &[DebateMessage],
        proposition: &str,
    ) -> Result<AgentResponse, ModelInvocationError> {
        let debate = self.core.render(transcript::debater_messages(messages));
        let fact_check = transcript::last_from(messages, Persona::FactChecker)
            .map(|m| m.content.as_str());

        let profile = self.core.profile();
        let system = DebatePromptTemplate::summariser_system(profile);
        let prompt = DebatePromptTemplate::summary(proposition, &debate, fact_check, &profile.name);

        self.core
            .speak(&system, &prompt, Some(NextAction::Complete))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedInvoker;
    use agora_domain::{PersonaRoster, Role};
    use chrono::Utc;
    use std::sync::Arc;

    fn agent(invoker: Arc<ScriptedInvoker>) -> SummariserAgent {
        SummariserAgent::new(AgentCore::new(
            Persona::Summariser,
            Arc::new(PersonaRoster::default()),
            invoker,
        ))
    }

    fn message(seq: u64, persona: Persona, content: &str) -> DebateMessage {
        DebateMessage::new("T1", seq, persona, content, Utc::now())
    }

    #[tokio::test]
    async fn test_summary_includes_fact_check_report() {
        let invoker = Arc::new(ScriptedInvoker::new(["Summary. -GERTY"]));
        let messages = vec![
            message(1, Persona::DebaterA, "For."),
            message(2, Persona::DebaterB, "Against."),
            message(3, Persona::FactChecker, "One claim is MISLEADING."),
        ];

        let response = agent(invoker.clone())
            .summarize(&messages, "Tea beats coffee")
            .await
            .unwrap();

        assert_eq!(response.role, Role::Summariser);
        assert_eq!(response.next_action, Some(NextAction::Complete));
        let prompt = invoker.last_request().unwrap().user_prompt;
        assert!(prompt.contains("Proposition: \"Tea beats coffee\""));
        assert!(prompt.contains("SONNY: For."));
        assert!(prompt.contains("Fact-check report:\nOne claim is MISLEADING."));
    }

    #[tokio::test]
    async fn test_summary_without_fact_check() {
        let invoker = Arc::new(ScriptedInvoker::empty());
        let messages = vec![message(1, Persona::DebaterA, "For.")];

        agent(invoker.clone())
            .summarize(&messages, "Tea beats coffee")
            .await
            .unwrap();

        assert!(!invoker.last_request().unwrap().user_prompt.contains("Fact-check report"));
    }
}
