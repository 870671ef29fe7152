//! Shared persona-agent plumbing: one model call, one response envelope

use crate::ports::model_invoker::{ModelInvocationError, ModelInvoker, text_or_sentinel};
use agora_domain::{
    AgentResponse, DebateMessage, NextAction, Persona, PersonaProfile, PersonaRoster,
};
use std::sync::Arc;
use tracing::debug;

/// What every persona agent is built from: who it is, the roster it
/// quotes other speakers from, and a model invoker
#[derive(Clone)]
pub struct AgentCore {
    persona: Persona,
    roster: Arc<PersonaRoster>,
    invoker: Arc<dyn ModelInvoker>,
}

impl AgentCore {
    pub fn new(
        persona: Persona,
        roster: Arc<PersonaRoster>,
        invoker: Arc<dyn ModelInvoker>,
    ) -> Self {
        Self {
            persona,
            roster,
            invoker,
        }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn profile(&self) -> &PersonaProfile {
        self.roster.get(self.persona)
    }

    pub fn roster(&self) -> &PersonaRoster {
        &self.roster
    }

    /// Upper-cased display name, used when quoting the transcript to a model
    pub fn label(&self, persona: Persona) -> String {
        self.roster.get(persona).name.to_uppercase()
    }

    /// Render messages as `LABEL: content` blocks separated by blank lines
    pub fn render<'a>(&self, messages: impl IntoIterator<Item = &'a DebateMessage>) -> String {
        messages
            .into_iter()
            .map(|m| format!("{}: {}", self.label(m.persona), m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Raw model text for this persona, blank output replaced by the sentinel
    pub async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ModelInvocationError> {
        let params = self.profile().generation_params();
        debug!(
            persona = %self.persona,
            model = %params.model,
            "Invoking model"
        );
        let text = self
            .invoker
            .invoke(system_prompt, user_prompt, &params)
            .await?;
        Ok(text_or_sentinel(Some(text)))
    }

    /// Invoke and wrap the text in a response envelope
    pub async fn speak(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        next_action: Option<NextAction>,
    ) -> Result<AgentResponse, ModelInvocationError> {
        let content = self.invoke(system_prompt, user_prompt).await?;
        Ok(AgentResponse::new(
            self.persona,
            self.profile().name.clone(),
            content,
            next_action,
        ))
    }
}
