//! Invocation Router
//!
//! Maps an inbound action tag to the matching [`DebateOrchestrator`] entry
//! point. Unknown tags are rejected, never ignored.

use super::orchestrator::{DebateOrchestrator, OrchestratorError, TurnContext};
use agora_domain::{Action, AgentResponse, DebateSession};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Inbound invocation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationPayload {
    pub debate_id: String,
    pub channel_id: String,
    pub thread_ts: String,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<TurnContext>,
}

impl InvocationPayload {
    /// Payload for `action` built from a stored session.
    ///
    /// The proposition always travels with the payload; the context is
    /// attached once positions have been assigned.
    pub fn for_session(session: &DebateSession, action: Action) -> Self {
        let context = session.debater_positions().map(|positions| TurnContext {
            messages: session.messages().to_vec(),
            current_round: session.current_round(),
            debater_positions: positions,
            max_rounds: Some(session.max_rounds()),
            status: Some(session.status()),
        });

        Self {
            debate_id: session.id().to_string(),
            channel_id: session.channel_id().to_string(),
            thread_ts: session.id().to_string(),
            action,
            proposition: Some(session.proposition().to_string()),
            context,
        }
    }
}

pub struct InvocationRouter {
    orchestrator: Arc<DebateOrchestrator>,
}

impl InvocationRouter {
    pub fn new(orchestrator: Arc<DebateOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &DebateOrchestrator {
        &self.orchestrator
    }

    pub async fn route(
        &self,
        payload: &InvocationPayload,
    ) -> Result<AgentResponse, OrchestratorError> {
        info!(
            debate_id = %payload.debate_id,
            action = %payload.action,
            "Routing invocation"
        );
        let proposition = payload.proposition.as_deref();
        let context = payload.context.as_ref();

        match payload.action {
            Action::Initialize => self.orchestrator.initialize(proposition).await,
            Action::Respond => self.orchestrator.respond(context, proposition).await,
            Action::FactCheck => self.orchestrator.fact_check(context).await,
            Action::Summarize => self.orchestrator.summarize(context, proposition).await,
        }
    }

    /// Route a raw JSON payload.
    ///
    /// The action tag is checked first so an unknown tag is reported as such
    /// rather than as a generic shape error.
    pub async fn route_json(&self, raw: Value) -> Result<AgentResponse, OrchestratorError> {
        let tag = raw
            .get("action")
            .and_then(Value::as_str)
            .ok_or_else(|| OrchestratorError::InvalidPayload("missing 'action'".to_string()))?;
        tag.parse::<Action>()?;

        let payload: InvocationPayload = serde_json::from_value(raw)
            .map_err(|e| OrchestratorError::InvalidPayload(e.to_string()))?;
        self.route(&payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DebateConfig;
    use crate::testing::ScriptedInvoker;
    use agora_domain::{DomainError, Persona, Role};
    use serde_json::json;

    fn router(invoker: Arc<ScriptedInvoker>) -> InvocationRouter {
        InvocationRouter::new(Arc::new(DebateOrchestrator::new(
            DebateConfig::default(),
            invoker,
        )))
    }

    #[tokio::test]
    async fn test_unknown_action_is_rejected() {
        let invoker = Arc::new(ScriptedInvoker::empty());
        let err = router(invoker.clone())
            .route_json(json!({
                "debate_id": "T1",
                "channel_id": "C1",
                "thread_ts": "T1",
                "action": "rebut",
            }))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::Domain(DomainError::UnknownAction(ref tag)) if tag == "rebut"
        ));
        assert_eq!(invoker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_action_is_invalid_payload() {
        let invoker = Arc::new(ScriptedInvoker::empty());
        let err = router(invoker)
            .route_json(json!({ "debate_id": "T1" }))
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestratorError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn test_initialize_routes_to_host() {
        let invoker = Arc::new(ScriptedInvoker::new(["Welcome!"]));
        let response = router(invoker)
            .route_json(json!({
                "debate_id": "T1",
                "channel_id": "C1",
                "thread_ts": "T1",
                "action": "initialize",
                "proposition": "Cats are better than dogs",
            }))
            .await
            .unwrap();

        assert_eq!(response.role, Role::Orchestrator);
        assert!(response.metadata.debater_positions.is_some());
    }

    #[tokio::test]
    async fn test_respond_payload_with_wire_context() {
        let invoker = Arc::new(ScriptedInvoker::new(["Opening for."]));
        let response = router(invoker)
            .route_json(json!({
                "debate_id": "T1",
                "channel_id": "C1",
                "thread_ts": "T1",
                "action": "respond",
                "proposition": "Cats are better than dogs",
                "context": {
                    "messages": [],
                    "current_round": 0,
                    "debater_positions": { "debater_a": "for", "debater_b": "against" }
                }
            }))
            .await
            .unwrap();

        assert_eq!(response.persona, Persona::DebaterA);
        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire["role"], "debater");
        assert_eq!(wire["next_action"], "continue");
        assert_eq!(wire["metadata"]["word_count"], 2);
    }

    #[tokio::test]
    async fn test_respond_without_context_fails_fast() {
        let invoker = Arc::new(ScriptedInvoker::empty());
        let err = router(invoker)
            .route_json(json!({
                "debate_id": "T1",
                "channel_id": "C1",
                "thread_ts": "T1",
                "action": "respond",
            }))
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestratorError::MissingContext(Action::Respond)));
    }

    #[tokio::test]
    async fn test_summarize_without_proposition_still_routes() {
        let invoker = Arc::new(ScriptedInvoker::new(["Four-part summary."]));
        let response = router(invoker.clone())
            .route_json(json!({
                "debate_id": "T1",
                "channel_id": "C1",
                "thread_ts": "T1",
                "action": "summarize",
                "context": {
                    "messages": [{
                        "session_id": "T1",
                        "sequence": 1,
                        "persona": "debater_a",
                        "content": "hi",
                        "word_count": 1,
                        "timestamp": "2026-01-01T00:00:00Z"
                    }],
                    "current_round": 1,
                    "debater_positions": { "debater_a": "for", "debater_b": "against" }
                }
            }))
            .await
            .unwrap();

        assert_eq!(response.persona, Persona::Summariser);
        assert_eq!(response.content, "Four-part summary.");
        assert_eq!(invoker.call_count(), 1);
    }

    #[test]
    fn test_payload_for_new_session_has_no_context() {
        let session = DebateSession::new(
            "T1",
            "C1",
            "Cats are better than dogs",
            8,
            chrono::Duration::days(30),
            chrono::Utc::now(),
        )
        .unwrap();

        let payload = InvocationPayload::for_session(&session, Action::Initialize);

        assert_eq!(payload.thread_ts, "T1");
        assert_eq!(payload.proposition.as_deref(), Some("Cats are better than dogs"));
        assert!(payload.context.is_none());
    }
}
