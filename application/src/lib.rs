//! Application layer for agora
//!
//! This crate contains the persona agents, use cases, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod agents;
pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use agents::DebateAgents;
pub use config::DebateConfig;
pub use ports::{
    chat_poster::{ChatPostError, ChatPoster, NoChatPoster},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    model_invoker::{ModelInvocationError, ModelInvoker, NO_RESPONSE_SENTINEL},
    progress::{DebateProgressNotifier, NoProgress},
    session_store::{SessionStore, StoreError},
    token_store::{TokenStore, TokenStoreError},
};
pub use use_cases::handle_event::{
    ChatEvent, EventEnvelope, EventOutcome, HandleEventUseCase, parse_debate_command,
};
pub use use_cases::orchestrator::{DebateOrchestrator, OrchestratorError, TurnContext};
pub use use_cases::router::{InvocationPayload, InvocationRouter};
pub use use_cases::run_debate::{RunDebateError, RunDebateUseCase};
pub use use_cases::start_debate::{StartDebateError, StartDebateInput, StartDebateUseCase};
pub use use_cases::take_turn::{TakeTurnUseCase, TurnError, TurnOutcome, chat_text};
