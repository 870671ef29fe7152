//! Persona agents
//!
//! One agent per persona, all built by composing an [`AgentCore`] (profile
//! lookup, model call, response envelope) with persona-specific prompt
//! assembly. No agent keeps state between calls.

pub mod core;
pub mod debater;
pub mod fact_checker;
pub mod orchestrator;
pub mod summariser;

pub use core::AgentCore;
pub use debater::{DebaterAgent, DebaterTurn, StatementKind};
pub use fact_checker::FactCheckerAgent;
pub use orchestrator::OrchestratorAgent;
pub use summariser::SummariserAgent;

use crate::config::DebateConfig;
use crate::ports::model_invoker::ModelInvoker;
use agora_domain::Persona;
use std::sync::Arc;

/// The five persona agents sharing one invoker and one roster
pub struct DebateAgents {
    pub orchestrator: OrchestratorAgent,
    pub debater_a: DebaterAgent,
    pub debater_b: DebaterAgent,
    pub fact_checker: FactCheckerAgent,
    pub summariser: SummariserAgent,
}

impl DebateAgents {
    pub fn new(config: &DebateConfig, invoker: Arc<dyn ModelInvoker>) -> Self {
        let roster = Arc::new(config.roster().clone());
        let rules = *config.rules();
        let core = |persona| AgentCore::new(persona, Arc::clone(&roster), Arc::clone(&invoker));

        Self {
            orchestrator: OrchestratorAgent::new(core(Persona::Orchestrator), rules),
            debater_a: DebaterAgent::new(core(Persona::DebaterA), rules),
            debater_b: DebaterAgent::new(core(Persona::DebaterB), rules),
            fact_checker: FactCheckerAgent::new(core(Persona::FactChecker)),
            summariser: SummariserAgent::new(core(Persona::Summariser)),
        }
    }

    /// The agent for a debater persona
    pub fn debater(&self, persona: Persona) -> Option<&DebaterAgent> {
        match persona {
            Persona::DebaterA => Some(&self.debater_a),
            Persona::DebaterB => Some(&self.debater_b),
            _ => None,
        }
    }
}
