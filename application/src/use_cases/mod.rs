//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod handle_event;
pub mod orchestrator;
pub mod router;
pub mod run_debate;
pub mod start_debate;
pub mod take_turn;
