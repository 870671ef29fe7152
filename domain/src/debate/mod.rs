//! Debate domain.
//!
//! A debate is a [`DebateSession`] whose transcript is appended to one
//! [`DebateMessage`] at a time. Who speaks next is decided by
//! [`turn::select_next_turn`]; what each utterance does to the session is
//! decided by [`DebateSession::record_turn`].
//!
//! ```text
//! initializing → opening → debating → closing → fact_checking → summarizing → completed
//! ```

pub mod action;
pub mod message;
pub mod persona;
pub mod position;
pub mod response;
pub mod session;
pub mod status;
pub mod transcript;
pub mod turn;
pub mod verdict;

pub use action::{Action, NextAction};
pub use message::DebateMessage;
pub use persona::{BotGroup, Persona, Role};
pub use position::{DebaterPositions, Position};
pub use response::{AgentResponse, ResponseMetadata};
pub use session::DebateSession;
pub use status::DebateStatus;
pub use turn::{Turn, select_next_turn};
pub use verdict::Verdict;
