//! Application-level configuration.
//!
//! - [`DebateConfig`]: debate rules plus the persona roster

pub mod debate_config;

pub use debate_config::DebateConfig;
