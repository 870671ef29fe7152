//! Prompt domain
//!
//! Templates for every persona prompt in a debate. Wording is data; the
//! agents only decide which template to fill and with what.

mod template;

pub use template::DebatePromptTemplate;
