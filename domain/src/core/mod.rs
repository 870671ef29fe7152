//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: language models a persona can be backed by
//! - [`generation::GenerationParams`]: per-call inference parameters
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: text helpers (word counting, truncation)

pub mod error;
pub mod generation;
pub mod model;
pub mod string;
