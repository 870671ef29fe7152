//! Chat credential adapters

mod env_token_store;

pub use env_token_store::EnvTokenStore;
