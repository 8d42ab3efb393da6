//! LLM integration for the generation passes that need a model
//!
//! This module provides a trait-based seam so the engine can talk to
//! different generative-model providers through one interface.

mod model;
mod providers;

pub use model::LlmModel;
pub use providers::create_model;
