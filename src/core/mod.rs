mod engine;
mod formatter;
mod jsdoc;
mod llm;
mod readme;
mod usage;

pub use llm::LlmModel;

// Export the main engine
pub use engine::Engine;
