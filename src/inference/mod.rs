mod client;
mod types;

pub use client::{InferenceClient, OllamaClient};
pub use types::{ChatMessage, ChatRequest, ChatResponse, InferenceReply};

#[cfg(test)]
pub use client::MockInferenceClient;
