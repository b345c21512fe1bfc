pub mod gemini_client;
pub mod openai_agent_runner;

pub use gemini_client::GeminiProductNameExtractor;
pub use openai_agent_runner::OpenAIAgentRunner;
