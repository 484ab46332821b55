pub mod provider;
pub mod gemini;
pub mod openai;
pub mod aiml;
pub mod router;
pub mod types;

pub use provider::LLMProvider;
pub use router::{create_finalizer, create_providers};
pub use types::LLMResponse;
