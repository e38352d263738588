//! Gemini provider client for sahayak.
//!
//! This crate owns the outbound side of the system: a typed configuration
//! for the Google Gemini API, a thin `reqwest`-based client, and the
//! [`TextModel`] trait that the rest of the workspace programs against so
//! the provider can be mocked in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::{GeminiClient, GeminiConfig, TextModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GeminiConfig::from_env("GEMINI_API_KEY")?;
//!     let client = GeminiClient::new(config);
//!
//!     let text = client.complete("Suggest three hydration tips.").await?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod model;

// Re-export commonly used types
pub use config::GeminiConfig;
pub use error::{LlmError, Result};
pub use gemini::GeminiClient;
pub use model::TextModel;
