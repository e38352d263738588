//! The `TextModel` trait: the one capability the rest of the system needs
//! from a text-generation provider.

use crate::error::Result;
use async_trait::async_trait;

/// A text-generation provider that turns a prompt into a completion.
///
/// The call may reject or hang indefinitely; callers are responsible for
/// bounding its latency.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
