use async_trait::async_trait;

use crate::errors::ProviderError;

/// A chat-style text completion backend.
///
/// Implementations make exactly one remote call per `complete` and return the
/// first candidate's text untouched; trimming and emptiness checks belong to
/// the caller.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, ProviderError>;
}
