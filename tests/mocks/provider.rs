use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thoughtcaddy::ProviderError;
use thoughtcaddy::ai::CompletionProvider;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Clone)]
pub struct MockProvider {
    pub reply: Result<String, ProviderError>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockProvider {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            reply: Err(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_status(status: u16, message: &str) -> Self {
        Self::failing(ProviderError::ApiError {
            status,
            message: message.to_string(),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            max_tokens,
            temperature,
        });
        self.reply.clone()
    }
}
