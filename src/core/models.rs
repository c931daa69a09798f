use serde::{Deserialize, Serialize};

/// One `summarizeEntry` call as seen by the service.
///
/// `caller_id` comes from the hosting platform's auth context, never from the
/// payload. `None` means the call was anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub text: String,
    pub caller_id: Option<String>,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>, caller_id: Option<String>) -> Self {
        Self {
            text: text.into(),
            caller_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}
