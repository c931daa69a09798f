use tracing::{error, info, warn};

use crate::ai::CompletionProvider;
use crate::ai::prompt_builder::{
    MAX_SUMMARY_TOKENS, MAX_TEXT_CHARS, SUMMARY_TEMPERATURE, SYSTEM_PROMPT, build_user_prompt,
};
use crate::core::models::{SummarizeRequest, SummarizeResponse};
use crate::errors::{SummarizeError, classify_provider_error};

/// Turns journal text into a short reflective summary.
///
/// Holds no per-call state; one instance serves concurrent invocations.
pub struct SummarizationService<P> {
    provider: P,
}

impl<P: CompletionProvider> SummarizationService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validates the request, makes one provider call and returns the trimmed
    /// summary.
    ///
    /// # Errors
    ///
    /// Precondition failures are returned before the provider is contacted.
    /// Provider failures are mapped through [`classify_provider_error`].
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, SummarizeError> {
        let caller_id = validate_request(request)?;
        let text_length = entry_length(&request.text);

        info!(user_id = %caller_id, text_length, "Generating summary for user");

        let user_prompt = build_user_prompt(&request.text);
        let completion = self
            .provider
            .complete(
                SYSTEM_PROMPT,
                &user_prompt,
                MAX_SUMMARY_TOKENS,
                SUMMARY_TEMPERATURE,
            )
            .await;

        let content = match completion {
            Ok(content) => content,
            Err(e) => {
                let mapped = classify_provider_error(&e);
                error!(
                    user_id = %caller_id,
                    text_length,
                    status = ?e.status(),
                    error = %e,
                    error_kind = mapped.code(),
                    "Error in summarizeEntry"
                );
                return Err(mapped);
            }
        };

        let summary = content.trim();
        if summary.is_empty() {
            let err = SummarizeError::empty_summary();
            error!(
                user_id = %caller_id,
                text_length,
                error_kind = err.code(),
                "OpenAI returned empty summary"
            );
            return Err(err);
        }

        info!(
            user_id = %caller_id,
            summary_length = summary.chars().count(),
            "Successfully generated summary"
        );

        Ok(SummarizeResponse {
            summary: summary.to_string(),
        })
    }
}

/// Checks the preconditions in order and returns the caller id on success.
///
/// # Errors
///
/// `Unauthenticated` when no caller id is present, then `InvalidArgument` for
/// blank text, then `InvalidArgument` for text over [`MAX_TEXT_CHARS`].
pub fn validate_request(request: &SummarizeRequest) -> Result<&str, SummarizeError> {
    let Some(caller_id) = request
        .caller_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
    else {
        let err = SummarizeError::Unauthenticated;
        warn!(error_kind = err.code(), "Unauthenticated request to summarizeEntry");
        return Err(err);
    };

    if request.text.trim().is_empty() {
        let err = SummarizeError::text_required();
        warn!(
            user_id = %caller_id,
            error_kind = err.code(),
            "Invalid input to summarizeEntry"
        );
        return Err(err);
    }

    // Raw length, whitespace included.
    let text_length = entry_length(&request.text);
    if text_length > MAX_TEXT_CHARS {
        let err = SummarizeError::text_too_long();
        warn!(
            user_id = %caller_id,
            text_length,
            error_kind = err.code(),
            "Text too long for summarizeEntry"
        );
        return Err(err);
    }

    Ok(caller_id)
}

/// Length of an entry in UTF-16 code units, the unit the mobile client
/// counts in. Characters outside the BMP count twice.
#[must_use]
pub fn entry_length(text: &str) -> usize {
    text.encode_utf16().count()
}
