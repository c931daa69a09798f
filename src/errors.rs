use thiserror::Error;

pub const UNAUTHENTICATED_MESSAGE: &str = "User must be authenticated to use this function";
pub const TEXT_REQUIRED_MESSAGE: &str =
    "Journal entry text is required and must be a non-empty string";
pub const TEXT_TOO_LONG_MESSAGE: &str =
    "Journal entry text is too long. Maximum 8000 characters allowed.";
pub const SERVICE_BUSY_MESSAGE: &str =
    "AI service is currently busy. Please try again in a moment.";
pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "AI service configuration error. Please contact support.";
pub const EMPTY_SUMMARY_MESSAGE: &str = "Failed to generate summary. Please try again.";
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred while generating the summary. Please try again.";

/// Caller-facing failure of a `summarizeEntry` call.
///
/// The `Display` output is the sanitized message returned to the client; it
/// never contains provider error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    #[error("{}", UNAUTHENTICATED_MESSAGE)]
    Unauthenticated,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    ResourceExhausted(String),

    #[error("{0}")]
    Internal(String),
}

impl SummarizeError {
    #[must_use]
    pub fn text_required() -> Self {
        SummarizeError::InvalidArgument(TEXT_REQUIRED_MESSAGE.to_string())
    }

    #[must_use]
    pub fn text_too_long() -> Self {
        SummarizeError::InvalidArgument(TEXT_TOO_LONG_MESSAGE.to_string())
    }

    #[must_use]
    pub fn empty_summary() -> Self {
        SummarizeError::Internal(EMPTY_SUMMARY_MESSAGE.to_string())
    }

    /// Machine-readable kind, as used in logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SummarizeError::Unauthenticated => "unauthenticated",
            SummarizeError::InvalidArgument(_) => "invalid-argument",
            SummarizeError::ResourceExhausted(_) => "resource-exhausted",
            SummarizeError::Internal(_) => "internal",
        }
    }

    /// Status name carried in the callable error envelope.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            SummarizeError::Unauthenticated => "UNAUTHENTICATED",
            SummarizeError::InvalidArgument(_) => "INVALID_ARGUMENT",
            SummarizeError::ResourceExhausted(_) => "RESOURCE_EXHAUSTED",
            SummarizeError::Internal(_) => "INTERNAL",
        }
    }

    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            SummarizeError::Unauthenticated => 401,
            SummarizeError::InvalidArgument(_) => 400,
            SummarizeError::ResourceExhausted(_) => 429,
            SummarizeError::Internal(_) => 500,
        }
    }
}

/// Failure talking to the completion provider. Operator-facing only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("OpenAI API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse OpenAI response: {0}")]
    DecodeError(String),

    #[error("OpenAI returned an empty completion")]
    EmptyCompletion,
}

impl ProviderError {
    /// HTTP status reported by the provider, if the request got that far.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        ProviderError::HttpError(error.to_string())
    }
}

/// Maps a provider failure onto the caller-facing taxonomy.
///
/// Only the status code is inspected; anything unrecognised is `Internal`.
#[must_use]
pub fn classify_provider_error(error: &ProviderError) -> SummarizeError {
    match error {
        ProviderError::ApiError { status: 429, .. } => {
            SummarizeError::ResourceExhausted(SERVICE_BUSY_MESSAGE.to_string())
        }
        ProviderError::ApiError {
            status: 401 | 403, ..
        } => SummarizeError::Internal(CONFIGURATION_ERROR_MESSAGE.to_string()),
        ProviderError::EmptyCompletion => SummarizeError::empty_summary(),
        _ => SummarizeError::Internal(UNEXPECTED_ERROR_MESSAGE.to_string()),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}: environment variable not set")]
    Missing(&'static str),

    #[error("{name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// A request body the API Lambda could not decode.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid base64 body: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}
