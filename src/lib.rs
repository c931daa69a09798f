/// `ThoughtCaddy` - journal entry summaries for the `ThoughtCaddy` mobile app.
///
/// This crate implements the `summarizeEntry` callable as an AWS Lambda:
/// the mobile client sends the text of a journal entry, the function checks
/// the caller is signed in, asks `OpenAI` for a short, warm 2-3 sentence
/// summary and returns it. The client stores the summary next to the entry.
///
/// # Architecture
///
/// - `api` decodes API Gateway proxy events and renders callable responses
/// - `features::summarize` validates requests and maps provider failures
/// - `ai` holds the prompt and the `OpenAI` chat-completions client
/// - `core` holds configuration and the request/response models
///
/// # Example
///
/// ```no_run
/// use thoughtcaddy::ai::LlmClient;
/// use thoughtcaddy::core::config::AppConfig;
/// use thoughtcaddy::core::models::SummarizeRequest;
/// use thoughtcaddy::features::SummarizationService;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     thoughtcaddy::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let service = SummarizationService::new(LlmClient::new(&config)?);
///
///     let request = SummarizeRequest::new(
///         "Today was hard but I learned something.",
///         Some("user-123".to_string()),
///     );
///     match service.summarize(&request).await {
///         Ok(response) => println!("Summary: {}", response.summary),
///         Err(e) => println!("Failed ({}): {}", e.code(), e),
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;

pub use errors::{ProviderError, SummarizeError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to `CloudWatch` Logs. The level comes from `RUST_LOG` and
/// defaults to `info`. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// thoughtcaddy::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
