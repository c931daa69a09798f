use anyhow::Context;
use thoughtcaddy::ai::LlmClient;
use thoughtcaddy::api::handler;
use thoughtcaddy::core::config::AppConfig;
use thoughtcaddy::features::SummarizationService;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    thoughtcaddy::setup_logging();

    let config = AppConfig::from_env()
        .inspect_err(|e| error!("Config error: {}", e))
        .context("loading configuration")?;
    info!(model = %config.openai_model, "Starting summarizeEntry function");

    let client = LlmClient::new(&config).context("building OpenAI client")?;
    let service = SummarizationService::new(client);
    let service = &service;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        handler(service, event).await
    }))
    .await
}
