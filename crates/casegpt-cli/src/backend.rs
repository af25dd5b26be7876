use casegpt_model::bedrock::BedrockModel;
use casegpt_model::client::CaseModel;
use casegpt_model::openai::{OpenAiModel, OpenAiSettings};
use tracing::info;

use crate::aws;
use crate::config::{CaseGptConfig, Provider};
use crate::credentials::{API_KEY_VAR, redact_key, require_api_key};

/// Build the configured model client, checking credentials up front.
///
/// Missing or rejected credentials are returned as errors and are meant to
/// end the program before the first case is requested.
pub fn connect(config: &CaseGptConfig) -> eyre::Result<Box<dyn CaseModel>> {
    match config.provider {
        Provider::OpenAi => {
            let api_key = require_api_key(std::env::var(API_KEY_VAR).ok())?;
            info!(key_hint = %redact_key(&api_key), model = config.model_id(), "using OpenAI-compatible backend");

            let mut settings = OpenAiSettings::new(api_key);
            settings.model = config.model_id().to_string();
            settings.timeout = config.timeout();
            if let Some(base_url) = &config.base_url {
                settings.base_url = base_url.clone();
            }

            Ok(Box::new(OpenAiModel::new(settings)))
        }
        Provider::Bedrock => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;

            let (sdk_config, identity) = runtime.block_on(async {
                let sdk_config = aws::build_aws_config(
                    config.region(),
                    config.aws_profile.as_deref(),
                    config.timeout(),
                )
                .await;
                let identity = aws::validate_credentials(&sdk_config).await?;
                Ok::<_, eyre::Report>((sdk_config, identity))
            })?;

            info!(
                account_id = %identity.account_id,
                region = config.region(),
                model = config.model_id(),
                "using Bedrock backend"
            );

            Ok(Box::new(BedrockModel::new(runtime, &sdk_config, config.model_id())))
        }
    }
}
