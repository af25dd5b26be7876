use std::time::Duration;

use aws_config::timeout::TimeoutConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub account_id: String,
    pub arn: String,
    pub user_id: String,
}

/// Build an `SdkConfig` from a region and an optional named profile.
/// Without a profile the default credential chain is used. `timeout`
/// bounds each SDK operation, retries included.
pub async fn build_aws_config(
    region: &str,
    profile: Option<&str>,
    timeout: Duration,
) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .timeout_config(operation_timeouts(timeout));

    if let Some(profile_name) = profile {
        builder = builder.profile_name(profile_name);
    }

    builder.load().await
}

pub fn operation_timeouts(timeout: Duration) -> TimeoutConfig {
    TimeoutConfig::builder().operation_timeout(timeout).build()
}

/// Call STS GetCallerIdentity to validate credentials.
pub async fn validate_credentials(
    config: &aws_config::SdkConfig,
) -> eyre::Result<CallerIdentity> {
    let sts = aws_sdk_sts::Client::new(config);
    let resp = sts
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| eyre::eyre!("AWS credentials rejected (STS GetCallerIdentity failed): {e}"))?;

    Ok(CallerIdentity {
        account_id: resp.account().unwrap_or_default().to_string(),
        arn: resp.arn().unwrap_or_default().to_string(),
        user_id: resp.user_id().unwrap_or_default().to_string(),
    })
}
