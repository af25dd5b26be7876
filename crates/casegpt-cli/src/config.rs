use std::path::{Path, PathBuf};
use std::time::Duration;

use casegpt_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_BEDROCK_REGION: &str = "us-east-1";
pub const DEFAULT_BEDROCK_MODEL: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Which model service answers case and question prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Provider {
    #[default]
    #[serde(rename = "openai")]
    #[value(name = "openai")]
    OpenAi,
    #[serde(rename = "bedrock")]
    #[value(name = "bedrock")]
    Bedrock,
}

/// On-disk settings. Every field is optional; a missing file means all
/// defaults. The API key is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseGptConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    pub provider: Provider,
    /// Model ID; the provider's default when unset.
    pub model: Option<String>,
    /// OpenAI-compatible endpoint base URL.
    pub base_url: Option<String>,
    /// Bedrock region.
    pub region: Option<String>,
    /// Named AWS profile for Bedrock; the default chain when unset.
    pub aws_profile: Option<String>,
    /// Where `/export` writes when no path is given. Current directory when
    /// unset.
    pub export_dir: Option<PathBuf>,
    /// Tera template for question prompts, with `narrative` and `question`.
    pub question_template: Option<String>,
    /// Per-request limit for model calls, on either provider.
    pub timeout_secs: u64,
    pub document: DocumentStyles,
}

impl Default for CaseGptConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            provider: Provider::default(),
            model: None,
            base_url: None,
            region: None,
            aws_profile: None,
            export_dir: None,
            question_template: None,
            timeout_secs: 120,
            document: DocumentStyles::default(),
        }
    }
}

impl CaseGptConfig {
    pub fn model_id(&self) -> &str {
        match (&self.model, self.provider) {
            (Some(model), _) => model.as_str(),
            (None, Provider::OpenAi) => casegpt_model::openai::DEFAULT_MODEL,
            (None, Provider::Bedrock) => DEFAULT_BEDROCK_MODEL,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_BEDROCK_REGION)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Apply command-line overrides on top of the file settings.
    pub fn apply_overrides(
        &mut self,
        provider: Option<Provider>,
        model: Option<String>,
        export_dir: Option<PathBuf>,
    ) {
        if let Some(provider) = provider {
            if provider != self.provider && model.is_none() {
                // A model ID from the file belongs to the other provider.
                self.model = None;
            }
            self.provider = provider;
        }
        if model.is_some() {
            self.model = model;
        }
        if export_dir.is_some() {
            self.export_dir = export_dir;
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("casegpt"))
}

/// `<config_dir>/casegpt/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or defaults if the file does not exist.
pub fn load_config(path: &Path) -> eyre::Result<CaseGptConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CaseGptConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))?;
    // Versions past u32 are still "newer than supported", not a wrap-around.
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

    let migrated = migrate(json, on_disk_version)?;
    let config: CaseGptConfig = serde_json::from_value(migrated)
        .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update CaseGPT."
        ));
    }

    // v0 → v1: hand-written files without a version have the v1 shape.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::debug!("stamped unversioned config as v1");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &CaseGptConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
