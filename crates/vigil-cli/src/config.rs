use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vigil_core::config::EngineConfig;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "VIGIL_CONFIG";

/// Engine fields that pre-versioned files kept at the top level.
const V0_ENGINE_KEYS: &[&str] = &[
    "primaryRecommendationLimit",
    "recommendationsPerScorer",
    "dueSoonFraction",
    "includeNotApplicable",
    "completenessWarningThreshold",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VigilConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Default for VigilConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            engine: EngineConfig::default(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).map(PathBuf::from)
}

/// Load from `$VIGIL_CONFIG`, or fall back to defaults when it is unset.
pub fn load_from_env() -> eyre::Result<VigilConfig> {
    match config_path() {
        Some(path) => load_config(&path),
        None => {
            tracing::debug!("{CONFIG_ENV} not set, using default engine config");
            Ok(VigilConfig::default())
        }
    }
}

pub fn load_config(path: &Path) -> eyre::Result<VigilConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = parse_config(&contents)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Parse, migrate and validate a config document.
pub fn parse_config(contents: &str) -> eyre::Result<VigilConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("configVersion")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: VigilConfig = serde_json::from_value(migrated)?;
    config.engine.validate()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "configVersion {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update vigil."
        ));
    }

    // v0 → v1: engine fields move from the top level into "engine"
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let mut engine = serde_json::Map::new();
        for key in V0_ENGINE_KEYS {
            if let Some(value) = obj.remove(*key) {
                engine.insert((*key).to_string(), value);
            }
        }
        obj.insert("engine".to_string(), serde_json::Value::Object(engine));
        obj.insert(
            "configVersion".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested engine settings)");
    }

    Ok(json)
}

/// Write `config` to `path`, stamped with the current version.
pub fn save_config(config: &VigilConfig, path: &Path) -> eyre::Result<()> {
    config.engine.validate()?;

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
