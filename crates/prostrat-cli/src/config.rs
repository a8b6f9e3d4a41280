use std::path::{Path, PathBuf};

use prostrat_core::models::nomogram::NomogramInputs;
use prostrat_core::models::report::AggregationPolicy;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProstratConfig {
    /// Schema version. Missing or 0 = hand-written file without a version.
    #[serde(default)]
    pub config_version: u32,
    /// Systematic biopsy core count used as the aggregation denominator.
    #[serde(default = "default_systematic_cores")]
    pub systematic_cores: u32,
    /// Nomogram age when no date of birth is known.
    #[serde(default = "default_age")]
    pub default_age: u32,
    #[serde(default = "default_stage")]
    pub default_stage: String,
    #[serde(default = "default_psa")]
    pub default_psa: String,
}

fn default_systematic_cores() -> u32 {
    AggregationPolicy::DEFAULT_SYSTEMATIC_CORES
}

fn default_age() -> u32 {
    NomogramInputs::DEFAULT_AGE
}

fn default_stage() -> String {
    "T1c".to_string()
}

fn default_psa() -> String {
    "<10".to_string()
}

impl Default for ProstratConfig {
    fn default() -> Self {
        ProstratConfig {
            config_version: CURRENT_VERSION,
            systematic_cores: default_systematic_cores(),
            default_age: default_age(),
            default_stage: default_stage(),
            default_psa: default_psa(),
        }
    }
}

impl ProstratConfig {
    pub fn aggregation_policy(&self) -> AggregationPolicy {
        AggregationPolicy {
            systematic_cores: self.systematic_cores,
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("prostrat"))
}

/// Platform config file location.
pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, running migrations. A missing file yields
/// the defaults.
pub fn load_config_from(path: &Path) -> eyre::Result<ProstratConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ProstratConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ProstratConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Bring raw config JSON from `from_version` up to [`CURRENT_VERSION`],
/// rejecting files written by a newer build.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update prostrat."
        ));
    }

    // Hand-written files may omit `config_version`. Stamp them as current;
    // absent fields are filled by serde defaults on deserialize.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
        tracing::debug!("stamped unversioned config as v{CURRENT_VERSION}");
    }

    Ok(json)
}

/// Write `config` to `path` atomically, creating parent directories.
pub fn save_config_to(path: &Path, config: &ProstratConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

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
