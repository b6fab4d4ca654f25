// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Normalizer configuration
// ============================================================================

/// VNL voice normalization layer configuration
///
/// Every field has a serde default so older or partial config files keep
/// loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Master switch; when off the engine only classifies (default on)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// NFC + collapse whitespace runs before classification
    #[serde(default = "default_true")]
    pub fold_whitespace: bool,
    /// Arabic-Indic digits → ASCII digits
    #[serde(default = "default_true")]
    pub fold_eastern_digits: bool,
    /// Arabic dual nouns → "2 <singular>"
    #[serde(default = "default_true")]
    pub expand_duals: bool,
    /// "twenty one" → "21" instead of "20 1"
    #[serde(default = "default_true")]
    pub fuse_compounds: bool,
    /// Drop a leading "and" / "و" from continuation voice notes
    #[serde(default)]
    pub strip_leading_connector: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fold_whitespace: true,
            fold_eastern_digits: true,
            expand_duals: true,
            fuse_compounds: true,
            strip_leading_connector: false,
        }
    }
}

impl NormalizerConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("could not resolve config directory"))?;
        let app_dir = config_dir.join("VoiceNormalizer");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("loading config from {:?}", path);

        if !path.exists() {
            tracing::info!("config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let v: serde_json::Value = serde_json::from_str(&content)?;

        let config = match serde_json::from_value(v.clone()) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("config did not parse, recovering field by field: {}", e);
                Self::recover(&v)
            }
        };

        Ok(config)
    }

    /// Keep every boolean field that still parses, default the rest
    fn recover(v: &serde_json::Value) -> Self {
        let mut cfg = Self::default();
        let fields: [(&str, &mut bool); 6] = [
            ("enabled", &mut cfg.enabled),
            ("fold_whitespace", &mut cfg.fold_whitespace),
            ("fold_eastern_digits", &mut cfg.fold_eastern_digits),
            ("expand_duals", &mut cfg.expand_duals),
            ("fuse_compounds", &mut cfg.fuse_compounds),
            ("strip_leading_connector", &mut cfg.strip_leading_connector),
        ];

        for (name, slot) in fields {
            if let Some(value) = v.get(name).and_then(serde_json::Value::as_bool) {
                *slot = value;
            }
        }

        cfg
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Atomic save: write a temp file, then rename over the target
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("saving config to {:?}", path);

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("failed to write temp config: {}", e);
            e
        })?;

        std::fs::rename(&temp_path, path).map_err(|e| {
            tracing::error!("failed to replace config: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            e
        })?;

        Ok(())
    }
}
