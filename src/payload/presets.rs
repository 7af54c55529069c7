// src/payload/presets.rs
//! WAF body-size presets
//!
//! Approximate request-body inspection limits for common WAF products. The
//! numbers are only used to pick a filler size and to print a reference list.

use crate::error::NowafError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const KIB: usize = 1024;
const MIB: usize = 1024 * KIB;
const GIB: usize = 1024 * MIB;

/// A built-in WAF preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WafPreset {
    pub name: &'static str,
    pub limit: usize,
    /// Human-readable description of the documented limit
    pub note: &'static str,
}

pub const BUILTIN_PRESETS: &[WafPreset] = &[
    WafPreset { name: "cloudflare", limit: 128 * KIB, note: "128 KB for ruleset engine, up to 500 MB for enterprise" },
    WafPreset { name: "aws", limit: 64 * KIB, note: "8 KB - 64 KB (configurable depending on service)" },
    WafPreset { name: "akamai", limit: 128 * KIB, note: "8 KB - 128 KB" },
    WafPreset { name: "azure", limit: 128 * KIB, note: "128 KB" },
    WafPreset { name: "fortiweb", limit: 100 * MIB, note: "100 MB" },
    WafPreset { name: "barracuda", limit: 64 * KIB, note: "64 KB" },
    WafPreset { name: "sucuri", limit: 10 * MIB, note: "10 MB" },
    WafPreset { name: "radware", limit: GIB, note: "up to 1 GB for cloud WAF" },
    WafPreset { name: "f5", limit: 20 * MIB, note: "20 MB (configurable)" },
    WafPreset { name: "paloalto", limit: 10 * MIB, note: "10 MB" },
    WafPreset { name: "cloudarmor", limit: 128 * KIB, note: "8 KB (can be increased to 128 KB)" },
];

/// On-disk format for user supplied presets
///
/// ```yaml
/// presets:
///   internal-gateway: 32768
///   legacy-appliance: 4096
/// ```
#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(default)]
    presets: BTreeMap<String, usize>,
}

/// Built-in presets plus any custom ones loaded at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetTable {
    custom: BTreeMap<String, usize>,
}

impl PresetTable {
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load custom presets from a YAML file, shadowing built-ins with the same name
    pub fn load_custom(&mut self, path: &Path) -> Result<usize, NowafError> {
        let content = std::fs::read_to_string(path)?;
        let file: PresetFile = serde_yaml::from_str(&content)?;

        let count = file.presets.len();
        for (name, limit) in file.presets {
            self.insert(&name, limit)?;
        }

        tracing::debug!(path = %path.display(), count, "loaded custom presets");
        Ok(count)
    }

    pub fn insert(&mut self, name: &str, limit: usize) -> Result<(), NowafError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NowafError::Config("preset name must not be empty".to_string()));
        }
        self.custom.insert(name.to_lowercase(), limit);
        Ok(())
    }

    /// Case-insensitive lookup; custom presets win over built-ins
    pub fn lookup(&self, name: &str) -> Option<usize> {
        let name = name.trim().to_lowercase();
        if let Some(limit) = self.custom.get(&name) {
            return Some(*limit);
        }
        BUILTIN_PRESETS
            .iter()
            .find(|preset| preset.name == name)
            .map(|preset| preset.limit)
    }

    /// Reference list printed by `--list-wafs`
    pub fn render_listing(&self, default_size: usize) -> String {
        let mut out = String::from("Available WAF size presets:\n");
        out.push_str(&format!(
            "Default: {} bytes ({:.1} KB)\n",
            default_size,
            default_size as f64 / KIB as f64
        ));

        for preset in BUILTIN_PRESETS {
            out.push_str(&format!("{}\t{}\n", preset.name, preset.note));
        }

        for (name, limit) in &self.custom {
            out.push_str(&format!("{}\t{} bytes (custom)\n", name, limit));
        }

        out
    }
}
