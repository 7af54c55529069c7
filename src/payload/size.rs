// src/payload/size.rs
use crate::payload::presets::PresetTable;

/// Size used by `--small` and as the multiplier unit
pub const KIB: usize = 1024;

/// Size inputs in the order they are consulted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeSpec {
    /// Exact byte count
    pub explicit: Option<usize>,
    /// Kilobyte multiplier (`value * 1024`)
    pub multiplier: Option<usize>,
    /// WAF preset name
    pub preset: Option<String>,
}

/// Pick the filler size: explicit > multiplier > preset > default.
///
/// An unknown preset name resolves to `default` without error.
pub fn resolve_size(spec: &SizeSpec, presets: &PresetTable, default: usize) -> usize {
    if let Some(size) = spec.explicit {
        return size;
    }

    if let Some(multiplier) = spec.multiplier {
        return multiplier.saturating_mul(KIB);
    }

    if let Some(ref name) = spec.preset {
        return match presets.lookup(name) {
            Some(limit) => limit,
            None => {
                tracing::debug!(preset = %name, default, "unknown WAF preset, using default size");
                default
            }
        };
    }

    default
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(explicit: Option<usize>, multiplier: Option<usize>, preset: Option<&str>) -> SizeSpec {
        SizeSpec {
            explicit,
            multiplier,
            preset: preset.map(str::to_string),
        }
    }

    #[test]
    fn test_explicit_wins() {
        let presets = PresetTable::builtin();
        let size = resolve_size(&spec(Some(100), Some(5), Some("aws")), &presets, 8192);
        assert_eq!(size, 100);
    }

    #[test]
    fn test_multiplier_beats_preset() {
        let presets = PresetTable::builtin();
        let size = resolve_size(&spec(None, Some(5), Some("aws")), &presets, 8192);
        assert_eq!(size, 5 * 1024);
    }

    #[test]
    fn test_preset_beats_default() {
        let presets = PresetTable::builtin();
        let size = resolve_size(&spec(None, None, Some("Barracuda")), &presets, 8192);
        assert_eq!(size, 64 * 1024);
    }

    #[test]
    fn test_unknown_preset_falls_back_to_default() {
        let presets = PresetTable::builtin();
        assert_eq!(resolve_size(&spec(None, None, Some("nope")), &presets, 8192), 8192);
        assert_eq!(resolve_size(&spec(None, None, Some("nope")), &presets, 1024), 1024);
    }

    #[test]
    fn test_default_when_nothing_given() {
        let presets = PresetTable::builtin();
        assert_eq!(resolve_size(&SizeSpec::default(), &presets, 8192), 8192);
    }

    #[test]
    fn test_zero_is_a_real_value() {
        let presets = PresetTable::builtin();
        assert_eq!(resolve_size(&spec(Some(0), None, None), &presets, 8192), 0);
        assert_eq!(resolve_size(&spec(None, Some(0), None), &presets, 8192), 0);
    }

    #[test]
    fn test_multiplier_saturates() {
        let presets = PresetTable::builtin();
        let size = resolve_size(&spec(None, Some(usize::MAX), None), &presets, 8192);
        assert_eq!(size, usize::MAX);
    }
}
