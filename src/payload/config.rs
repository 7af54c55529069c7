// src/payload/config.rs
use crate::error::NowafError;
use crate::payload::filler::KeyStyle;
use crate::payload::presets::PresetTable;
use crate::payload::size::{resolve_size, SizeSpec, KIB};
use crate::payload::splice::SpliceMode;
use serde::{Deserialize, Serialize};

/// Default size of the `standard` profile
pub const STANDARD_DEFAULT_SIZE: usize = 8 * KIB;

/// Default size of the `classic` profile, also used by `--small`
pub const SMALL_SIZE: usize = KIB;

/// The two behaviour sets the tool ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// 8 KB default, `token_` keys, merges into existing bodies
    #[default]
    Standard,
    /// 1 KB default, random word keys, always appends
    Classic,
}

impl Profile {
    pub fn default_size(self) -> usize {
        match self {
            Profile::Standard => STANDARD_DEFAULT_SIZE,
            Profile::Classic => SMALL_SIZE,
        }
    }

    pub fn key_style(self) -> KeyStyle {
        match self {
            Profile::Standard => KeyStyle::Token,
            Profile::Classic => KeyStyle::RandomWord,
        }
    }

    pub fn splice_mode(self) -> SpliceMode {
        match self {
            Profile::Standard => SpliceMode::Merge,
            Profile::Classic => SpliceMode::Append,
        }
    }
}

/// Configuration for one payload build
#[derive(Debug, Clone)]
pub struct PayloadConfig {
    pub profile: Profile,
    pub size: SizeSpec,
    /// Replace the profile default with [`SMALL_SIZE`]
    pub small: bool,
    pub obfuscate: bool,
    /// Force [`SpliceMode::Append`] regardless of profile
    pub legacy: bool,
    pub presets: PresetTable,
    pub seed: Option<u64>,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Standard,
            size: SizeSpec::default(),
            small: false,
            obfuscate: false,
            legacy: false,
            presets: PresetTable::builtin(),
            seed: None,
        }
    }
}

impl PayloadConfig {
    pub fn validate(&self) -> Result<(), NowafError> {
        if let Some(multiplier) = self.size.multiplier {
            if multiplier.checked_mul(KIB).is_none() {
                return Err(NowafError::Config(format!(
                    "junk multiplier {} overflows the maximum body size",
                    multiplier
                )));
            }
        }

        Ok(())
    }

    /// Size used when no explicit size, multiplier or known preset is given
    pub fn default_size(&self) -> usize {
        if self.small {
            SMALL_SIZE
        } else {
            self.profile.default_size()
        }
    }

    pub fn target_size(&self) -> usize {
        resolve_size(&self.size, &self.presets, self.default_size())
    }

    pub fn splice_mode(&self) -> SpliceMode {
        if self.legacy {
            SpliceMode::Append
        } else {
            self.profile.splice_mode()
        }
    }

    pub fn key_style(&self) -> KeyStyle {
        self.profile.key_style()
    }
}
