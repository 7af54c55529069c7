// src/cli.rs
use crate::error::NowafError;
use crate::payload::config::{PayloadConfig, Profile};
use crate::payload::presets::PresetTable;
use crate::payload::size::SizeSpec;
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  nowaf payload.txt                      # Add 8192 bytes of junk data
  nowaf 'GET / HTTP/1.1'                 # Add 8192 bytes to raw request
  nowaf payload.txt --size 16384         # Add 16KB of junk data
  nowaf payload.txt --waf aws            # Use AWS WAF preset (64KB)
  nowaf payload.txt --junk-multiplier 16 # Add 16KB (16 * 1024)
  nowaf payload.txt --obfuscate          # Use random characters instead of 'a's
  nowaf payload.txt --profile classic    # 1KB default, random keys, plain append
  nowaf --list-wafs                      # List available WAF presets";

#[derive(Debug, Clone, Parser)]
#[command(name = "nowaf")]
#[command(version)]
#[command(about = "Generate large JSON bodies for testing WAF body-size limits", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Payload text or file path
    pub input: Option<String>,

    /// Manual size in bytes
    #[arg(long)]
    pub size: Option<usize>,

    /// Generate (value * 1024) bytes
    #[arg(long)]
    pub junk_multiplier: Option<usize>,

    /// WAF preset for body size (case-insensitive)
    #[arg(long)]
    pub waf: Option<String>,

    /// Use 1KB instead of the profile default size
    #[arg(long)]
    pub small: bool,

    /// Use random characters instead of 'a'
    #[arg(long)]
    pub obfuscate: bool,

    /// Use legacy mode (always append JSON)
    #[arg(long)]
    pub legacy: bool,

    /// List available WAF presets
    #[arg(long)]
    pub list_wafs: bool,

    /// Behaviour profile
    #[arg(long, value_enum, default_value_t = Profile::Standard)]
    pub profile: Profile,

    /// YAML file with additional WAF presets
    #[arg(long)]
    pub presets: Option<PathBuf>,

    /// Seed for reproducible junk keys and content
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log builder decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn preset_table(&self) -> Result<PresetTable, NowafError> {
        let mut table = PresetTable::builtin();
        if let Some(ref path) = self.presets {
            table.load_custom(path)?;
        }
        Ok(table)
    }

    pub fn to_config(&self) -> Result<PayloadConfig, NowafError> {
        let config = PayloadConfig {
            profile: self.profile,
            size: SizeSpec {
                explicit: self.size,
                multiplier: self.junk_multiplier,
                preset: self.waf.clone(),
            },
            small: self.small,
            obfuscate: self.obfuscate,
            legacy: self.legacy,
            presets: self.preset_table()?,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
