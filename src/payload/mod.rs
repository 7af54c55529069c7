// src/payload/mod.rs
// Payload builder: size resolution, junk generation and body splicing

pub mod config;
pub mod filler;
pub mod presets;
pub mod size;
pub mod splice;

use crate::error::NowafError;
use config::PayloadConfig;
use filler::JunkGenerator;
use rand::Rng;
use splice::SpliceOutcome;
use std::path::Path;
use tracing::{debug, info};

/// Treat `input` as a file path if one exists there, otherwise as the request itself
pub fn load_request(input: &str) -> Result<String, NowafError> {
    let path = Path::new(input);
    if path.is_file() {
        debug!(path = %path.display(), "reading request from file");
        return Ok(std::fs::read_to_string(path)?);
    }
    Ok(input.to_string())
}

/// Main entry point: inflate `request` according to `config`
pub fn build_payload<R: Rng>(
    request: &str,
    config: &PayloadConfig,
    generator: &mut JunkGenerator<R>,
) -> SpliceOutcome {
    let size = config.target_size();
    let mode = config.splice_mode();

    info!(
        size,
        obfuscate = config.obfuscate,
        profile = ?config.profile,
        mode = ?mode,
        "building payload"
    );

    let junk = generator.junk_field(size, config.obfuscate, config.key_style());
    debug!(key = %junk.key, "generated junk field");

    splice::splice(request, &junk, mode)
}

/// Convenience wrapper that seeds the generator from the config
pub fn build_with_config(request: &str, config: &PayloadConfig) -> SpliceOutcome {
    match config.seed {
        Some(seed) => build_payload(request, config, &mut JunkGenerator::seeded(seed)),
        None => build_payload(request, config, &mut JunkGenerator::from_entropy()),
    }
}
