// src/lib.rs
//! nowaf: inflate HTTP request bodies with junk JSON to probe WAF body-size limits

pub mod cli;
pub mod error;
pub mod logging;
pub mod payload;

use cli::Cli;
use error::NowafError;
use payload::splice::SpliceOutcome;

/// What the binary should print for a parsed command line
#[derive(Debug)]
pub enum Output {
    /// `--list-wafs` reference table
    Listing(String),
    /// No input given
    Help,
    /// The inflated request
    Payload(SpliceOutcome),
}

pub fn run(cli: &Cli) -> Result<Output, NowafError> {
    if cli.list_wafs {
        let table = cli.preset_table().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring custom presets");
            payload::presets::PresetTable::builtin()
        });
        let default = if cli.small {
            payload::config::SMALL_SIZE
        } else {
            cli.profile.default_size()
        };
        return Ok(Output::Listing(table.render_listing(default)));
    }

    let Some(ref input) = cli.input else {
        return Ok(Output::Help);
    };

    let config = cli.to_config()?;
    let request = payload::load_request(input)?;
    Ok(Output::Payload(payload::build_with_config(&request, &config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("nowaf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_list_wafs_needs_no_input() {
        let output = run(&parse(&["--list-wafs", "--size", "10", "--obfuscate"])).unwrap();
        match output {
            Output::Listing(text) => {
                assert!(text.starts_with("Available WAF size presets:"));
                assert!(text.contains("Default: 8192 bytes (8.0 KB)"));
                assert!(text.contains("cloudarmor\t"));
            }
            other => panic!("expected listing, got {:?}", other),
        }
    }

    #[test]
    fn test_list_wafs_survives_bad_presets_file() {
        let output = run(&parse(&["--list-wafs", "--presets", "/nonexistent/p.yaml"])).unwrap();
        assert!(matches!(output, Output::Listing(_)));
    }

    #[test]
    fn test_missing_input_is_help() {
        assert!(matches!(run(&parse(&[])).unwrap(), Output::Help));
    }

    #[test]
    fn test_end_to_end_non_json_body() {
        let output = run(&parse(&["POST / HTTP/1.1\n\nhello", "--size", "10", "--seed", "1"])).unwrap();
        let Output::Payload(outcome) = output else {
            panic!("expected payload");
        };
        let text = outcome.into_text();
        let trailer = text.strip_prefix("POST / HTTP/1.1\n\nhello\n").expect("body kept");

        let value: serde_json::Value = serde_json::from_str(trailer).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["status"], "accepted");
        assert_eq!(object.len(), 2);
    }

    #[test]
    fn test_unreadable_presets_file_fails_build() {
        let result = run(&parse(&["GET /", "--presets", "/nonexistent/p.yaml"]));
        assert!(matches!(result, Err(NowafError::Io(_))));
    }
}
