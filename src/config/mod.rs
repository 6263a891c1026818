//! JSON runtime configuration for the `boundary_demo` binary.
//!
//! ```json
//! {
//!   "input_path": "survey.csv",
//!   "output": { "json_out": "out/boundary.json", "format": "both" },
//!   "params": { "cluster_eps_m": 100.0, "mode": "boundary" }
//! }
//! ```
//!
//! `output`, `profile` and `params` are optional; omitted fields take their
//! defaults. A `profile` (`parcel`, `site`, `regional`) overrides
//! `params.cluster_eps_m`.

use crate::error::{Error, Result};
use crate::extractor::{BoundaryParams, SurveyProfile};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What the demo prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the JSON report here instead of stdout.
    pub json_out: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub profile: Option<SurveyProfile>,
    #[serde(default)]
    pub params: BoundaryParams,
}

impl RuntimeConfig {
    /// Parameters with the profile's linkage distance applied.
    pub fn effective_params(&self) -> BoundaryParams {
        let mut params = self.params.clone();
        if let Some(profile) = self.profile {
            params.cluster_eps_m = profile.cluster_eps_m();
        }
        params
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut config: RuntimeConfig =
        serde_json::from_str(&data).map_err(|e| Error::json(path, e))?;
    // Relative input paths are resolved against the config file's directory.
    if config.input_path.is_relative() {
        if let Some(dir) = path.parent() {
            config.input_path = dir.join(&config.input_path);
        }
    }
    Ok(config)
}

/// Parse `<program> <config.json>` from the process arguments.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig> {
    parse_args(program, std::env::args().skip(1))
}

pub fn parse_args(program: &str, mut args: impl Iterator<Item = String>) -> Result<RuntimeConfig> {
    let path = args
        .next()
        .ok_or_else(|| Error::Usage(format!("Usage: {program} <config.json>")))?;
    if args.next().is_some() {
        return Err(Error::Usage(format!(
            "Usage: {program} <config.json> (unexpected extra arguments)"
        )));
    }
    load_config(Path::new(&path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_flags() {
        assert!(OutputFormat::Both.includes_text() && OutputFormat::Both.includes_json());
        assert!(!OutputFormat::Json.includes_text());
        assert!(!OutputFormat::Text.includes_json());
    }

    #[test]
    fn missing_argument_is_usage_error() {
        let err = parse_args("boundary_demo", std::iter::empty()).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        assert!(err.to_string().contains("boundary_demo <config.json>"));
    }
}
