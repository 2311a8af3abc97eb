use anyhow::{Context, Result};
use clap::ArgMatches;
use redeem_linalg::config::{AngleUnit, LinalgConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Read a `LinalgConfig` from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LinalgConfig> {
    let path = path.as_ref();
    validate_json_file(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: LinalgConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

/// Build the effective configuration: the `--config` file if given (else
/// defaults), then any command-line overrides.
pub fn config_from_arguments(matches: &ArgMatches) -> Result<LinalgConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[ReDeeM::Linalg] Using config: {:?}", path);
            load_config(path)?
        }
        None => {
            log::debug!("[ReDeeM::Linalg] No config provided; using defaults.");
            LinalgConfig::default()
        }
    };

    if let Some(unit) = matches.get_one::<String>("unit") {
        config.angle_unit = AngleUnit::from_str(unit).map_err(anyhow::Error::msg)?;
    }

    if let Some(tolerance) = matches.get_one::<f64>("tolerance") {
        config.tolerance = *tolerance;
    }

    if let Some(precision) = matches.get_one::<usize>("precision") {
        config.precision = *precision;
    }

    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

pub fn validate_json_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    if ext.as_deref() != Some("json") {
        anyhow::bail!("Config file must have a .json extension: {}", path.display());
    }

    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    Ok(())
}
