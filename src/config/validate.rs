//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    validate_ffmpeg(config)?;
    Ok(())
}

/// Validate default split settings.
fn validate_defaults(config: &Config) -> Result<()> {
    if let Some(ref dir) = config.defaults.output_dir
        && dir.exists()
        && !dir.is_dir()
    {
        return Err(Error::ConfigValidation {
            message: format!("output_dir '{}' exists but is not a directory", dir.display()),
        });
    }

    Ok(())
}

/// Validate audio cutter settings.
fn validate_ffmpeg(config: &Config) -> Result<()> {
    if config.ffmpeg.program.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "ffmpeg program must not be empty".to_string(),
        });
    }

    Ok(())
}
