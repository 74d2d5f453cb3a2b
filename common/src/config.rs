use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{Level, debug, instrument};

use crate::header::HeaderConfig;

// site configuration
//
// the webapp embeds its configuration at compile time, so there is no file i/o here; every
// field has a default and an empty document is a valid configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub header: HeaderConfig,
    pub logging: LogConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    // one of trace, debug, info, warn, error
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: String::from("debug"),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.level).with_context(|| format!("unknown log level '{}'", self.level))
    }
}

// the settings live under a [config] table so the file can carry other tables (e.g. for the
// dioxus tooling) without them being treated as site options
#[derive(Debug, Deserialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;
    let config = data.config;

    validate(&config)?;

    debug!(?config, "successfully parsed site config");
    Ok(config)
}

fn validate(config: &SiteConfig) -> Result<()> {
    let header = &config.header;

    if !header.scroll_threshold.is_finite() || header.scroll_threshold < 0.0 {
        bail!(
            "header.scroll_threshold must be a non-negative number, got {}",
            header.scroll_threshold
        );
    }

    if !header.narrow_breakpoint.is_finite() || header.narrow_breakpoint <= 0.0 {
        bail!(
            "header.narrow_breakpoint must be a positive number, got {}",
            header.narrow_breakpoint
        );
    }

    config.logging.level().context("invalid logging.level")?;

    Ok(())
}
