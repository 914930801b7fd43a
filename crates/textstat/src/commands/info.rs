//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use textstat_core::config::{Config, ConfigSources};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    disable_input_limit: bool,
    strip_markdown: bool,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.max_input_bytes,
            disable_input_limit: config.disable_input_limit,
            strip_markdown: config.strip_markdown_enabled(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }
        match full_info.config.max_input_bytes {
            _ if full_info.config.disable_input_limit => {
                println!("{}: {}", "Input limit".dimmed(), "disabled".yellow());
            }
            Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
            None => println!(
                "{}: {} bytes (default)",
                "Input limit".dimmed(),
                textstat_core::DEFAULT_MAX_INPUT_BYTES
            ),
        }
        println!(
            "{}: {}",
            "Strip markdown".dimmed(),
            full_info.config.strip_markdown
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_info_text_succeeds() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources).is_ok());
    }

    #[test]
    fn cmd_info_json_via_global() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources).is_ok());
    }

    #[test]
    fn config_info_reflects_defaults() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert!(info.strip_markdown);
    }
}
