//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout, Style};
use passage_stats_core::config::{Config, ConfigSources, user_config_dir};
use serde::Serialize;
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
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    passage_file: String,
    top_n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            user_config_dir: user_config_dir().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            passage_file: config.passage_file.to_string(),
            top_n: config.top_n,
            max_input_bytes: config.max_input(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
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
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stdout, |t| t.bold()),
        package.version.if_supports_color(Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", label("License"), package.license);
    }
    if !package.repository.is_empty() {
        println!(
            "{}: {}",
            label("Repository"),
            package.repository.if_supports_color(Stdout, |t| t.cyan())
        );
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", heading("Configuration"));
    match cfg.config_file {
        Some(ref path) => println!(
            "{}: {}",
            label("Config file"),
            path.if_supports_color(Stdout, |t| t.cyan())
        ),
        None => println!("{}: {}", label("Config file"), notice("none loaded")),
    }
    if let Some(ref dir) = cfg.user_config_dir {
        println!("{}: {}", label("User config dir"), dir);
    }
    println!("{}: {}", label("Log level"), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", label("Log directory"), dir);
    }

    println!();
    println!("{}", heading("Analysis"));
    println!("{}: {}", label("Passage file"), cfg.passage_file);
    println!("{}: {}", label("Top words"), cfg.top_n);
    match cfg.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", label("Input limit")),
        None => println!("{}: {}", label("Input limit"), notice("disabled")),
    }

    Ok(())
}

fn heading(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.style(Style::new().bold().underline()))
        .to_string()
}

fn label(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}

fn notice(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.yellow()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let result = cmd_info(
            InfoArgs::default(),
            false,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let result = cmd_info(
            InfoArgs::default(),
            true,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.passage_file, "passage.txt");
        assert_eq!(info.top_n, 10);
    }

    #[test]
    fn test_config_info_limit_disabled() {
        let config = Config {
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.max_input_bytes.is_none());
    }
}
