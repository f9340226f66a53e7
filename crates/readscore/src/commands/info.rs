//! `readscore info`: version and effective settings.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use readscore_core::config::{Config, ConfigSources, user_config_dir};
use readscore_core::readability::SELECTION_TOKENS;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand (output format comes from `--json`).
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// What `info` reports, in both output formats.
#[derive(Serialize)]
struct Info {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
    config: Settings,
}

#[derive(Serialize)]
struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    loaded_files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<String>,
    echo_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl Settings {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            loaded_files: sources.files.iter().map(ToString::to_string).collect(),
            user_config_dir: user_config_dir().map(|dir| dir.to_string()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            score: config.score.clone(),
            echo_text: config.echo_text,
            max_input_bytes: config.input_limit(),
        }
    }
}

/// Print the package version and the settings a scoring run would use.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json = global_json, "executing info command");
    let info = Info {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        license: env!("CARGO_PKG_LICENSE"),
        config: Settings::new(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", render(&info));
    }
    Ok(())
}

fn render(info: &Info) -> String {
    let settings = &info.config;
    let mut lines = vec![format!(
        "{} {}",
        info.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        info.version.if_supports_color(Stream::Stdout, |t| t.green())
    )];
    if !info.license.is_empty() {
        lines.push(field("License", info.license));
    }

    lines.push(String::new());
    lines.push(heading("Configuration"));
    lines.push(field(
        "Config file",
        settings.config_file.as_deref().unwrap_or("none loaded"),
    ));
    if let Some((_, earlier)) = settings.loaded_files.split_last()
        && !earlier.is_empty()
    {
        lines.push(field("Also merged", &earlier.join(", ")));
    }
    if let Some(ref dir) = settings.user_config_dir {
        lines.push(field("User config directory", dir));
    }
    lines.push(field("Log level", settings.log_level));
    lines.push(field(
        "Log directory",
        settings.log_dir.as_deref().unwrap_or("(not set)"),
    ));

    lines.push(String::new());
    lines.push(heading("Scoring"));
    let score = match settings.score {
        Some(ref token) => token.clone(),
        None => format!("prompt ({})", SELECTION_TOKENS.join(", ")),
    };
    lines.push(field("Score", &score));
    lines.push(field("Echo text", &settings.echo_text.to_string()));
    let limit = settings
        .max_input_bytes
        .map_or_else(|| "disabled".to_string(), |max| format!("{max} bytes"));
    lines.push(field("Input limit", &limit));

    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn heading(title: &str) -> String {
    title
        .if_supports_color(Stream::Stdout, |t| t.bold())
        .to_string()
}

fn field(label: &str, value: &str) -> String {
    format!(
        "{}: {value}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn info_for(config: &Config, sources: &ConfigSources) -> Info {
        Info {
            name: "readscore",
            version: "0.0.0",
            license: "",
            config: Settings::new(config, sources),
        }
    }

    #[test]
    fn default_settings_prompt_for_a_score() {
        let info = info_for(&Config::default(), &ConfigSources::default());
        let text = render(&info);

        assert!(info.config.config_file.is_none());
        assert!(text.contains("Config file: none loaded"));
        assert!(text.contains("Score: prompt (ARI, FK, SMOG, CL, all)"));
        assert!(text.contains("Echo text: true"));
        assert!(text.contains("Input limit: 5242880 bytes"));
    }

    #[test]
    fn configured_values_are_reported() {
        let config = Config {
            score: Some("SMOG".to_string()),
            disable_input_limit: true,
            ..Config::default()
        };
        let sources = ConfigSources {
            files: vec![
                Utf8PathBuf::from("/home/me/.config/readscore/config.toml"),
                Utf8PathBuf::from("/work/.readscore.toml"),
            ],
        };
        let info = info_for(&config, &sources);
        let text = render(&info);

        assert_eq!(info.config.config_file.as_deref(), Some("/work/.readscore.toml"));
        assert!(text.contains("Also merged: /home/me/.config/readscore/config.toml"));
        assert!(text.contains("Score: SMOG"));
        assert!(text.contains("Input limit: disabled"));
    }

    #[test]
    fn json_omits_unset_fields() {
        let info = info_for(&Config::default(), &ConfigSources::default());
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["config"]["log_level"], "info");
        assert_eq!(json["config"]["echo_text"], true);
        assert!(json["config"].get("score").is_none());
        assert!(json["config"].get("loaded_files").is_none());
        assert!(json.get("license").is_none());
    }

    #[test]
    fn cmd_info_succeeds_in_both_formats() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources).is_ok());
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources).is_ok());
    }
}
