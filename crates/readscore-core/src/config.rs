//! Settings for the `readscore` CLI.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `config.<ext>` in the user config directory ([`user_config_dir`])
//! 3. The nearest project directory holding `.readscore.<ext>` or
//!    `readscore.<ext>`, searched upward from the start directory and
//!    stopping at a repository root (a directory containing `.git`)
//! 4. Files added with [`ConfigLoader::with_file`], in order
//! 5. `READSCORE_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Inside one project directory
//! dotfiles load before regular files, so `readscore.yaml` beats
//! `.readscore.toml`.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use readscore_core::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load()?;
//! println!("{:?} from {:?}", config.score, sources.primary_file());
//! # Ok(())
//! # }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

const APP_NAME: &str = "readscore";
const ENV_PREFIX: &str = "READSCORE_";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
const REPOSITORY_MARKER: &str = ".git";

/// Effective readscore settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default log level when neither `RUST_LOG` nor `-q`/`-v` is given.
    pub log_level: LogLevel,
    /// Directory for the JSONL log file. No file log when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Score token answered instead of prompting: `ARI`, `FK`, `SMOG`,
    /// `CL` or `all`.
    ///
    /// Kept as written and validated when scoring, exactly like a token
    /// typed at the prompt.
    pub score: Option<String>,
    /// Print "The text is:" and the file contents before the counts.
    pub echo_text: bool,
    /// Largest file accepted for scoring, in bytes.
    pub max_input_bytes: Option<usize>,
    /// Accept files of any size, ignoring `max_input_bytes`.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            score: None,
            echo_text: true,
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// Effective input size limit, or `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Configured log level.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-stage counts.
    Debug,
    /// Configuration and command milestones.
    #[default]
    Info,
    /// Rejected selections and other recoverable problems.
    Warn,
    /// Fatal errors only.
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Files that contributed to a loaded [`Config`], lowest precedence first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Every file merged, in merge order.
    pub files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win, if any file was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files.last().map(Utf8PathBuf::as_path)
    }
}

/// Collects config sources and merges them into a [`Config`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    user_config: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads user config but searches no project directory.
    pub const fn new() -> Self {
        Self {
            search_from: None,
            user_config: true,
            explicit_files: Vec::new(),
        }
    }

    /// Search for project config starting at `dir`.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_from = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip `config.<ext>` in the user config directory.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Merge `path` after all discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when an explicit file is missing,
    /// a file does not parse, or a value has the wrong type.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let mut files = Vec::new();
        if self.user_config {
            files.extend(find_user_file());
        }
        if let Some(ref dir) = self.search_from {
            files.extend(find_project_files(dir));
        }
        files.extend(self.explicit_files);

        let figment = files
            .iter()
            .fold(Figment::from(Serialized::defaults(Config::default())), merge_file)
            .merge(Env::prefixed(ENV_PREFIX));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            files = files.len(),
            log_level = config.log_level.as_str(),
            score = ?config.score,
            "configuration loaded"
        );
        Ok((config, ConfigSources { files }))
    }
}

/// The user config directory: `~/.config/readscore` on Linux and the
/// platform equivalent elsewhere.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}

fn find_user_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Config files of the nearest directory that has any, dotfiles first.
fn find_project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = project_file_names()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            tracing::debug!(dir = %dir, count = found.len(), "found project config");
            return found;
        }
        if dir.join(REPOSITORY_MARKER).exists() {
            break;
        }
    }
    Vec::new()
}

fn project_file_names() -> impl Iterator<Item = String> {
    let dotfiles = EXTENSIONS.iter().map(|ext| format!(".{APP_NAME}.{ext}"));
    let regular = EXTENSIONS.iter().map(|ext| format!("{APP_NAME}.{ext}"));
    dotfiles.chain(regular)
}

fn merge_file(figment: Figment, path: &Utf8PathBuf) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}
