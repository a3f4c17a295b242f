use anyhow::Context;
use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub activation: ActivationConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory the theme files are written under. Defaults to `$HOME`.
    pub home: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    /// Re-source the prompt script after writing it.
    pub enabled: bool,
    /// Shell used to source the prompt script.
    pub shell: String,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            shell: "bash".to_string(),
        }
    }
}

impl Config {
    /// Output paths under the configured home, or the user's own home.
    pub fn layout(&self) -> anyhow::Result<Layout> {
        match &self.paths.home {
            Some(p) => Ok(Layout::from_home(p)),
            None => {
                let base = BaseDirs::new().context("BaseDirs unavailable")?;
                Ok(Layout::user_home(base.home_dir()))
            }
        }
    }
}

pub const USER_SOURCE_DIRECTIVE: &str = "source ~/.bash_theme";

/// Fixed output locations, all relative to one home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub home: PathBuf,
    pub prompt_script: PathBuf,
    pub startup_file: PathBuf,
    pub color_rules: PathBuf,
    pub fastfetch_dir: PathBuf,
    pub fastfetch_config: PathBuf,
    /// Line in the startup file that loads `prompt_script`.
    pub source_directive: String,
}

impl Layout {
    /// Layout for an arbitrary directory; the startup hook names the prompt
    /// script by its absolute path.
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let prompt_script = home.join(".bash_theme");
        let source_directive = format!("source \"{}\"", prompt_script.display());
        Self::with_directive(home, prompt_script, source_directive)
    }

    /// Layout for the invoking user's `$HOME`, hooked as `source ~/.bash_theme`.
    pub fn user_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let prompt_script = home.join(".bash_theme");
        Self::with_directive(home, prompt_script, USER_SOURCE_DIRECTIVE.to_string())
    }

    fn with_directive(home: PathBuf, prompt_script: PathBuf, source_directive: String) -> Self {
        let fastfetch_dir = home.join(".config").join("fastfetch");
        Self {
            prompt_script,
            source_directive,
            startup_file: home.join(".bashrc"),
            color_rules: home.join(".dircolors"),
            fastfetch_config: fastfetch_dir.join("config.jsonc"),
            fastfetch_dir,
            home,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "shelltheme", "shelltheme")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Read the config file if there is one. A missing file means defaults and is
/// never created here.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) => p,
            Err(_) => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        if override_path.is_some() {
            anyhow::bail!("config file {} not found", path.display());
        }
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
