use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_BINARY: &str = "serviceman";
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://rootprojects.org/serviceman/dist/{{ .Platform }}/{{ .Arch }}/serviceman{{ .Ext }}";
pub const DEFAULT_ISSUES_URL: &str = "https://git.rootprojects.org/root/serviceman/issues";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub binary: String,
    pub target_version: String,
    pub url_template: String,
    pub install_dirs: Vec<PathBuf>,
    pub issues_url: String,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub binary: Option<String>,
    pub target_version: Option<String>,
    pub url_template: Option<String>,
    pub install_dirs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            target_version: env!("CARGO_PKG_VERSION").to_string(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            install_dirs: default_install_dirs(),
            issues_url: DEFAULT_ISSUES_URL.to_string(),
        }
    }
}

impl Config {
    pub fn merge_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(binary) = overrides.binary {
            self.binary = binary;
        }
        if let Some(version) = overrides.target_version {
            self.target_version = version;
        }
        if let Some(template) = overrides.url_template {
            self.url_template = template;
        }
        if !overrides.install_dirs.is_empty() {
            self.install_dirs = overrides.install_dirs;
        }
        self
    }
}

/// `/usr/local/bin` (not on Windows), then the user's `~/.local/bin`, which
/// stays writable when the system directory isn't.
pub fn default_install_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if !cfg!(target_os = "windows") {
        dirs.push(PathBuf::from("/usr/local/bin"));
    }

    if let Some(base) = BaseDirs::new() {
        dirs.push(base.home_dir().join(".local").join("bin"));
    }

    dirs
}

pub fn config_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("org", "rootprojects", "bin-fetch")
        .context("Failed to determine project directories")?;

    Ok(project_dirs.config_dir().join("config.json"))
}

pub fn load_config() -> Result<Config> {
    let config_path = config_path()?;

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "binary": "foo" }"#).unwrap();
        assert_eq!(config.binary, "foo");
        assert_eq!(config.target_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.url_template, DEFAULT_URL_TEMPLATE);
        assert_eq!(config.install_dirs, default_install_dirs());
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = Config::default().merge_overrides(Overrides {
            binary: None,
            target_version: Some("1.2.3".to_string()),
            url_template: Some("https://example.com/{{ .Version }}".to_string()),
            install_dirs: vec![PathBuf::from("/opt/bin")],
        });

        assert_eq!(config.binary, DEFAULT_BINARY);
        assert_eq!(config.target_version, "1.2.3");
        assert_eq!(config.url_template, "https://example.com/{{ .Version }}");
        assert_eq!(config.install_dirs, vec![PathBuf::from("/opt/bin")]);
    }

    #[test]
    fn empty_dir_override_keeps_configured_dirs() {
        let config = Config {
            install_dirs: vec![PathBuf::from("/a"), PathBuf::from("/b")],
            ..Config::default()
        }
        .merge_overrides(Overrides::default());

        assert_eq!(config.install_dirs.len(), 2);
    }
}
