use crate::config::Settings;
use crate::utils::error::{LinkError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Optional settings file. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub project: Option<ProjectConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub url: Option<String>,
    pub access_token_env: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub ref_path: Option<PathBuf>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LinkError::ConfigError {
            message: format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LinkError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` placeholders. Unset variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Overlays the keys present in this file onto `settings`.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(api) = &self.api {
            if let Some(url) = &api.url {
                settings.api_url = url.clone();
            }
            if let Some(env_var) = &api.access_token_env {
                settings.access_token_env = env_var.clone();
            }
        }
        if let Some(ref_path) = self.project.as_ref().and_then(|p| p.ref_path.as_ref()) {
            settings.project_ref_path = ref_path.clone();
        }
    }
}
