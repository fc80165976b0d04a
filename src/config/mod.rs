#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::credentials::DEFAULT_ACCESS_TOKEN_ENV;
use crate::adapters::http::DEFAULT_API_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_api_url, validate_env_var_name, validate_path, Validate};
use std::path::{Path, PathBuf};

/// Location of the linked project ref, relative to the workspace root.
pub const DEFAULT_PROJECT_REF_PATH: &str = "supabase/.temp/project-ref";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub access_token_env: String,
    pub project_ref_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token_env: DEFAULT_ACCESS_TOKEN_ENV.to_string(),
            project_ref_path: PathBuf::from(DEFAULT_PROJECT_REF_PATH),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn access_token_env(&self) -> &str {
        &self.access_token_env
    }

    fn project_ref_path(&self) -> &Path {
        &self.project_ref_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_api_url("api.url", &self.api_url)?;
        validate_env_var_name("api.access_token_env", &self.access_token_env)?;
        validate_path("project.ref_path", &self.project_ref_path.to_string_lossy())?;
        Ok(())
    }
}
