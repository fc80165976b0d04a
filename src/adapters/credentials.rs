use crate::domain::model::AccessToken;
use crate::domain::ports::TokenSource;
use crate::utils::error::{LinkError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "SUPABASE_ACCESS_TOKEN";

/// Looks for a token in the environment first, then in the token file
/// written by a previous login.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    env_var: String,
    env_value: Option<String>,
    token_file: Option<PathBuf>,
}

impl CredentialStore {
    pub fn new(
        env_var: impl Into<String>,
        env_value: Option<String>,
        token_file: Option<PathBuf>,
    ) -> Self {
        Self {
            env_var: env_var.into(),
            env_value: env_value.filter(|v| !v.is_empty()),
            token_file,
        }
    }

    /// Snapshot of the process environment and the default token file.
    pub fn from_env(env_var: &str) -> Self {
        Self::new(env_var, std::env::var(env_var).ok(), Self::default_token_file())
    }

    /// `~/.supabase/access-token`
    pub fn default_token_file() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".supabase").join("access-token"))
    }

    fn read_token_file(&self) -> Result<Option<String>> {
        let Some(path) = &self.token_file else {
            return Ok(None);
        };

        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!("Using access token from {}", path.display());
                Ok(Some(content.trim().to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(LinkError::UnreadableAccessToken {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}

impl TokenSource for CredentialStore {
    fn load(&self) -> Result<AccessToken> {
        if let Some(value) = &self.env_value {
            tracing::debug!("Using access token from {}", self.env_var);
            return value.parse();
        }

        match self.read_token_file()? {
            Some(value) if !value.is_empty() => value.parse(),
            _ => Err(LinkError::MissingAccessToken {
                env_var: self.env_var.clone(),
            }),
        }
    }
}
