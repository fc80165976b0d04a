use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "project-link")]
#[command(version, about = "Link a local workspace to a hosted project")]
pub struct CliConfig {
    /// Optional TOML settings file
    #[arg(long, global = true, env = "PROJECT_LINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Workspace root the project ref is written under
    #[arg(long, global = true, default_value = ".")]
    pub workdir: PathBuf,

    /// Management API base URL
    #[arg(long, global = true, env = "PROJECT_LINK_API_URL")]
    pub api_url: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Link this workspace to a hosted project
    Link {
        /// Project ref of the hosted project, e.g. abcdefghijklmnopqrst
        #[arg(value_name = "PROJECT_REF")]
        project_ref: String,
    },
    /// Remove the local link
    Unlink,
    /// Show the linked project ref
    Status,
}

impl CliConfig {
    /// Defaults, then the settings file, then flags and environment.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading settings from {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(api_url) = &self.api_url {
            settings.api_url = api_url.clone();
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_link_command() {
        let cli = CliConfig::try_parse_from([
            "project-link",
            "link",
            "abcdefghijklmnopqrst",
            "--workdir",
            "/tmp/app",
        ])
        .unwrap();

        assert_eq!(cli.workdir, PathBuf::from("/tmp/app"));
        match cli.command {
            Command::Link { project_ref } => assert_eq!(project_ref, "abcdefghijklmnopqrst"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_link_requires_project_ref() {
        assert!(CliConfig::try_parse_from(["project-link", "link"]).is_err());
        assert!(CliConfig::try_parse_from([
            "project-link",
            "link",
            "abcdefghijklmnopqrst",
            "zyxwvutsrqponmlkjihg",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_link_with_global_flags_first() {
        let cli = CliConfig::try_parse_from([
            "project-link",
            "--api-url",
            "http://127.0.0.1:54321",
            "link",
            "abcdefghijklmnopqrst",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:54321"));
        assert!(matches!(
            cli.command,
            Command::Link { ref project_ref } if project_ref == "abcdefghijklmnopqrst"
        ));
    }

    #[test]
    fn test_parse_unlink_and_status() {
        let cli = CliConfig::try_parse_from(["project-link", "-v", "unlink"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Unlink));

        let cli = CliConfig::try_parse_from(["project-link", "status"]).unwrap();
        assert!(matches!(cli.command, Command::Status));
    }

    #[test]
    fn test_flag_overrides_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("link.toml");
        std::fs::write(
            &path,
            "[api]\nurl = \"http://from-file:1\"\naccess_token_env = \"FILE_TOKEN\"\n",
        )
        .unwrap();

        let cli = CliConfig::try_parse_from([
            "project-link",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://from-flag:2",
            "status",
        ])
        .unwrap();

        let settings = cli.settings().unwrap();
        assert_eq!(settings.api_url, "http://from-flag:2");
        assert_eq!(settings.access_token_env, "FILE_TOKEN");
    }
}
