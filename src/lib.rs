pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{CredentialStore, LocalStorage, ManagementApi};
pub use config::{Settings, DEFAULT_PROJECT_REF_PATH};
pub use crate::core::link::Linker;
pub use domain::model::{AccessToken, ProjectRef};
pub use utils::error::{LinkError, Result};
