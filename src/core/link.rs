use crate::domain::model::ProjectRef;
use crate::domain::ports::{ProjectApi, Storage, TokenSource};
use crate::utils::error::{LinkError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Links a workspace to a hosted project.
///
/// `link` runs validate, load token, verify, then write. Each step must
/// succeed before the next starts, so a rejected ref or token never reaches
/// the network and a failed request never touches storage.
pub struct Linker<T: TokenSource, A: ProjectApi, S: Storage> {
    tokens: T,
    api: A,
    storage: S,
    ref_path: PathBuf,
}

impl<T: TokenSource, A: ProjectApi, S: Storage> Linker<T, A, S> {
    pub fn new(tokens: T, api: A, storage: S, ref_path: impl Into<PathBuf>) -> Self {
        Self {
            tokens,
            api,
            storage,
            ref_path: ref_path.into(),
        }
    }

    pub fn ref_path(&self) -> &Path {
        &self.ref_path
    }

    pub async fn link(&self, raw_ref: &str) -> Result<PathBuf> {
        let project: ProjectRef = raw_ref.parse()?;
        tracing::debug!("Project ref {} is well-formed", project);

        let token = self.tokens.load()?;

        tracing::info!("🔗 Verifying access to project {}", project);
        self.api.verify_project(&project, &token).await?;

        self.storage
            .write_file(&self.ref_path, project.as_str().as_bytes())
            .await?;
        tracing::info!("📁 Project ref saved to {}", self.ref_path.display());

        Ok(self.ref_path.clone())
    }

    pub async fn linked_project(&self) -> Result<ProjectRef> {
        let content = self
            .storage
            .read_file(&self.ref_path)
            .await
            .map_err(|e| self.not_linked_if_missing(e))?;

        let raw = String::from_utf8_lossy(&content);
        raw.trim().parse()
    }

    pub async fn unlink(&self) -> Result<ProjectRef> {
        let project = self.linked_project().await?;

        self.storage
            .remove_file(&self.ref_path)
            .await
            .map_err(|e| self.not_linked_if_missing(e))?;
        tracing::info!("Unlinked project {}", project);

        Ok(project)
    }

    fn not_linked_if_missing(&self, err: LinkError) -> LinkError {
        match err {
            LinkError::IoError(e) if e.kind() == ErrorKind::NotFound => LinkError::NotLinked {
                path: self.ref_path.display().to_string(),
            },
            other => other,
        }
    }
}
