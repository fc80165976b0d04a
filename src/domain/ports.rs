use crate::domain::model::{AccessToken, ProjectRef};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Writes `data` to `path`, creating missing parent directories.
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &Path) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait TokenSource: Send + Sync {
    fn load(&self) -> Result<AccessToken>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn access_token_env(&self) -> &str;
    fn project_ref_path(&self) -> &Path;
}

#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Succeeds only when the project answers with a 2xx status for this token.
    async fn verify_project(&self, project: &ProjectRef, token: &AccessToken) -> Result<()>;
}
