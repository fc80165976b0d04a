use crate::domain::model::{AccessToken, ProjectRef};
use crate::domain::ports::ProjectApi;
use crate::utils::error::{LinkError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.supabase.io";

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin client for the hosted management API.
pub struct ManagementApi {
    client: Client,
    base_url: String,
}

impl ManagementApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("project-link/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn functions_url(&self, project: &ProjectRef) -> String {
        format!(
            "{}/v1/projects/{}/functions",
            self.base_url.trim_end_matches('/'),
            project
        )
    }
}

// The API wraps errors as {"message": ...}; anything else is passed through.
fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    }
}

#[async_trait]
impl ProjectApi for ManagementApi {
    async fn verify_project(&self, project: &ProjectRef, token: &AccessToken) -> Result<()> {
        let url = self.functions_url(project);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.expose())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(LinkError::UnexpectedStatus {
            status: status.as_u16(),
            body: error_message(body),
        })
    }
}
