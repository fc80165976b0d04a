use crate::utils::error::{LinkError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> LinkError {
    LinkError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// API base URLs must be absolute http(s) URLs with a host.
pub fn validate_api_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| invalid(field, value, format!("invalid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            value,
            format!("unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field, value, "URL has no host"));
    }
    Ok(())
}

pub fn validate_path(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field, value, "path cannot be empty"));
    }
    if value.contains('\0') {
        return Err(invalid(field, value, "path contains null bytes"));
    }
    Ok(())
}

/// Environment variable names cannot be blank or contain `=` or NUL.
pub fn validate_env_var_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "name cannot be empty"));
    }
    if value.contains(['=', '\0']) {
        return Err(invalid(field, value, "name cannot contain '=' or null bytes"));
    }
    Ok(())
}
