use crate::utils::error::LinkError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static PROJECT_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{20}$").expect("project ref pattern is valid"));

static ACCESS_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sbp_[a-f0-9]{40}$").expect("access token pattern is valid"));

/// Identifier of a hosted project, e.g. `abcdefghijklmnopqrst`.
///
/// Only constructible through parsing, so holding one means the format check passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRef(String);

impl ProjectRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectRef {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if PROJECT_REF_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(LinkError::InvalidProjectRef {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<&str> for ProjectRef {
    type Error = LinkError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Personal access token for the management API.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccessToken {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ACCESS_TOKEN_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(LinkError::InvalidAccessToken)
        }
    }
}

// Keeps the secret out of logs
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(sbp_****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TOKEN: &str = "sbp_0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn test_parse_project_ref() {
        let project: ProjectRef = "abcdefghijklmnopqrst".parse().unwrap();
        assert_eq!(project.as_str(), "abcdefghijklmnopqrst");
        assert_eq!(project.to_string(), "abcdefghijklmnopqrst");
    }

    #[test]
    fn test_reject_malformed_project_ref() {
        for raw in [
            "malformed",
            "",
            "abcdefghijklmnopqrstu",
            "ABCDEFGHIJKLMNOPQRST",
            "abcdefghij0123456789",
            " abcdefghijklmnopqrs",
            "abcdefghijklmnopqrst\n",
        ] {
            let err = ProjectRef::try_from(raw).unwrap_err();
            assert!(
                matches!(err, LinkError::InvalidProjectRef { .. }),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_parse_access_token() {
        let token: AccessToken = VALID_TOKEN.parse().unwrap();
        assert_eq!(token.expose(), VALID_TOKEN);

        assert!("sbp_123".parse::<AccessToken>().is_err());
        assert!("0123456789abcdef0123456789abcdef01234567"
            .parse::<AccessToken>()
            .is_err());
        assert!("sbp_0123456789ABCDEF0123456789abcdef01234567"
            .parse::<AccessToken>()
            .is_err());
    }

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token: AccessToken = VALID_TOKEN.parse().unwrap();
        let rendered = format!("{:?}", token);
        assert!(!rendered.contains("0123456789abcdef"));
    }
}
