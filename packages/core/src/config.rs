//! Server Configuration
//!
//! Process-wide configuration loaded once at startup from the environment.
//! Immutable for the process lifetime; handler logic receives it by
//! reference and never reads ambient process state.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default base URL of the Bika Open API.
pub const DEFAULT_BASE_URL: &str = "https://bika.ai/api/openapi/bika";

/// Default directory holding the markdown documentation served as resources.
pub const DEFAULT_DOCS_DIR: &str = "bika-docs";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required API token absent at startup
    #[error("BIKA_API_TOKEN environment variable is required")]
    MissingApiToken,

    /// A space id is required but neither the tool arguments nor the
    /// environment provide one
    #[error("No space ID provided and no default space is configured (set BIKA_SPACE_ID or pass spaceId)")]
    MissingSpaceId,
}

/// Bika API configuration
///
/// Constructed once from the environment and shared read-only across all
/// tool calls.
#[derive(Debug, Clone)]
pub struct BikaConfig {
    /// Bearer token sent on every outbound API call
    pub api_token: String,
    /// Base URL the request paths are appended to
    pub base_url: String,
    /// Space id used when a tool call omits `spaceId`
    pub default_space_id: Option<String>,
    /// Root directory of the markdown documentation resources
    pub docs_dir: PathBuf,
}

impl BikaConfig {
    /// Load configuration from the environment.
    ///
    /// `BIKA_API_TOKEN` is required; `BIKA_API_BASE_URL`, `BIKA_SPACE_ID`
    /// and `BIKA_DOCS_DIR` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = std::env::var("BIKA_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingApiToken)?;

        let base_url = std::env::var("BIKA_API_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let default_space_id = std::env::var("BIKA_SPACE_ID")
            .ok()
            .filter(|id| !id.is_empty());

        let docs_dir = std::env::var("BIKA_DOCS_DIR")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR));

        Ok(Self {
            api_token,
            base_url,
            default_space_id,
            docs_dir,
        })
    }

    /// Resolve the effective space id for a tool call.
    ///
    /// An explicit argument wins over the configured default. With neither,
    /// resolution fails before any request is built.
    pub fn resolve_space_id(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        if let Some(space_id) = explicit.filter(|id| !id.is_empty()) {
            return Ok(space_id.to_string());
        }
        self.default_space_id
            .clone()
            .ok_or(ConfigError::MissingSpaceId)
    }
}

/// Load `KEY=value` pairs from a `.env` file into the process environment.
///
/// Values already present in the environment win. The file is optional;
/// empty lines and `#` comments are skipped. Nothing is ever written to
/// stdout — stdout carries the JSON-RPC stream.
pub fn load_dotenv(path: &Path) {
    let Ok(content) = std::fs::read_to_string(path) else {
        return;
    };

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if !key.is_empty() && std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_with_default_space(default_space_id: Option<&str>) -> BikaConfig {
        BikaConfig {
            api_token: "test-token".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_space_id: default_space_id.map(String::from),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
        }
    }

    #[test]
    fn test_explicit_space_id_wins_over_default() {
        let config = config_with_default_space(Some("spc_default"));
        let resolved = config.resolve_space_id(Some("spc_explicit")).unwrap();
        assert_eq!(resolved, "spc_explicit");
    }

    #[test]
    fn test_missing_space_id_falls_back_to_default() {
        let config = config_with_default_space(Some("spc_default"));
        let resolved = config.resolve_space_id(None).unwrap();
        assert_eq!(resolved, "spc_default");
    }

    #[test]
    fn test_missing_space_id_without_default_fails() {
        let config = config_with_default_space(None);
        let result = config.resolve_space_id(None);
        assert!(matches!(result, Err(ConfigError::MissingSpaceId)));
    }

    #[test]
    fn test_empty_explicit_space_id_falls_back_to_default() {
        let config = config_with_default_space(Some("spc_default"));
        let resolved = config.resolve_space_id(Some("")).unwrap();
        assert_eq!(resolved, "spc_default");
    }

    #[test]
    fn test_load_dotenv_sets_missing_keys_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment line").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "BIKA_TEST_DOTENV_A=from_file").unwrap();
        writeln!(file, "BIKA_TEST_DOTENV_B = padded ").unwrap();
        writeln!(file, "not a key value pair").unwrap();
        file.flush().unwrap();

        std::env::set_var("BIKA_TEST_DOTENV_A", "from_env");
        load_dotenv(file.path());

        // Existing environment value wins
        assert_eq!(std::env::var("BIKA_TEST_DOTENV_A").unwrap(), "from_env");
        // Missing key is filled in, whitespace trimmed
        assert_eq!(std::env::var("BIKA_TEST_DOTENV_B").unwrap(), "padded");

        std::env::remove_var("BIKA_TEST_DOTENV_A");
        std::env::remove_var("BIKA_TEST_DOTENV_B");
    }

    #[test]
    fn test_load_dotenv_missing_file_is_noop() {
        load_dotenv(Path::new("/nonexistent/.env"));
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::MissingApiToken.to_string(),
            "BIKA_API_TOKEN environment variable is required"
        );
        assert!(ConfigError::MissingSpaceId.to_string().contains("BIKA_SPACE_ID"));
    }
}
