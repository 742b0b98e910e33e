use crate::core::types::Marketplace;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub associate_tag: String,
    pub access_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub marketplace: Marketplace,
    /// When set, every raw response body is also written into this directory.
    pub response_dir: Option<PathBuf>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ClientConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ClientConfig", 5)?;
        state.serialize_field("associate_tag", &self.associate_tag)?;
        state.serialize_field("access_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("marketplace", &self.marketplace)?;
        state.serialize_field("response_dir", &self.response_dir)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ClientConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ClientConfigHelper {
            associate_tag: String,
            access_key: String,
            secret_key: String,
            #[serde(default)]
            marketplace: Marketplace,
            response_dir: Option<PathBuf>,
        }

        let helper = ClientConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            associate_tag: helper.associate_tag,
            access_key: Secret::new(helper.access_key),
            secret_key: Secret::new(helper.secret_key),
            marketplace: helper.marketplace,
            response_dir: helper.response_dir,
        })
    }
}

impl ClientConfig {
    /// Create a new configuration for the default (US) marketplace
    #[must_use]
    pub fn new(associate_tag: String, access_key: String, secret_key: String) -> Self {
        Self {
            associate_tag,
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
            marketplace: Marketplace::default(),
            response_dir: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_ASSOCIATE_TAG`
    /// - `{PREFIX}_ACCESS_KEY`
    /// - `{PREFIX}_SECRET_KEY`
    /// - `{PREFIX}_MARKETPLACE` (optional locale code, defaults to `us`)
    /// - `{PREFIX}_RESPONSE_DIR` (optional, enables raw response persistence)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let associate_tag = required_var(&format!("{}_ASSOCIATE_TAG", prefix))?;
        let access_key = required_var(&format!("{}_ACCESS_KEY", prefix))?;
        let secret_key = required_var(&format!("{}_SECRET_KEY", prefix))?;

        let marketplace = match env::var(format!("{}_MARKETPLACE", prefix)) {
            Ok(code) => code
                .parse::<Marketplace>()
                .map_err(|e| ConfigError::InvalidConfiguration(e.to_string()))?,
            Err(_) => Marketplace::default(),
        };

        let response_dir = env::var(format!("{}_RESPONSE_DIR", prefix))
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            associate_tag,
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
            marketplace,
            response_dir,
        })
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// A missing .env file is not an error; the process environment is used as is.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Check that every credential needed for signing is present
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.associate_tag.is_empty()
            && !self.access_key.expose_secret().is_empty()
            && !self.secret_key.expose_secret().is_empty()
    }

    /// Set the marketplace
    #[must_use]
    pub const fn marketplace(mut self, marketplace: Marketplace) -> Self {
        self.marketplace = marketplace;
        self
    }

    /// Persist raw responses into `dir`
    #[must_use]
    pub fn response_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.response_dir = Some(dir.into());
        self
    }

    /// Endpoint host of the configured marketplace
    pub const fn host(&self) -> &'static str {
        self.marketplace.host()
    }

    /// Get access key (use carefully - exposes secret)
    pub fn access_key(&self) -> &str {
        self.access_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnvironmentVariable(name.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_redacts_secrets() {
        let config = ClientConfig::new(
            "tag-20".to_string(),
            "AKIDEXAMPLE".to_string(),
            "very-secret".to_string(),
        )
        .marketplace(Marketplace::De);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("[REDACTED]"));
        assert!(json.contains("\"marketplace\":\"de\""));
        assert!(!json.contains("AKIDEXAMPLE"));
        assert!(!json.contains("very-secret"));
    }

    #[test]
    fn test_deserialize_defaults_marketplace() {
        let json = r#"{"associate_tag":"tag-20","access_key":"a","secret_key":"s"}"#;
        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.marketplace, Marketplace::Us);
        assert_eq!(config.host(), "webservices.amazon.com");
        assert_eq!(config.secret_key(), "s");
        assert!(config.response_dir.is_none());
        assert!(config.has_credentials());
    }

    #[test]
    fn test_from_env() {
        env::set_var("PAAPITEST_ASSOCIATE_TAG", "tag-20");
        env::set_var("PAAPITEST_ACCESS_KEY", "access");
        env::set_var("PAAPITEST_SECRET_KEY", "secret");
        env::set_var("PAAPITEST_MARKETPLACE", "jp");

        let config = ClientConfig::from_env("paapitest").unwrap();
        assert_eq!(config.associate_tag, "tag-20");
        assert_eq!(config.access_key(), "access");
        assert_eq!(config.marketplace, Marketplace::Jp);
    }

    #[test]
    fn test_from_env_missing_variable() {
        let err = ClientConfig::from_env("PAAPI_MISSING_PREFIX").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvironmentVariable(name) if name == "PAAPI_MISSING_PREFIX_ASSOCIATE_TAG"));
    }
}
