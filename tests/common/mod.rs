#![allow(dead_code)]

use async_trait::async_trait;
use paapi::core::kernel::Transport;
use paapi::{ClientConfig, PaapiError};
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

/// Test configuration utilities
pub struct TestConfig;

impl TestConfig {
    /// Check if live API tests should run (requires real credentials)
    pub fn should_run_live_tests() -> bool {
        env::var("RUN_LIVE_TESTS").unwrap_or_default() == "true"
    }

    /// Get test timeout duration
    pub fn test_timeout_seconds() -> u64 {
        env::var("TEST_TIMEOUT_SECONDS")
            .unwrap_or_default()
            .parse()
            .unwrap_or(30)
    }

    /// Create safe test client config
    pub fn create_safe_config() -> ClientConfig {
        ClientConfig::new(
            "test-tag-20".to_string(),
            "test_access_key".to_string(),
            "test_secret_key".to_string(),
        )
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).unwrap_or_else(|e| panic!("fixture {}: {}", name, e))
}

/// Transport double serving one canned body and remembering every URL it was asked for
pub struct FixtureTransport {
    body: Vec<u8>,
    urls: Mutex<Vec<String>>,
}

impl FixtureTransport {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn from_fixture(name: &str) -> Self {
        Self::new(fixture(name))
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, PaapiError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}

/// Print test result with emoji
pub fn print_test_result(test_name: &str, success: bool, message: &str) {
    let emoji = if success { "✅" } else { "❌" };
    println!("{} {}: {}", emoji, test_name, message);
}
