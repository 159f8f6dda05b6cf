use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ExpiryError;
use crate::priority::{BucketPolicy, PriorityClass};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_i64(profile: &str, key: &str, default: i64) -> i64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Expiration policies for both priority classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizerConfig {
    /// Active profile name (empty = default).
    #[serde(default)]
    pub profile: String,
    #[serde(default = "default_interactive")]
    pub interactive: BucketPolicy,
    #[serde(default = "default_async")]
    pub r#async: BucketPolicy,
}

fn default_interactive() -> BucketPolicy {
    PriorityClass::Interactive.policy()
}

fn default_async() -> BucketPolicy {
    PriorityClass::Async.policy()
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            profile: String::new(),
            interactive: default_interactive(),
            r#async: default_async(),
        }
    }
}

impl QuantizerConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `EXPIRY_PROFILE`. When set (e.g. `PROD`), every key
    /// is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_opt("EXPIRY_PROFILE").unwrap_or_default();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        let interactive = default_interactive();
        let background = default_async();
        Self {
            profile: p.to_string(),
            interactive: BucketPolicy {
                expiration_offset_ms: profiled_env_i64(
                    p,
                    "INTERACTIVE_EXPIRATION_MS",
                    interactive.expiration_offset_ms,
                ),
                bucket_size_ms: profiled_env_i64(
                    p,
                    "INTERACTIVE_BUCKET_MS",
                    interactive.bucket_size_ms,
                ),
            },
            r#async: BucketPolicy {
                expiration_offset_ms: profiled_env_i64(
                    p,
                    "ASYNC_EXPIRATION_MS",
                    background.expiration_offset_ms,
                ),
                bucket_size_ms: profiled_env_i64(p, "ASYNC_BUCKET_MS", background.bucket_size_ms),
            },
        }
    }

    pub fn policy(&self, class: PriorityClass) -> BucketPolicy {
        match class {
            PriorityClass::Interactive => self.interactive,
            PriorityClass::Async => self.r#async,
        }
    }

    pub fn validate(&self) -> Result<(), ExpiryError> {
        for class in PriorityClass::ALL {
            self.policy(class)
                .validate()
                .map_err(|e| ExpiryError::Config(format!("{class}: {e}")))?;
        }
        Ok(())
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    pub fn log_summary(&self) {
        tracing::info!("Quantizer config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  interactive: expiration={}ms, bucket={}ms",
            self.interactive.expiration_offset_ms,
            self.interactive.bucket_size_ms
        );
        tracing::info!(
            "  async:       expiration={}ms, bucket={}ms",
            self.r#async.expiration_offset_ms,
            self.r#async.bucket_size_ms
        );
    }
}
