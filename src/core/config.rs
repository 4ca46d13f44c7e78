//! Configuration for image metadata resolution
//!
//! The resolvers read their behaviour from a single [`ResolverConfig`], which
//! can be used as-is via `Default` or tuned with the `with_*` builders.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::constants::{DEFAULT_USER_AGENT, MAX_REMOTE_BYTES};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Directory that relative file locators are resolved against.
    /// `None` uses the process working directory.
    pub base_dir: Option<PathBuf>,
    /// Whether `http://` and `https://` locators may be fetched at all.
    pub allow_remote: bool,
    /// User agent for remote fetches.
    pub user_agent: String,
    /// Request timeout for remote fetches; `None` keeps the client default.
    pub timeout: Option<Duration>,
    /// Bytes of a remote body read before probing; the rest is discarded.
    pub max_remote_bytes: u64,
    /// Whether remote fetches honour the `HTTP_PROXY` family of variables.
    pub use_system_proxy: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            allow_remote: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            max_remote_bytes: MAX_REMOTE_BYTES,
            use_system_proxy: true,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that never touches the network.
    pub fn local_only() -> Self {
        Self {
            allow_remote: false,
            ..Self::default()
        }
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn with_remote(mut self, allow: bool) -> Self {
        self.allow_remote = allow;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_remote_bytes(mut self, max: u64) -> Self {
        self.max_remote_bytes = max;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.use_system_proxy = enabled;
        self
    }

    /// Resolves a local locator against `base_dir`. Absolute paths are kept.
    pub fn local_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
