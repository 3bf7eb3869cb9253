//! `git ls-remote` tag source

use std::process::Command;

use tracing::{debug, warn};

use crate::config::GitConfig;
use crate::version::error::TransportError;
use crate::version::source::{TagSource, parse_ls_remote};

/// Lists remote tags by running `git ls-remote --tags <url>`
///
/// The call blocks until git exits. No timeout is applied.
#[derive(Debug, Clone)]
pub struct GitTagSource {
    config: GitConfig,
}

impl GitTagSource {
    pub fn new(config: GitConfig) -> Self {
        Self { config }
    }
}

impl Default for GitTagSource {
    fn default() -> Self {
        Self::new(GitConfig::default())
    }
}

impl TagSource for GitTagSource {
    fn list_tags(&self, url: &str) -> Result<Vec<String>, TransportError> {
        let binary = &self.config.binary;
        debug!("Running {} ls-remote --tags {}", binary.display(), url);

        let output = Command::new(binary)
            .args(["ls-remote", "--tags", url])
            .output()
            .map_err(|source| TransportError::Spawn {
                binary: binary.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("git ls-remote {} exited with {}", url, output.status);
            return Err(TransportError::CommandFailed {
                url: url.to_string(),
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tags = parse_ls_remote(&stdout);
        debug!("Listed {} references from {}", tags.len(), url);

        Ok(tags)
    }
}
