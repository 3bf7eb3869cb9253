//! In-memory tag source
//!
//! Serves a fixed list of references for every URL, e.g. `git ls-remote`
//! output saved to a file earlier.

use std::io::Read;
use std::path::Path;

use crate::version::error::TransportError;
use crate::version::source::{TagSource, parse_ls_remote};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedTagSource {
    tags: Vec<String>,
}

impl FixedTagSource {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    /// Build from `git ls-remote` output text
    pub fn from_ls_remote(output: &str) -> Self {
        Self::new(parse_ls_remote(output))
    }

    /// Read `git ls-remote` output from a file
    pub fn from_file(path: &Path) -> Result<Self, TransportError> {
        let output = std::fs::read(path)?;
        Ok(Self::from_ls_remote(&String::from_utf8_lossy(&output)))
    }

    /// Read `git ls-remote` output from any reader (e.g. stdin)
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, TransportError> {
        let mut output = Vec::new();
        reader.read_to_end(&mut output)?;
        Ok(Self::from_ls_remote(&String::from_utf8_lossy(&output)))
    }
}

impl TagSource for FixedTagSource {
    fn list_tags(&self, _url: &str) -> Result<Vec<String>, TransportError> {
        Ok(self.tags.clone())
    }
}
