//! Tag source test utilities

use std::sync::Mutex;

use latest_tag::version::{TagSource, TransportError};

/// Tag source that records the URLs it was asked for
pub struct RecordingSource {
    tags: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingSource {
    pub fn new(tags: Vec<&str>) -> Self {
        Self {
            tags: tags.into_iter().map(|t| t.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TagSource for RecordingSource {
    fn list_tags(&self, url: &str) -> Result<Vec<String>, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        Ok(self.tags.clone())
    }
}

/// `git ls-remote --tags` output for a repository with a handful of releases
pub const LS_REMOTE_OUTPUT: &str = "\
386f2a698332b61278883df6f97d79eb98fe3f29\trefs/tags/1.2.0
a839bf2d274aaecd509b51ec37cb51842d4de348\trefs/tags/1.10.0
a839bf2d274aaecd509b51ec37cb51842d4de348\trefs/tags/1.10.0^{}
0b1e5f0a2e3b8b7a2f4c6e1d9f8a7b6c5d4e3f21\trefs/tags/1.9.9
5d4e3f210b1e5f0a2e3b8b7a2f4c6e1d9f8a7b6c\trefs/tags/2.0.0-rc1
9f8a7b6c5d4e3f210b1e5f0a2e3b8b7a2f4c6e1d\trefs/tags/v3.0.0
";
