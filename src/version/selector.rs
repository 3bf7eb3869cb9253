//! Latest version selection
//!
//! Reduces a list of version literals, or the tags of a repository, to the
//! single greatest version.

use tracing::{debug, info};

use crate::version::error::{LatestError, SelectionError};
use crate::version::matcher::TagMatcher;
use crate::version::source::TagSource;
use crate::version::value::Version;

/// Return the greatest version, keeping the first one among equals.
pub fn latest_version(versions: &[Version]) -> Option<&Version> {
    let (first, rest) = versions.split_first()?;
    Some(rest.iter().fold(first, |max, v| if v > max { v } else { max }))
}

/// Select the greatest version from a list of literals.
///
/// Returns `Ok(None)` for an empty list. Fails on the first literal that is
/// not a valid version.
pub fn select_latest<S: AsRef<str>>(literals: &[S]) -> Result<Option<String>, SelectionError> {
    let versions = literals
        .iter()
        .map(|literal| {
            let literal = literal.as_ref();
            Version::parse(literal).map_err(|source| SelectionError::InvalidVersion {
                literal: literal.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(latest_version(&versions).map(ToString::to_string))
}

/// Select the latest version tagged in a repository.
///
/// Lists the references of `url`, keeps those made of `prefix` followed by a
/// version, and returns the greatest version with the prefix stripped.
/// Returns `Ok(None)` when no tag matches.
pub fn select_latest_from_tags<T: TagSource + ?Sized>(
    source: &T,
    url: &str,
    prefix: &str,
) -> Result<Option<String>, LatestError> {
    let matcher = TagMatcher::new(prefix)?;
    let tags = source.list_tags(url)?;
    debug!("Fetched {} references from {}", tags.len(), url);

    let versions = matcher.filter_and_strip(&tags);
    let latest = select_latest(&versions)?;

    match &latest {
        Some(version) => info!("Latest version of {} is {}", url, version),
        None => info!("No tag of {} matches prefix '{}'", url, prefix),
    }

    Ok(latest)
}

/// A tag source paired with the prefix its release tags carry
pub struct LatestSelector {
    source: Box<dyn TagSource>,
    prefix: String,
}

impl LatestSelector {
    pub fn new(source: Box<dyn TagSource>, prefix: &str) -> Self {
        Self {
            source,
            prefix: prefix.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn latest(&self, url: &str) -> Result<Option<String>, LatestError> {
        select_latest_from_tags(self.source.as_ref(), url, &self.prefix)
    }
}
