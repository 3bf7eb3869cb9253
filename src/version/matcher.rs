//! Tag filtering by `<prefix><version>` pattern

use regex::Regex;
use tracing::debug;

use crate::version::error::MatchError;
use crate::version::value::VERSION_PATTERN;

/// Matches reference names of the form `<prefix><dotted version>`
///
/// The prefix is spliced into the regular expression as-is, so characters
/// such as `.` or `+` keep their regex meaning. Escape them with
/// [`regex::escape`] when an exact match is needed.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    prefix: String,
    pattern: Regex,
}

impl TagMatcher {
    pub fn new(prefix: &str) -> Result<Self, MatchError> {
        let pattern = Regex::new(&format!("^{prefix}{VERSION_PATTERN}$")).map_err(|source| {
            MatchError::InvalidPrefix {
                prefix: prefix.to_string(),
                source,
            }
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// Returns true if `tag` is the prefix followed by a version
    pub fn is_match(&self, tag: &str) -> bool {
        self.pattern.is_match(tag)
    }

    /// Keep the matching tags and strip the prefix from each.
    ///
    /// Input order is preserved. Non-matching tags are dropped.
    pub fn filter_and_strip<S: AsRef<str>>(&self, tags: &[S]) -> Vec<String> {
        let versions: Vec<String> = tags
            .iter()
            .map(|tag| tag.as_ref())
            .filter(|tag| self.is_match(tag))
            .filter_map(|tag| tag.get(self.prefix.len()..))
            .map(str::to_string)
            .collect();

        debug!(
            "{} of {} tags match prefix '{}'",
            versions.len(),
            tags.len(),
            self.prefix
        );

        versions
    }
}

/// Shorthand for `TagMatcher::new(prefix)?.filter_and_strip(tags)`
pub fn filter_and_strip<S: AsRef<str>>(
    tags: &[S],
    prefix: &str,
) -> Result<Vec<String>, MatchError> {
    Ok(TagMatcher::new(prefix)?.filter_and_strip(tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn filter_and_strip_keeps_matching_tags_in_order() {
        let tags = ["refs/tags/test01", "refs/tags/test02", "refs/heads/master"];

        let result = filter_and_strip(&tags, "refs/tags/test").unwrap();

        assert_eq!(result, vec!["01".to_string(), "02".to_string()]);
    }

    #[rstest]
    #[case(
        &["refs/tags/go1.21.0", "refs/tags/go1.21rc2", "refs/tags/go1.9"],
        "refs/tags/go",
        &["1.21.0", "1.9"]
    )]
    #[case(&["refs/tags/1.0", "refs/tags/1.0^{}", "refs/tags/v2.0"], "refs/tags/", &["1.0"])]
    #[case(&["1.2.3", "refs/tags/1.2.4"], "", &["1.2.3"])]
    #[case(&["refs/tags/1.0"], "notExistent", &[])]
    #[case(&[], "refs/tags/", &[])]
    #[case(
        &["refs/tags/1.2.3", "refs/tags/١.٢", "refs/tags/１.２"],
        "refs/tags/",
        &["1.2.3"]
    )]
    fn filter_and_strip_returns_expected(
        #[case] tags: &[&str],
        #[case] prefix: &str,
        #[case] expected: &[&str],
    ) {
        let result = filter_and_strip(tags, prefix).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn prefix_is_interpreted_as_pattern() {
        let matcher = TagMatcher::new("refs/tags/v.").unwrap();

        // "." in the prefix matches any character
        assert!(matcher.is_match("refs/tags/vX1.0"));
        assert_eq!(matcher.filter_and_strip(&["refs/tags/vX1.0"]), vec!["1.0"]);
    }

    #[rstest]
    #[case("refs/tags/١.٢")]
    #[case("refs/tags/１.２")]
    #[case("refs/tags/1.٣")]
    fn is_match_rejects_non_ascii_digits(#[case] tag: &str) {
        let matcher = TagMatcher::new("refs/tags/").unwrap();

        assert!(!matcher.is_match(tag));
    }

    #[test]
    fn escaped_prefix_matches_literally() {
        let matcher = TagMatcher::new(&regex::escape("refs/tags/v.")).unwrap();

        assert!(!matcher.is_match("refs/tags/vX1.0"));
    }

    #[test]
    fn new_rejects_invalid_prefix_pattern() {
        let result = TagMatcher::new("refs/tags/(");
        assert!(matches!(
            result,
            Err(MatchError::InvalidPrefix { ref prefix, .. }) if prefix == "refs/tags/("
        ));
    }
}
