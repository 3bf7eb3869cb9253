//! Tag source trait for listing the references of a repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::TransportError;

/// Trait for listing the reference names of a remote repository
#[cfg_attr(test, automock)]
pub trait TagSource: Send + Sync {
    /// Lists the reference names (e.g. `refs/tags/1.2.3`) of a repository
    ///
    /// # Arguments
    /// * `url` - Repository URL as understood by the source
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Reference names in the order the source reported them
    /// * `Err(TransportError)` - If the listing fails
    fn list_tags(&self, url: &str) -> Result<Vec<String>, TransportError>;
}

/// Extract reference names from `git ls-remote` output.
///
/// Each line has the form `<commit-id>\t<reference-name>`. Lines that do not
/// consist of exactly two tab-separated fields are ignored.
pub fn parse_ls_remote(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(_commit), Some(reference), None) => Some(reference.to_string()),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_ls_remote_returns_reference_names() {
        let output = "386f2a698332b61278883df6f97d79eb98fe3f29\trefs/heads/master\n\
                      a839bf2d274aaecd509b51ec37cb51842d4de348\trefs/tags/test01\n\
                      a839bf2d274aaecd509b51ec37cb51842d4de348\trefs/tags/test02\n\
                      386f2a698332b61278883df6f97d79eb98fe3f29\t1.2.3\n";

        assert_eq!(
            parse_ls_remote(output),
            vec![
                "refs/heads/master",
                "refs/tags/test01",
                "refs/tags/test02",
                "1.2.3"
            ]
        );
    }

    #[rstest]
    #[case("")]
    #[case("\n\n")]
    #[case("no tab here")]
    #[case("a\tb\tc")]
    fn parse_ls_remote_drops_malformed_lines(#[case] output: &str) {
        assert!(parse_ls_remote(output).is_empty());
    }

    #[test]
    fn parse_ls_remote_keeps_garbage_with_single_tab() {
        let output = "fückedUp\tbytes\nall overtheplace\t∆å…¡æ";

        assert_eq!(parse_ls_remote(output), vec!["bytes", "∆å…¡æ"]);
    }

    #[test]
    fn parse_ls_remote_handles_crlf_line_endings() {
        let output = "abc\trefs/tags/1.0\r\ndef\trefs/tags/1.1\r\n";

        assert_eq!(
            parse_ls_remote(output),
            vec!["refs/tags/1.0", "refs/tags/1.1"]
        );
    }
}
