//! Dotted-numeric version values
//!
//! Only "stable" versions are recognized: one or more non-negative integers
//! separated by dots (`1`, `1.0`, `3.4.5.0`). Anything carrying letters,
//! pre-release or build suffixes is rejected.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::compare::compare;
use crate::version::error::ParseError;

/// Pattern matched by a version literal (without anchors)
///
/// ASCII digits only.
pub const VERSION_PATTERN: &str = r"([0-9]+\.)*([0-9]+)";

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{VERSION_PATTERN}$")).unwrap());

/// A parsed version such as `1.24.3`
///
/// Equality and ordering treat missing trailing components as zero, so
/// `"1"` and `"1.0.0"` are equal values while keeping their own literals.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
    literal: String,
}

impl Version {
    /// Parse a dotted-numeric version literal.
    ///
    /// Valid literals are e.g. `"0"`, `"1.0"` or `"3.4.5.0"`. Each component
    /// must fit in an `i64`; larger values fail with
    /// [`ParseError::InvalidComponent`] even though they would fit in `u64`.
    pub fn parse(literal: &str) -> Result<Self, ParseError> {
        if literal.is_empty() {
            return Err(ParseError::Empty);
        }

        if !VERSION_RE.is_match(literal) {
            return Err(ParseError::InvalidFormat(literal.to_string()));
        }

        let components = literal
            .split('.')
            .map(parse_component)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            components,
            literal: literal.to_string(),
        })
    }

    /// Integer components, most significant first
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The literal this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

fn parse_component(component: &str) -> Result<u64, ParseError> {
    let value: i64 = component
        .parse()
        .map_err(|source| ParseError::InvalidComponent {
            component: component.to_string(),
            source,
        })?;
    non_negative(value)
}

fn non_negative(value: i64) -> Result<u64, ParseError> {
    u64::try_from(value).map_err(|_| ParseError::NegativeComponent(value))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
