//! Version ordering
//!
//! Components are compared most significant first. When one side runs out of
//! components it continues with zeros, so `1.2` compares like `1.2.0.0`
//! against `1.2.0.1`.

use std::cmp::Ordering;

use crate::version::value::Version;

/// Compare `a` relative to `b`.
///
/// The first differing component decides the result regardless of how many
/// components either side has left.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    compare_components(a.components(), b.components())
}

fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
