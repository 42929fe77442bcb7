//! First-occurrence deduplication.

use rustc_hash::FxHashSet;

/// Drop repeated names, keeping each at the position it first appeared.
///
/// Comparison is exact and case-sensitive: `"RX"` and `"rx"` both survive.
pub fn dedup_first_seen<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut seen = FxHashSet::default();
    let mut unique = Vec::new();
    for name in names {
        let name = name.into();
        if !seen.contains(&name) {
            seen.insert(name.clone());
            unique.push(name);
        }
    }
    unique
}
