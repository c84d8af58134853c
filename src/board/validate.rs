use std::collections::{HashMap, HashSet};

use crate::models::Tag;

/// A tag set is valid when every name is non-blank and no two names collide
/// once trimmed and case-folded.
pub fn is_valid(tags: &[Tag]) -> bool {
    let mut seen = HashSet::new();
    tags.iter().all(|tag| {
        let key = tag.key();
        !key.is_empty() && seen.insert(key)
    })
}

/// Indices of every tag whose name collides with another entry in the set.
/// Blank names are not reported here; `is_valid` rejects them separately.
pub fn duplicate_positions(tags: &[Tag]) -> Vec<usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for tag in tags {
        let key = tag.key();
        if !key.is_empty() {
            *counts.entry(key).or_default() += 1;
        }
    }
    tags.iter()
        .enumerate()
        .filter(|(_, tag)| counts.get(&tag.key()).is_some_and(|&n| n > 1))
        .map(|(i, _)| i)
        .collect()
}
