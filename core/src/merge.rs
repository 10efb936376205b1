//! Header map merging under a conflict policy.
//!
//! # Design
//! `combine` is a pure function: it builds a fresh map and never touches its
//! inputs. A key whose existing value is the empty string counts as absent,
//! so the incoming value always lands there regardless of the strategy.

use crate::http::Headers;

/// How to resolve a key present in both maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// The incoming value wins.
    #[default]
    Replace,
    /// Both values are kept as the literal text `["old","new"]`.
    Append,
    /// The existing value is kept.
    Skip,
}

/// Combine `a` and `b` into a new map, resolving collisions with `strategy`.
///
/// `None` on either side behaves like an empty map.
pub fn combine(a: Option<&Headers>, b: Option<&Headers>, strategy: MergeStrategy) -> Headers {
    let a_len = a.map_or(0, |m| m.len());
    let b_len = b.map_or(0, |m| m.len());
    let mut res = Headers::with_capacity(a_len + b_len);
    if let Some(a) = a {
        res.extend(a.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    let Some(b) = b else {
        return res;
    };
    for (key, value) in b {
        let merged = match res.get(key) {
            Some(existing) if !existing.is_empty() => match strategy {
                MergeStrategy::Replace => value.clone(),
                MergeStrategy::Append => append_literal(existing, value),
                MergeStrategy::Skip => continue,
            },
            _ => value.clone(),
        };
        res.insert(key.clone(), merged);
    }
    res
}

fn append_literal(old: &str, new: &str) -> String {
    format!(r#"["{old}","{new}"]"#)
}
