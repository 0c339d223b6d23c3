//! Path normalization and exclusion matching.
//!
//! # Responsibilities
//! - Canonicalize a path into an absolute, slash-prefixed form
//! - Remove regex anchor artifacts from composed patterns
//! - Match paths against exclusion prefixes
//!
//! # Design Decisions
//! - Only leading slashes are touched; internal and trailing slashes are kept verbatim
//! - Exclusion is a plain string-prefix match, NOT segment-aware:
//!   the prefix `/ab` also excludes `/abc`. Existing exclusion lists rely on this,
//!   so it is kept as a known looseness.

/// Strip all leading slashes and prepend exactly one.
///
/// Idempotent: `normalize(&normalize(p)) == normalize(p)`.
pub fn normalize(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Remove every `^` anchor from a composed pattern, wherever it occurs.
///
/// `$` is left alone.
pub fn strip_anchors(raw: &str) -> String {
    raw.replace('^', "")
}

/// Returns true if `path` starts with any of the exclusion prefixes
/// once both sides are normalized.
pub fn is_excluded<S: AsRef<str>>(path: &str, prefixes: &[S]) -> bool {
    if prefixes.is_empty() {
        return false;
    }

    let path = normalize(path);
    prefixes
        .iter()
        .any(|prefix| path.starts_with(&normalize(prefix.as_ref())))
}
