//! Text utilities for index ordering.
//!
//! Index listings must come out identically from run to run regardless of
//! scan order, so every sorted list in this crate goes through one
//! comparator. Names are compared case-insensitively first, with the raw
//! strings as a tie-break so distinct names never compare equal.

use std::cmp::Ordering;

/// Compare two names for index ordering.
///
/// Lowercased comparison first, raw comparison second. Total and
/// deterministic, independent of the process locale.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    folded.then_with(|| a.cmp(b))
}

/// Compare two optional class scopes; the global scope (`None`) orders
/// before every named class.
pub fn compare_scopes(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_names(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_primary_order() {
        assert_eq!(compare_names("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_names("Gamma", "beta"), Ordering::Greater);
        assert_eq!(compare_names("delta", "delta"), Ordering::Equal);
    }

    #[test]
    fn raw_tiebreak_keeps_distinct_names_distinct() {
        // Same lowercased form, stable raw order.
        assert_eq!(compare_names("Widget", "widget"), Ordering::Less);
        assert_eq!(compare_names("widget", "Widget"), Ordering::Greater);
    }

    #[test]
    fn ordering_is_total_over_mixed_names() {
        let mut names = vec!["zlib.h", "Alpha.c", "alpha.c", "beta.c", "ALPHA.C"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["ALPHA.C", "Alpha.c", "alpha.c", "beta.c", "zlib.h"]);
    }

    #[test]
    fn global_scope_sorts_first() {
        assert_eq!(compare_scopes(None, Some("Widget")), Ordering::Less);
        assert_eq!(compare_scopes(Some("Widget"), None), Ordering::Greater);
        assert_eq!(compare_scopes(None, None), Ordering::Equal);
        assert_eq!(compare_scopes(Some("Gadget"), Some("Widget")), Ordering::Less);
    }
}
