//! Case-insensitive name matching between AI labels and stored records.

use super::store::NamedRecord;

/// Trim a suggested name, returning `None` when nothing is left.
pub fn clean_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

/// Case-folded key used for every name comparison.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Return the first candidate whose folded name equals the folded input.
pub fn resolve_by_name<'a, T: NamedRecord>(
    name: Option<&str>,
    candidates: &'a [T],
) -> Option<&'a T> {
    let wanted = fold_name(clean_name(name)?);
    candidates
        .iter()
        .find(|candidate| fold_name(candidate.name()) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DbId;

    struct Named(DbId, &'static str);

    impl NamedRecord for Named {
        fn id(&self) -> DbId {
            self.0
        }
        fn name(&self) -> &str {
            self.1
        }
    }

    fn candidates() -> Vec<Named> {
        vec![Named(1, "Work"), Named(2, "Học tập"), Named(3, "work")]
    }

    #[test]
    fn matches_ignoring_case() {
        let all = candidates();
        let hit = resolve_by_name(Some("WORK"), &all).unwrap();
        assert_eq!(hit.id(), 1, "first match in sequence order wins");
    }

    #[test]
    fn matches_vietnamese_case_folding() {
        let all = candidates();
        assert_eq!(resolve_by_name(Some("HỌC TẬP"), &all).unwrap().id(), 2);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let all = candidates();
        assert_eq!(resolve_by_name(Some("  work "), &all).unwrap().id(), 1);
    }

    #[test]
    fn blank_or_absent_name_resolves_to_nothing() {
        let all = candidates();
        assert!(resolve_by_name(None, &all).is_none());
        assert!(resolve_by_name(Some(""), &all).is_none());
        assert!(resolve_by_name(Some("   "), &all).is_none());
    }

    #[test]
    fn no_partial_matches() {
        let all = candidates();
        assert!(resolve_by_name(Some("Wor"), &all).is_none());
        assert!(resolve_by_name(Some("Homework"), &all).is_none());
    }
}
