use std::collections::HashSet;
use std::hash::Hash;

const DUNDER: &str = "__";
const LIST_SEPARATOR: char = ';';

/// Names wrapped in double underscores on both sides (`__init__`, `__eq__`).
pub fn is_dunder(name: &str) -> bool {
    name.starts_with(DUNDER) && name.ends_with(DUNDER)
}

/// Splits a `;`-separated answer into trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn dedupe_preserving_order<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dunder_magic_method() {
        assert!(is_dunder("__init__"));
        assert!(is_dunder("__eq__"));
    }

    #[test]
    fn test_is_dunder_single_sided() {
        assert!(!is_dunder("__private"));
        assert!(!is_dunder("trailing__"));
        assert!(!is_dunder("_protected"));
        assert!(!is_dunder("plain"));
    }

    #[test]
    fn test_split_list_semicolons() {
        assert_eq!(split_list("os;sys;re"), vec!["os", "sys", "re"]);
    }

    #[test]
    fn test_split_list_drops_blank_entries() {
        assert_eq!(split_list(" os ; ;sys;"), vec!["os", "sys"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_dedupe_preserving_order() {
        let deduped = dedupe_preserving_order(vec!["os", "sys", "os", "re", "sys"]);
        assert_eq!(deduped, vec!["os", "sys", "re"]);
    }
}
