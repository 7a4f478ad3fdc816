//! Korean-locale string comparison for name sorting.
//!
//! Wraps an ICU collator for the `ko` locale. Korean collation reorders
//! Hangul and Han ahead of Latin, so mixed-script names sort the way a
//! Korean browser sorts them.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use std::cmp::Ordering;
use std::sync::LazyLock;
use tracing::warn;

static KO_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    match Collator::try_new(locale!("ko").into(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Korean collation data unavailable, falling back to code point order: {}", e);
            None
        }
    }
});

/// Compare two strings the way a Korean locale sorts names.
pub fn compare_ko(a: &str, b: &str) -> Ordering {
    match KO_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare_ko(a, b));
        v
    }

    #[test]
    fn test_hangul_dictionary_order() {
        assert_eq!(
            sorted(&["하늘", "나무", "가방", "다리", "각시"]),
            vec!["가방", "각시", "나무", "다리", "하늘"]
        );
    }

    #[test]
    fn test_shorter_prefix_first() {
        assert_eq!(compare_ko("김", "김철수"), Ordering::Less);
        assert_eq!(compare_ko("김철수", "김"), Ordering::Greater);
    }

    #[test]
    fn test_hangul_before_latin() {
        assert_eq!(
            sorted(&["Bora", "가람", "apple", "하늘"]),
            vec!["가람", "하늘", "apple", "Bora"]
        );
    }

    #[test]
    fn test_mixed_scripts_match_korean_locale() {
        let names = [
            "Zed", "α", "ㅏ", "Alice", "漢字", "가람", " space", "apple", "ㅎ", "123", "alice",
            "가", "Bora", "ㄱ",
        ];
        assert_eq!(
            sorted(&names),
            vec![
                " space", "123", "ㄱ", "가", "가람", "ㅎ", "漢字", "ㅏ", "alice", "Alice",
                "apple", "Bora", "Zed", "α",
            ]
        );
    }

    #[test]
    fn test_latin_lowercase_first() {
        assert_eq!(compare_ko("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_ko("alice", "Alice"), Ordering::Less);
        assert_eq!(compare_ko("Alice", "Alice"), Ordering::Equal);
    }
}
