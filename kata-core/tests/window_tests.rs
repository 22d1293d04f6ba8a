use kata_core::{find_covering_window, shortest_covering_window};
use proptest::prelude::*;
use std::collections::HashSet;

fn set(chars: &str) -> HashSet<char> {
    chars.chars().collect()
}

// Quadratic reference: shortest substring length covering `required`.
fn brute_force(text: &str, required: &HashSet<char>) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() || required.is_empty() {
        return None;
    }
    let mut best: Option<usize> = None;
    for start in 0..chars.len() {
        let mut seen = HashSet::new();
        for end in start..chars.len() {
            if required.contains(&chars[end]) {
                seen.insert(chars[end]);
            }
            if seen.len() == required.len() {
                let len = end - start + 1;
                best = Some(best.map_or(len, |b| b.min(len)));
                break;
            }
        }
    }
    best
}

#[test]
fn test_reference_cases() {
    assert_eq!(shortest_covering_window("adddddbcbba", &set("abc")), 4);
    assert_eq!(shortest_covering_window("abc", &set("abc")), 3);
    assert_eq!(shortest_covering_window("", &set("abc")), 0);
    assert_eq!(shortest_covering_window("abcdefg", &set("")), 0);
}

#[test]
fn test_no_window_is_none_not_a_sentinel() {
    assert_eq!(find_covering_window("xyz", &set("a")), None);
    assert_eq!(shortest_covering_window("xyz", &set("a")), 0);
}

proptest! {
    #[test]
    fn prop_matches_brute_force(text in "[abcd]{0,30}", required in "[abce]{0,3}") {
        let required = set(&required);
        let found = find_covering_window(&text, &required);
        prop_assert_eq!(found.map(|w| w.len), brute_force(&text, &required));
    }

    #[test]
    fn prop_window_covers_required(text in "[abcd]{1,30}", required in "[abc]{1,3}") {
        let required = set(&required);
        if let Some(window) = find_covering_window(&text, &required) {
            let slice = window.slice(&text).expect("window lies inside the text");
            prop_assert_eq!(slice.chars().count(), window.len);
            prop_assert!(required.iter().all(|c| slice.contains(*c)));
            prop_assert!(window.end() <= text.chars().count());
        }
    }
}
