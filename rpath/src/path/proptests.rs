//! Property-based tests for remote paths.

use super::{combine, PathRelationship, RemotePath};
use proptest::prelude::*;

// Names never contain the separator.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._+-]{1,12}"
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 1..6)
}

// Arbitrary text, separators included, to check totality.
fn raw_text_strategy() -> impl Strategy<Value = String> {
    "[a/. +]{0,16}"
}

fn path_strategy() -> impl Strategy<Value = RemotePath> {
    (names_strategy(), any::<bool>(), any::<bool>()).prop_map(|(names, absolute, directory)| {
        let mut text = String::new();
        if absolute {
            text.push('/');
        }
        text.push_str(&names.join("/"));
        if directory {
            text.push('/');
        }
        RemotePath::from(text)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Construction and conversion are exact round trips.
    #[test]
    fn text_round_trips(text in ".*") {
        let path = RemotePath::from(text.as_str());
        prop_assert_eq!(path.native(), text.as_str());
        prop_assert_eq!(String::from(path), text);
    }

    // Ordering is the ordering of the stored text.
    #[test]
    fn ordering_matches_text(a in raw_text_strategy(), b in raw_text_strategy()) {
        let pa = RemotePath::from(a.as_str());
        let pb = RemotePath::from(b.as_str());
        prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
        prop_assert_eq!(pa == pb, a == b);
        prop_assert!(!(pa < pb && pb < pa));
    }

    // The empty path is an identity on both sides.
    #[test]
    fn empty_is_identity(text in raw_text_strategy()) {
        let p = RemotePath::from(text);
        prop_assert_eq!(combine(&RemotePath::default(), &p), p.clone());
        prop_assert_eq!(combine(&p, &RemotePath::default()), p);
    }

    // Directory-form paths yield one segment per name plus the sentinel.
    #[test]
    fn directory_segment_count(names in names_strategy()) {
        let path = RemotePath::from(format!("{}/", names.join("/")));
        let segments: Vec<RemotePath> = path.segments().collect();
        prop_assert_eq!(segments.len(), names.len() + 1);
        prop_assert_eq!(segments.last(), Some(&RemotePath::from(".")));
    }

    // Absolute file paths yield the root plus one segment per name.
    #[test]
    fn absolute_segment_count(names in names_strategy()) {
        let path = RemotePath::from(format!("/{}", names.join("/")));
        let mut segments = path.segments();
        prop_assert_eq!(segments.len(), names.len() + 1);
        prop_assert_eq!(segments.next(), Some(RemotePath::root()));
        for name in &names {
            prop_assert_eq!(segments.next(), Some(RemotePath::from(name.as_str())));
        }
        prop_assert_eq!(segments.next(), None);
    }

    // The reported length always agrees with the number of items produced.
    #[test]
    fn exact_size_is_exact(text in raw_text_strategy()) {
        let path = RemotePath::from(text);
        let mut segments = path.segments();
        let mut remaining = segments.len();
        while segments.next().is_some() {
            remaining -= 1;
            prop_assert_eq!(segments.len(), remaining);
        }
        prop_assert_eq!(remaining, 0);
    }

    // Concatenation keeps the left side's rootedness and the right side's form.
    #[test]
    fn combine_keeps_left_root_and_right_form(lhs in path_strategy(), rhs in path_strategy()) {
        let joined = combine(&lhs, &rhs);
        prop_assert_eq!(joined.is_absolute(), lhs.is_absolute());
        prop_assert_eq!(joined.is_directory(), rhs.is_directory());
        prop_assert!(!joined.native().contains("//"));
    }

    // The left operand of a concatenation contains the result.
    #[test]
    fn combine_result_is_within_left(lhs in path_strategy(), rhs in path_strategy()) {
        let joined = combine(&lhs, &rhs);
        prop_assert!(PathRelationship::contains(&lhs, &joined));
    }

    // Operators, join and push all agree.
    #[test]
    fn operator_forms_agree(lhs in path_strategy(), rhs in path_strategy()) {
        let mut pushed = lhs.clone();
        pushed /= &rhs;
        prop_assert_eq!(&lhs / &rhs, lhs.join(&rhs));
        prop_assert_eq!(pushed, lhs.join(&rhs));
    }

    // Each segment of a name-only path is itself a single relative segment.
    #[test]
    fn name_segments_are_single(path in path_strategy()) {
        for segment in path.segments().filter(|s| !s.is_root()) {
            prop_assert!(segment.is_relative());
            prop_assert!(!segment.is_directory());
            prop_assert_eq!(segment.segments().len(), 1);
        }
    }
}
