//! Property-based tests using proptest.
//!
//! Laws that should hold for every input: ordering, filtering, bounding and
//! de-duplication agree with their plain-iterator counterparts.

use proptest::prelude::*;
use seqflow::*;
use std::collections::HashSet;

proptest! {
    /// map keeps length and order
    #[test]
    fn map_preserves_order(xs in prop::collection::vec(any::<i32>(), 0..64)) {
        let out = from_vec(xs.clone()).map(|x: &i32| i64::from(*x) * 3).to_list().unwrap();
        let expected: Vec<i64> = xs.iter().map(|x| i64::from(*x) * 3).collect();
        prop_assert_eq!(out, expected);
    }

    /// filter keeps exactly the matching elements, in source order
    #[test]
    fn filter_keeps_matching_in_order(xs in prop::collection::vec(any::<i16>(), 0..64), m in 1i16..8) {
        let out = from_vec(xs.clone()).filter(move |x: &i16| x % m == 0).to_list().unwrap();
        let expected: Vec<i16> = xs.into_iter().filter(|x| x % m == 0).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn limit_on_iterate_takes_the_first_terms(seed in -1000i64..1000, step in -50i64..50, n in 0i64..40) {
        let out = iterate(seed, move |x: &i64| x + step).limit(n).unwrap().to_list().unwrap();
        let expected: Vec<i64> = (0..n).map(|i| seed + i * step).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn skip_then_limit_is_a_window(xs in prop::collection::vec(any::<u8>(), 0..64), s in 0usize..80, n in 0usize..80) {
        let out = from_vec(xs.clone()).skip_n(s).limit_n(n).to_list().unwrap();
        let expected: Vec<u8> = xs.into_iter().skip(s).take(n).collect();
        prop_assert_eq!(out, expected);
    }

    /// distinct keeps first occurrences and yields no repeats
    #[test]
    fn distinct_keeps_first_occurrences(xs in prop::collection::vec(0u8..16, 0..64)) {
        let out = from_vec(xs.clone()).distinct().unwrap().to_list().unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<u8> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn sorted_matches_stable_sort(xs in prop::collection::vec((0u8..6, any::<u16>()), 0..64)) {
        let out = from_vec(xs.clone())
            .sorted_by_key(|p: &(u8, u16)| p.0)
            .unwrap()
            .to_list()
            .unwrap();
        let mut expected = xs;
        expected.sort_by_key(|p| p.0);
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn partition_splits_without_loss(xs in prop::collection::vec(any::<i32>(), 0..64)) {
        let (even, odd) = from_vec(xs.clone()).partition(|x: &i32| x % 2 == 0).unwrap();
        prop_assert!(even.iter().all(|x| x % 2 == 0));
        prop_assert!(odd.iter().all(|x| x % 2 != 0));
        prop_assert_eq!(even.len() + odd.len(), xs.len());
    }

    #[test]
    fn group_sizes_add_up(xs in prop::collection::vec(0u8..10, 0..64)) {
        let groups = from_vec(xs.clone()).group_by(|x: &u8| x % 3).unwrap();
        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        prop_assert_eq!(total, xs.len());
        prop_assert!(groups.len() <= 3);
    }
}
