// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Property-based tests for key generation.

use ordkey::Alphabet;
use ordkey::Error;
use ordkey::GenerateError;
use ordkey::Generator;
use ordkey::generate;
use proptest::prelude::*;

// =============================================================================
// Test helpers
// =============================================================================

/// Any base-36 key.
fn any_key() -> impl Strategy<Value = String> + Clone {
    return "[0-9a-z]{1,12}";
}

/// A key that does not end in the minimum symbol, as every generated key is.
fn generated_like_key() -> impl Strategy<Value = String> + Clone {
    return "[0-9a-z]{0,11}[1-9a-z]";
}

/// Two distinct keys in ascending order.
fn ordered_pair(keys: impl Strategy<Value = String> + Clone) -> impl Strategy<Value = (String, String)> {
    return (keys.clone(), keys)
        .prop_filter("keys must differ", |(a, b)| a != b)
        .prop_map(|(a, b)| if a < b { (a, b) } else { (b, a) });
}

/// True when `upper` is `lower` followed only by '0', leaving no gap.
fn is_zero_padding(lower: &str, upper: &str) -> bool {
    return match upper.strip_prefix(lower) {
        Some(rest) => rest.chars().all(|c| c == '0'),
        None => false,
    };
}

// =============================================================================
// Ordering properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A generated key sorts strictly between its bounds.
    #[test]
    fn between_bounds((lower, upper) in ordered_pair(generated_like_key())) {
        let key = generate(Some(&lower), Some(&upper)).unwrap();
        prop_assert!(lower < key, "{} !< {}", lower, key);
        prop_assert!(key < upper, "{} !< {}", key, upper);
    }

    /// With arbitrary keys, the only failure is a gap that cannot hold a key.
    #[test]
    fn between_arbitrary_bounds((lower, upper) in ordered_pair(any_key())) {
        match generate(Some(&lower), Some(&upper)) {
            Ok(key) => {
                prop_assert!(lower < key && key < upper);
            }
            Err(Error::Generate(GenerateError::NoRoom { .. })) => {
                prop_assert!(is_zero_padding(&lower, &upper));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Bounds in the wrong order are refused, never answered with a guess.
    #[test]
    fn inverted_bounds_fail((lower, upper) in ordered_pair(any_key())) {
        let result = generate(Some(&upper), Some(&lower));
        let is_invalid = matches!(
            result,
            Err(Error::Generate(GenerateError::InvalidInterval { .. }))
        );
        prop_assert!(is_invalid);
        let equal = generate(Some(&lower), Some(&lower));
        prop_assert!(equal.is_err());
    }

    /// Before the first key.
    #[test]
    fn below_upper(upper in generated_like_key()) {
        let key = generate(None, Some(&upper)).unwrap();
        prop_assert!(key < upper);
        prop_assert!(!key.is_empty());
    }

    /// After the last key.
    #[test]
    fn above_lower(lower in any_key()) {
        let key = generate(Some(&lower), None).unwrap();
        prop_assert!(key > lower);
    }

    /// Same inputs, same key.
    #[test]
    fn deterministic((lower, upper) in ordered_pair(generated_like_key())) {
        let a = generate(Some(&lower), Some(&upper));
        let b = generate(Some(&lower), Some(&upper));
        prop_assert_eq!(a, b);
    }

    /// The key is never longer than the longer bound plus one symbol.
    #[test]
    fn length_bound((lower, upper) in ordered_pair(generated_like_key())) {
        let key = generate(Some(&lower), Some(&upper)).unwrap();
        prop_assert!(key.len() <= lower.len().max(upper.len()) + 1);
    }

    /// Generated keys never end in the minimum symbol.
    #[test]
    fn never_ends_in_minimum((lower, upper) in ordered_pair(generated_like_key())) {
        let key = generate(Some(&lower), Some(&upper)).unwrap();
        prop_assert!(!key.ends_with('0'));
    }
}

// =============================================================================
// Repeated insertion
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Insert many keys into one gap, always between the last result and
    /// the starting upper bound.
    #[test]
    fn repeated_insertion_toward_upper(
        (lower, upper) in ordered_pair(generated_like_key()),
        count in 1usize..200,
    ) {
        let mut current = lower;
        for _ in 0..count {
            let key = generate(Some(&current), Some(&upper)).unwrap();
            prop_assert!(current < key && key < upper);
            prop_assert!(key.len() <= current.len().max(upper.len()) + 1);
            current = key;
        }
    }

    /// The same, pressing against the lower bound.
    #[test]
    fn repeated_insertion_toward_lower(
        (lower, upper) in ordered_pair(generated_like_key()),
        count in 1usize..200,
    ) {
        let mut current = upper;
        for _ in 0..count {
            let key = generate(Some(&lower), Some(&current)).unwrap();
            prop_assert!(lower < key && key < current);
            current = key;
        }
    }

    /// Keys generated in a small alphabet stay ordered by rank.
    #[test]
    fn small_alphabet_ordering(steps in prop::collection::vec(any::<bool>(), 1..100)) {
        let generator = Generator::new(Alphabet::new("abc").unwrap());
        let alphabet = generator.alphabet();
        let mut keys = vec![generator.generate(None, None).unwrap()];
        for (i, front) in steps.iter().enumerate() {
            let index = if *front { 0 } else { i % keys.len() };
            let lower = index.checked_sub(1).map(|j| &keys[j]);
            let key = generator.generate(lower, Some(&keys[index])).unwrap();
            keys.insert(index, key);
        }
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        for key in &keys {
            prop_assert_eq!(alphabet.parse(&alphabet.render(key)).unwrap(), key.clone());
        }
    }
}
