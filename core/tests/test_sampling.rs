//! Tests for the shared derived operations
//!
//! The same algorithms back both generators, so properties are exercised
//! against each. Range containment and shuffle permutation are additionally
//! driven by proptest.

use proptest::prelude::*;
use seeded_random_core_rs::{FastRng, RandomSource, SecureRng, Weighted};

// ============================================================================
// Range containment
// ============================================================================

#[test]
fn test_next_int_containment_fast() {
    let mut rng = FastRng::new(12345);
    for _ in 0..10_000 {
        let val = rng.next_int(-50, 50);
        assert!((-50..=50).contains(&val), "value {} out of range", val);
    }
}

#[test]
fn test_next_int_containment_secure() {
    let mut rng = SecureRng::new(12345);
    for _ in 0..10_000 {
        let val = rng.next_int(-50, 50);
        assert!((-50..=50).contains(&val), "value {} out of range", val);
    }
}

#[test]
fn test_next_int_degenerate_range() {
    let mut fast = FastRng::new(1);
    let mut secure = SecureRng::new(1);
    for _ in 0..100 {
        assert_eq!(fast.next_int(9, 9), 9);
        assert_eq!(secure.next_int(-3, -3), -3);
    }
}

#[test]
fn test_next_float_containment() {
    let mut rng = FastRng::new(12345);
    for _ in 0..10_000 {
        let val = rng.next_float(-2.5, 7.5);
        assert!(val >= -2.5 && val < 7.5, "value {} out of range", val);
    }
}

#[test]
#[should_panic(expected = "min must be <= max")]
fn test_next_int_inverted_range_panics() {
    let mut rng = FastRng::new(12345);
    rng.next_int(100, 50);
}

// ============================================================================
// Boolean / sign draws
// ============================================================================

#[test]
fn test_chance_extremes() {
    let mut rng = FastRng::new(42);
    for _ in 0..1000 {
        assert!(!rng.chance(0.0), "p = 0 must never succeed");
        assert!(rng.chance(1.0), "p = 1 must always succeed");
    }
}

#[test]
fn test_next_bool_roughly_fair() {
    let mut rng = FastRng::new(42);
    let heads = (0..10_000).filter(|_| rng.next_bool()).count();
    assert!(
        (3000..=7000).contains(&heads),
        "coin flips wildly unbalanced: {} heads",
        heads
    );
}

#[test]
fn test_next_sign_only_unit_values() {
    let mut rng = SecureRng::new(42);
    for _ in 0..1000 {
        let sign = rng.next_sign();
        assert!(sign == 1 || sign == -1);
    }
}

// ============================================================================
// Pick / shuffle
// ============================================================================

#[test]
fn test_pick_returns_element_of_input() {
    let mut rng = FastRng::new(7);
    let items = vec![10, 20, 30, 40];
    for _ in 0..1000 {
        let picked = rng.pick(&items).copied();
        assert!(items.contains(&picked.unwrap()));
    }
}

#[test]
fn test_pick_empty_is_none() {
    let mut rng = FastRng::new(7);
    let empty: Vec<i32> = vec![];
    assert_eq!(rng.pick(&empty), None);
}

#[test]
fn test_shuffle_is_permutation() {
    let mut rng = FastRng::new(99);
    let original: Vec<i32> = (0..100).collect();

    let shuffled = rng.shuffle(&original);

    // Input untouched
    assert_eq!(original, (0..100).collect::<Vec<i32>>());

    // Same multiset
    let mut sorted = shuffled.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, original);

    // With 100 elements an identity shuffle is astronomically unlikely
    assert_ne!(shuffled, original);
}

#[test]
fn test_shuffle_deterministic() {
    let items: Vec<i32> = (0..50).collect();
    let mut rng1 = SecureRng::new(4);
    let mut rng2 = SecureRng::new(4);
    assert_eq!(rng1.shuffle(&items), rng2.shuffle(&items));
}

// ============================================================================
// Weighted pick
// ============================================================================

#[test]
fn test_weighted_bias_99_to_1() {
    let mut rng = FastRng::new(42);
    let items = vec![Weighted::new("heavy", 99.0), Weighted::new("light", 1.0)];

    let mut heavy = 0usize;
    let mut light = 0usize;
    for _ in 0..1000 {
        match rng.weighted_pick(&items) {
            Some(&"heavy") => heavy += 1,
            Some(&"light") => light += 1,
            other => panic!("unexpected pick {:?}", other),
        }
    }

    assert!(
        heavy >= 10 * light.max(1),
        "heavy item picked {}x vs light {}x",
        heavy,
        light
    );
}

#[test]
fn test_weighted_pick_single_item() {
    let mut rng = SecureRng::new(42);
    let items = vec![Weighted::new('x', 0.25)];
    for _ in 0..100 {
        assert_eq!(rng.weighted_pick(&items), Some(&'x'));
    }
}

#[test]
fn test_weighted_pick_zero_weight_unreachable() {
    let mut rng = FastRng::new(42);
    let items = vec![Weighted::new("always", 5.0), Weighted::new("never", 0.0)];
    for _ in 0..1000 {
        assert_eq!(rng.weighted_pick(&items), Some(&"always"));
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_next_int_in_range(seed in 0u64..1_000_000, min in -1000i64..1000, span in 0i64..1000) {
        let max = min + span;
        let mut rng = FastRng::new(seed);
        for _ in 0..50 {
            let val = rng.next_int(min, max);
            prop_assert!(val >= min && val <= max);
        }
    }

    #[test]
    fn prop_shuffle_is_permutation(
        seed in 0u64..1_000_000,
        items in proptest::collection::vec(-100i32..100, 0..40),
    ) {
        let mut rng = FastRng::new(seed);
        let shuffled = rng.shuffle(&items);

        let mut expected = items.clone();
        expected.sort_unstable();
        let mut actual = shuffled;
        actual.sort_unstable();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn prop_next_float_in_range(seed in 0u64..1_000_000, min in -100.0f64..100.0, width in 0.001f64..100.0) {
        let max = min + width;
        let mut rng = SecureRng::new(seed as u32);
        for _ in 0..20 {
            let val = rng.next_float(min, max);
            prop_assert!(val >= min && val < max);
        }
    }
}
