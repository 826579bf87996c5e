//! Distribution properties of the random facilities.
//!
//! Bound properties are checked over arbitrary bounds and seeds with
//! proptest; frequency checks are coarse smoke tests, not uniformity proofs.

use proptest::prelude::*;
use rand::SeedableRng;
use random_core::{BasicRandom, DefaultEngine, Random, RandomLocal, RandomStatic};

fn seeded(seed: u64) -> Random {
    BasicRandom::from_engine(DefaultEngine::seed_from_u64(seed))
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Every value of `get(0, 9)` appears within 25% of its expected count.
#[test]
fn test_digit_frequencies() {
    let n = 100_000;
    let mut counts = [0_usize; 10];
    let mut random = Random::new();

    for _ in 0..n {
        counts[random.get(0_usize, 9)] += 1;
    }

    let expected = n / 10;
    for (digit, &count) in counts.iter().enumerate() {
        assert!(
            count * 4 >= expected * 3 && count * 4 <= expected * 5,
            "Digit {} drawn {} times, expected about {}",
            digit,
            count,
            expected
        );
    }
}

/// Same smoke test through the static facilities and the byte path.
#[test]
fn test_static_digit_frequencies() {
    let n = 20_000;
    let mut local = [0_usize; 10];
    let mut shared = [0_usize; 10];

    for _ in 0..n {
        local[usize::from(RandomLocal::get(9_u8, 0))] += 1;
        shared[usize::from(RandomStatic::get(0_u8, 9))] += 1;
    }

    let expected = n / 10;
    for counts in [local, shared] {
        for &count in &counts {
            assert!(count * 4 >= expected * 3 && count * 4 <= expected * 5);
        }
    }
}

/// Consecutive real draws from the process-wide engine differ.
#[test]
fn test_static_engine_advances() {
    let first = RandomStatic::get(0.0_f64, 1.0);
    let second = RandomStatic::get(0.0_f64, 1.0);
    assert_ne!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property test: 32-bit integer draws stay in bounds for any order.
    #[test]
    fn prop_i32_within_bounds(seed in any::<u64>(), from in any::<i32>(), to in any::<i32>()) {
        let mut random = seeded(seed);
        let (low, high) = ordered(from, to);
        for _ in 0..32 {
            let v = random.get(from, to);
            prop_assert!(low <= v && v <= high, "{} not in [{}, {}]", v, low, high);
        }
    }

    /// Property test: 64-bit unsigned draws stay in bounds for any order.
    #[test]
    fn prop_u64_within_bounds(seed in any::<u64>(), from in any::<u64>(), to in any::<u64>()) {
        let mut random = seeded(seed);
        let (low, high) = ordered(from, to);
        for _ in 0..32 {
            let v = random.get(from, to);
            prop_assert!(low <= v && v <= high);
        }
    }

    /// Property test: signed byte draws stay in bounds through the widened path.
    #[test]
    fn prop_i8_within_bounds(seed in any::<u64>(), from in any::<i8>(), to in any::<i8>()) {
        let mut random = seeded(seed);
        let (low, high) = ordered(from, to);
        for _ in 0..32 {
            let v = random.get(from, to);
            prop_assert!(low <= v && v <= high);
        }
    }

    /// Property test: unsigned byte draws stay in bounds through the widened path.
    #[test]
    fn prop_u8_within_bounds(seed in any::<u64>(), from in any::<u8>(), to in any::<u8>()) {
        let mut random = seeded(seed);
        let (low, high) = ordered(from, to);
        for _ in 0..32 {
            let v = random.get(from, to);
            prop_assert!(low <= v && v <= high);
        }
    }

    /// Property test: real draws stay in the closed interval.
    #[test]
    fn prop_f64_within_bounds(
        seed in any::<u64>(),
        from in -1.0e12..1.0e12_f64,
        to in -1.0e12..1.0e12_f64,
    ) {
        let mut random = seeded(seed);
        let (low, high) = ordered(from, to);
        for _ in 0..32 {
            let v = random.get(from, to);
            prop_assert!(low <= v && v <= high, "{} not in [{}, {}]", v, low, high);
        }
    }

    /// Property test: single-precision draws stay in the closed interval.
    #[test]
    fn prop_f32_within_bounds(
        seed in any::<u64>(),
        from in -1.0e6..1.0e6_f32,
        to in -1.0e6..1.0e6_f32,
    ) {
        let mut random = seeded(seed);
        let (low, high) = ordered(from, to);
        for _ in 0..32 {
            let v = random.get(from, to);
            prop_assert!(low <= v && v <= high);
        }
    }

    /// Property test: mixed signed bounds land in the combined range.
    #[test]
    fn prop_mixed_signed_within_bounds(seed in any::<u64>(), from in any::<i16>(), to in any::<i64>()) {
        let mut random = seeded(seed);
        let (low, high) = ordered(i64::from(from), to);
        for _ in 0..32 {
            let v: i64 = random.get_common(from, to);
            prop_assert!(low <= v && v <= high);
        }
    }

    /// Property test: mixed unsigned bounds land in the combined range.
    #[test]
    fn prop_mixed_unsigned_within_bounds(seed in any::<u64>(), from in any::<u8>(), to in any::<usize>()) {
        let mut random = seeded(seed);
        let (low, high) = ordered(usize::from(from), to);
        for _ in 0..32 {
            let v: usize = random.get_common(from, to);
            prop_assert!(low <= v && v <= high);
        }
    }

    /// Property test: reversed bounds draw the same values from the same seed.
    #[test]
    fn prop_reversed_bounds_match(seed in any::<u64>(), from in any::<i64>(), to in any::<i64>()) {
        let mut forward = seeded(seed);
        let mut reversed = seeded(seed);
        for _ in 0..16 {
            prop_assert_eq!(forward.get(from, to), reversed.get(to, from));
        }
    }
}
