//! Tests for fingerprint comparison

use super::*;
use approx::assert_relative_eq;

/// Small deterministic generator so the property checks cover varied bit patterns
fn pseudo_fingerprint(seed: u32, len: usize) -> Vec<i32> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as i32
        })
        .collect()
}

#[test]
fn test_hamming() {
    assert_eq!(hamming(0, 0), 0);
    assert_eq!(hamming(0, 15), 4);
    assert_eq!(hamming(0, -1), 32);
    assert_eq!(hamming(i32::MIN, 0), 1);
    assert_eq!(hamming(-2, -1), 1);
}

#[test]
fn test_single_subfingerprint_example() {
    let a = [0];
    let b = [15];

    assert_eq!(distance(&a, &b).unwrap(), vec![15]);
    assert_eq!(similarity(&a, &b).unwrap(), 0.875);
}

#[test]
fn test_identical_pair_example() {
    let a = [5, 9];
    let b = [5, 9];

    assert_eq!(similarity(&a, &b).unwrap(), 1.0);
    assert_eq!(distance(&a, &b).unwrap(), vec![0, 0]);
}

#[test]
fn test_length_mismatch() {
    let a = [1, 2];
    let b = [1, 2, 3];

    assert_eq!(
        similarity(&a, &b),
        Err(CompareError::LengthMismatch { left: 2, right: 3 })
    );
    assert_eq!(
        distance(&a, &b),
        Err(CompareError::LengthMismatch { left: 2, right: 3 })
    );
    assert!(bit_error_count(&b, &a).is_err());
}

#[test]
fn test_empty_fingerprints() {
    assert_eq!(similarity(&[], &[]).unwrap(), 1.0);
    assert!(distance(&[], &[]).unwrap().is_empty());
    assert_eq!(bit_error_count(&[], &[]).unwrap(), 0);
}

#[test]
fn test_negative_values_count_all_bits() {
    // Every bit differs
    assert_eq!(similarity(&[-1], &[0]).unwrap(), 0.0);
    assert_eq!(similarity(&[i32::MIN, -1], &[i32::MAX, -1]).unwrap(), 0.5);
}

#[test]
fn test_self_similarity() {
    for seed in 0..16 {
        let a = pseudo_fingerprint(seed, 64);
        assert_eq!(similarity(&a, &a).unwrap(), 1.0);
        assert!(distance(&a, &a).unwrap().iter().all(|&d| d == 0));
    }
}

#[test]
fn test_symmetry() {
    for seed in 0..16 {
        let a = pseudo_fingerprint(seed, 40);
        let b = pseudo_fingerprint(seed + 100, 40);

        assert_eq!(similarity(&a, &b).unwrap(), similarity(&b, &a).unwrap());
        assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
    }
}

#[test]
fn test_distance_composes() {
    for seed in 0..8 {
        let a = pseudo_fingerprint(seed, 20);
        let b = pseudo_fingerprint(seed + 50, 20);
        let c = pseudo_fingerprint(seed + 90, 20);

        let ab = distance(&a, &b).unwrap();
        let bc = distance(&b, &c).unwrap();
        let ac = distance(&a, &c).unwrap();

        assert_eq!(distance(&ab, &bc).unwrap(), ac);
    }
}

#[test]
fn test_score_bounded() {
    for seed in 0..32 {
        let a = pseudo_fingerprint(seed, 1 + seed as usize);
        let b = pseudo_fingerprint(seed + 7, 1 + seed as usize);
        let score = similarity(&a, &b).unwrap();

        assert!((0.0..=1.0).contains(&score), "score {score} out of range");
    }
}

#[test]
fn test_score_matches_bit_error_count() {
    let a = pseudo_fingerprint(3, 120);
    let b = pseudo_fingerprint(4, 120);

    let errors = bit_error_count(&a, &b).unwrap();
    let expected = 1.0 - errors as f64 / (120.0 * 32.0);

    assert_relative_eq!(similarity(&a, &b).unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn test_single_bit_flip_score() {
    let a = pseudo_fingerprint(11, 100);
    let mut b = a.clone();
    b[42] ^= 1 << 7;

    assert_relative_eq!(similarity(&a, &b).unwrap(), 1.0 - 1.0 / 3200.0, epsilon = 1e-12);
    assert!(is_match(similarity(&a, &b).unwrap(), MATCH_THRESHOLD));
}

#[test]
fn test_is_match_threshold() {
    assert!(is_match(0.95, MATCH_THRESHOLD));
    assert!(is_match(1.0, MATCH_THRESHOLD));
    assert!(!is_match(0.9499, MATCH_THRESHOLD));
}

#[test]
fn test_score_from_bit_errors() {
    assert_eq!(score_from_bit_errors(0, 0), 1.0);
    assert_eq!(score_from_bit_errors(4, 1), 0.875);
    assert_eq!(score_from_bit_errors(64, 2), 0.0);

    let a = pseudo_fingerprint(21, 50);
    let b = pseudo_fingerprint(22, 50);
    let errors = bit_error_count(&a, &b).unwrap();
    assert_eq!(score_from_bit_errors(errors, a.len()), similarity(&a, &b).unwrap());
}
