//! Output conversion tests
//!
//! Float ranges, signed range and byte-fill boundaries.

use superkiss64::{SuperKiss64, QSIZE};

#[test]
fn test_next_f64_never_reaches_one() {
    let mut rng = SuperKiss64::new(31337);

    for _ in 0..(QSIZE * 2) {
        let val = rng.next_f64();
        assert!(
            (0.0..1.0).contains(&val),
            "next_f64() produced value {} outside [0.0, 1.0)",
            val
        );
    }
}

#[test]
fn test_next_f32_never_reaches_one() {
    let mut rng = SuperKiss64::new(31337);

    for _ in 0..(QSIZE * 2) {
        let val = rng.next_f32();
        assert!(
            (0.0..1.0).contains(&val),
            "next_f32() produced value {} outside [0.0, 1.0)",
            val
        );
    }
}

#[test]
fn test_float_extremes_from_bit_patterns() {
    // All-ones draw gives the largest value below 1.0, all-zeros gives 0.0
    let top = f64::from_bits((u64::MAX >> 2) | 0x3FF0_0000_0000_0000) - 1.0;
    assert!(top < 1.0);
    assert_eq!(top, 1.0 - f64::EPSILON);

    let bottom = f64::from_bits(0x3FF0_0000_0000_0000) - 1.0;
    assert_eq!(bottom, 0.0);

    let top32 = f32::from_bits((u32::MAX >> 2) | 0x3F80_0000) - 1.0;
    assert_eq!(top32, 1.0 - f32::EPSILON);
}

#[test]
fn test_next_f64_mean_near_half() {
    let mut rng = SuperKiss64::new(2718);
    let n = 100_000;
    let mean = (0..n).map(|_| rng.next_f64()).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "mean {} far from 0.5", mean);
}

#[test]
fn test_next_i63_is_shifted_u64() {
    let mut a = SuperKiss64::new(8);
    let mut b = SuperKiss64::new(8);

    for _ in 0..1000 {
        let signed = a.next_i63();
        assert!(signed >= 0);
        assert_eq!(signed as u64, b.next_u64() >> 1);
    }
}

#[test]
fn test_fill_bytes_every_length_up_to_17() {
    const SENTINEL: u8 = 0xA5;

    for len in 0..=17 {
        let mut rng = SuperKiss64::new(4242);
        let mut reference = SuperKiss64::new(4242);

        let mut storage = vec![SENTINEL; len + 8];
        rng.fill_bytes(&mut storage[..len]);

        let expected: Vec<u8> = (0..len.div_ceil(8))
            .flat_map(|_| reference.next_u64().to_le_bytes())
            .take(len)
            .collect();
        assert_eq!(&storage[..len], &expected[..], "length {}", len);
        assert!(
            storage[len..].iter().all(|&b| b == SENTINEL),
            "fill of length {} wrote past the end",
            len
        );

        // Exactly one draw per started chunk
        assert_eq!(rng.next_u64(), reference.next_u64(), "length {}", len);
    }
}

#[test]
fn test_fill_bytes_empty_draws_nothing() {
    let mut rng = SuperKiss64::new(1);
    let mut reference = SuperKiss64::new(1);

    rng.fill_bytes(&mut []);
    assert_eq!(rng.next_u64(), reference.next_u64());
}
