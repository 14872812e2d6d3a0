//! Generic random-source interface tests
//!
//! The generator driven by `rand`'s utilities, including save/restore of a
//! generator that a shuffle has been consuming.

use rand::seq::SliceRandom;
use rand::Rng;
use superkiss64::{RandomSource, SuperKiss64, QSIZE};

fn permutation<R: Rng>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

#[test]
fn test_shuffle_is_a_permutation() {
    let mut rng = SuperKiss64::new(77);
    let mut perm = permutation(&mut rng, 1000);
    perm.sort_unstable();
    assert_eq!(perm, (0..1000).collect::<Vec<_>>());
}

#[test]
fn test_bounded_draws_stay_in_range() {
    let mut rng = SuperKiss64::new(77);
    for _ in 0..10_000 {
        let m = rng.random_range(0..1000);
        assert!((0..1000).contains(&m), "random_range(0..1000) gave {}", m);
    }
}

#[test]
fn test_shuffle_resumes_after_restore() {
    // Use every table word at least once
    let n = QSIZE + 100;

    let mut rng = SuperKiss64::from_entropy().unwrap();
    permutation(&mut rng, n + 20);

    let saved = rng.snapshot();
    let want = permutation(&mut rng, n);
    permutation(&mut rng, n + 37);

    let mut restored = SuperKiss64::restore(saved).unwrap();
    let got = permutation(&mut restored, n);
    assert_eq!(got, want);
}

#[test]
fn test_random_source_trait_object() {
    let mut rng = SuperKiss64::new(4);
    let mut reference = SuperKiss64::new(4);

    let source: &mut dyn RandomSource = &mut rng;
    source.reseed(12345);
    assert_eq!(source.uint64(), reference.next_u64());
    assert_eq!(source.int63(), reference.next_i63());
}
