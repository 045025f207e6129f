use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::multiplicity::Multiplicity;

#[test]
fn star_counts() {
    assert_eq!(Multiplicity::Single.star_count(), 1);
    assert_eq!(Multiplicity::Binary.star_count(), 2);
    assert_eq!(Multiplicity::Tertiary.star_count(), 3);
}

#[test]
fn weights_are_roughly_respected() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let draws = 10_000;
    let mut counts = [0usize; 3];
    for _ in 0..draws {
        match Multiplicity::sample(&mut rng) {
            Multiplicity::Single => counts[0] += 1,
            Multiplicity::Binary => counts[1] += 1,
            Multiplicity::Tertiary => counts[2] += 1,
        }
    }

    let share = |n: usize| n as f64 / draws as f64;
    assert!((share(counts[0]) - 0.70).abs() < 0.03, "single {}", share(counts[0]));
    assert!((share(counts[1]) - 0.25).abs() < 0.03, "binary {}", share(counts[1]));
    assert!((share(counts[2]) - 0.05).abs() < 0.02, "tertiary {}", share(counts[2]));
}
