use crate::core::rng::SeededRng;

/// Fisher-Yates shuffle driven by the seeded PRNG. Returns a new vector; the
/// input is never mutated. Sequences of length <= 1 come back unchanged.
///
/// The permutation is positional: it is only reproducible for the same seed
/// over the same elements in the same pre-shuffle order.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut shuffled = items.to_vec();
    if shuffled.len() <= 1 {
        return shuffled;
    }

    let mut rng = SeededRng::new(seed);
    for i in (1..shuffled.len()).rev() {
        let j = (rng.next_f64() * (i as f64 + 1.0)).floor() as usize;
        shuffled.swap(i, j);
    }
    shuffled
}
