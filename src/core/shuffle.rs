//! Sequence shuffling.
//!
//! `shuffled` is total over any finite sequence: empty and single-element
//! inputs come back unchanged, everything else comes back as a uniform
//! permutation (Fisher-Yates via `rand::seq::SliceRandom`).

use super::rng::GameRng;

/// Return `items` in a random order.
#[must_use]
pub fn shuffled<T>(mut items: Vec<T>, rng: &mut GameRng) -> Vec<T> {
    if items.len() > 1 {
        rng.shuffle(&mut items);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let mut rng = GameRng::new(42);
        let empty: Vec<u8> = Vec::new();
        assert!(shuffled(empty, &mut rng).is_empty());
    }

    #[test]
    fn test_single() {
        let mut rng = GameRng::new(42);
        assert_eq!(shuffled(vec!['a'], &mut rng), vec!['a']);
    }

    #[test]
    fn test_is_permutation() {
        let mut rng = GameRng::new(7);
        let items: Vec<u32> = (0..24).collect();

        let mut result = shuffled(items.clone(), &mut rng);
        assert_ne!(result, items);

        result.sort_unstable();
        assert_eq!(result, items);
    }

    #[test]
    fn test_roughly_uniform_first_position() {
        // Each of 4 elements should land first about a quarter of the time.
        let mut rng = GameRng::new(99);
        let mut firsts = [0u32; 4];

        for _ in 0..4000 {
            let result = shuffled(vec![0usize, 1, 2, 3], &mut rng);
            firsts[result[0]] += 1;
        }

        for count in firsts {
            assert!((800..1200).contains(&count), "skewed count {}", count);
        }
    }
}
