use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use marmoset::{alphabet, generate, score};

proptest! {
    #[test]
    fn generated_strings_have_exact_length(seed in any::<u64>(), len in 0usize..128) {
        let mut rng = StdRng::seed_from_u64(seed);
        let s = generate(&mut rng, len);
        prop_assert_eq!(s.chars().count(), len);
    }

    #[test]
    fn generated_strings_stay_inside_alphabet(seed in any::<u64>(), len in 0usize..128) {
        let mut rng = StdRng::seed_from_u64(seed);
        let s = generate(&mut rng, len);
        prop_assert!(s.chars().all(alphabet::contains));
    }

    #[test]
    fn score_is_bounded_and_symmetric(seed in any::<u64>(), len in 1usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = generate(&mut rng, len);
        let b = generate(&mut rng, len);
        let forward = score(&a, &b).unwrap();
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert_eq!(score(&b, &a).unwrap(), forward);
    }

    #[test]
    fn score_is_one_exactly_for_equal_strings(seed in any::<u64>(), len in 1usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = generate(&mut rng, len);
        let b = generate(&mut rng, len);
        prop_assert_eq!(score(&a, &a).unwrap(), 1.0);
        prop_assert_eq!(score(&a, &b).unwrap() == 1.0, a == b);
    }
}
