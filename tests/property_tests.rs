//! Property tests for dealing, sampling and the click state machine.

use std::time::Duration;

use proptest::prelude::*;

use memory_match::{
    grid_size, pair_count, sample, shuffle, tile_count, Deck, EngineConfig, GameEngine, GameRng,
    Palette, Phase,
};

proptest! {
    #[test]
    fn grid_is_even_for_every_level(level in any::<u32>()) {
        let side = grid_size(level);
        prop_assert_eq!(side % 2, 0);
        prop_assert!(pair_count(level) >= 1);
        prop_assert_eq!(pair_count(level) * 2, side * side);
    }

    #[test]
    fn dealt_decks_hold_exact_pairs(level in 0u32..12, seed in any::<u64>()) {
        let deck = Deck::deal(level, &Palette::default(), &mut GameRng::new(seed));
        prop_assert_eq!(deck.len(), tile_count(level));
        prop_assert_eq!(deck.pair_counts().len(), pair_count(level));
        prop_assert!(deck.is_well_paired());
    }

    #[test]
    fn sample_always_has_count_slots(
        source in proptest::collection::vec(any::<u16>(), 1..30),
        count in 0usize..80,
        seed in any::<u64>(),
    ) {
        let picked = sample(&source, count, &mut GameRng::new(seed));
        let drawn = picked.distinct();

        prop_assert_eq!(picked.len(), count);
        prop_assert_eq!(picked.iter().count(), count);
        prop_assert_eq!(drawn.len(), count.min(source.len()));
        for i in 0..count {
            prop_assert_eq!(picked.get(i), drawn.get(i % drawn.len()));
        }
    }

    #[test]
    fn shuffle_is_a_permutation(
        items in proptest::collection::vec(any::<i32>(), 0..64),
        seed in any::<u64>(),
    ) {
        let mut shuffled = shuffle(items.clone(), &mut GameRng::new(seed));
        let mut expected = items;
        shuffled.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        clicks in proptest::collection::vec((0usize..20, any::<bool>()), 1..200),
    ) {
        let config = EngineConfig::default().with_seed(seed);
        let mut engine = GameEngine::new(config).unwrap();
        engine.advance_clock(Duration::from_secs(1));

        for (index, wait) in clicks {
            let before = engine.session().clone();
            engine.reveal_tile(index);
            if wait {
                engine.advance_clock(Duration::from_secs(1));
            }

            let session = engine.session();
            prop_assert!(session.selection().len() <= 2);
            prop_assert!(session.selection().iter().all(|s| !session.matched().contains(&s.index)));
            prop_assert_eq!(session.matched().len() % 2, 0);
            prop_assert!(session.matched().len() >= before.matched().len());

            let delta = session.score() - before.score();
            prop_assert!(delta == 0 || delta == 10 || delta == -10);
            prop_assert_eq!(delta == 10, session.matched().len() == before.matched().len() + 2);
            prop_assert_eq!(
                session.is_level_clear(),
                session.matched().len() == session.deck().len()
            );
            if session.score() <= 0 {
                prop_assert_eq!(engine.phase(), Phase::GameOver);
                break;
            }
        }
    }
}
