//! Property-based tests for the SlideDeck navigation invariants.

use proptest::prelude::*;

use herodeck::config::{Controls, DeckManifest, SlideSpec};
use herodeck::constants::AUTOPLAY_INTERVAL;
use herodeck::deck::SlideDeck;

fn deck_of(n: usize) -> SlideDeck {
    let manifest = DeckManifest {
        title: None,
        slides: (0..n)
            .map(|i| SlideSpec {
                headline: format!("Slide {i}"),
                tagline: None,
                background: None,
                stats: vec![],
            })
            .collect(),
        controls: Controls::default(),
    };
    SlideDeck::mount(&manifest).expect("valid manifest").0
}

fn active_indices(deck: &SlideDeck) -> Vec<usize> {
    deck.slides()
        .iter()
        .filter(|s| s.active)
        .map(|s| s.ordinal)
        .collect()
}

proptest! {
    /// Exactly one slide is active after any navigation sequence, and it is
    /// always the current one.
    #[test]
    fn exactly_one_active_slide(n in 1usize..10, steps in prop::collection::vec(0u8..3, 0..40)) {
        let mut deck = deck_of(n);
        for step in steps {
            match step {
                0 => deck.next(),
                1 => deck.previous(),
                _ => deck.go_to((deck.current_index() + 1) % n),
            }
            prop_assert_eq!(active_indices(&deck), vec![deck.current_index()]);
            prop_assert!(deck.current_index() < n);
        }
    }

    /// Calling next() N times from any starting index is the identity.
    #[test]
    fn next_wraps_around_to_the_start(n in 1usize..12, start in 0usize..12) {
        let start = start % n;
        let mut deck = deck_of(n);
        deck.go_to(start);
        for _ in 0..n {
            deck.next();
        }
        prop_assert_eq!(deck.current_index(), start);
    }

    /// previous() is the exact inverse of next() at every index.
    #[test]
    fn previous_inverts_next(n in 1usize..12, start in 0usize..12) {
        let start = start % n;
        let mut deck = deck_of(n);
        deck.go_to(start);
        deck.next();
        deck.previous();
        prop_assert_eq!(deck.current_index(), start);
    }

    /// go_to(k) lands on k and pushes the next autoplay advance a full
    /// interval into the future.
    #[test]
    fn go_to_sets_index_and_resets_autoplay(n in 2usize..10, k in 0usize..10, spent in 0.0f32..5.9) {
        let k = k % n;
        let mut deck = deck_of(n);
        deck.start();
        deck.tick(spent);
        deck.go_to(k);
        prop_assert_eq!(deck.current_index(), k);
        prop_assert!(!deck.tick(AUTOPLAY_INTERVAL - 0.05));
        prop_assert_eq!(deck.current_index(), k);
        prop_assert!(deck.tick(0.1));
        prop_assert_eq!(deck.current_index(), (k + 1) % n);
    }
}
