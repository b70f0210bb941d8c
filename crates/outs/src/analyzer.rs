// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flop and turn analyzer.
use ahash::AHashSet;
use log::debug;

use sixplus_eval::{Card, Deck, HandValue, draws};

use crate::report::{FlopReport, Outs, TurnReport, percent};

/// The analyzer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of tasks used to go through the turn and river pairs,
    /// used only with the `parallel` feature.
    pub tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { tasks: 1 }
    }
}

/// Analyzes the cards that can come on the next streets.
#[derive(Debug, Clone)]
pub struct Analyzer {
    deck: Deck,
    config: Config,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Analyzer {
    /// Creates an analyzer that deals from the full short deck.
    pub fn new(config: Config) -> Self {
        Self::with_deck(Deck::default(), config)
    }

    /// Creates an analyzer that deals from the given deck.
    pub fn with_deck(deck: Deck, config: Config) -> Self {
        Self { deck, config }
    }

    /// Analyzes the turn cards and the turn and river pairs.
    ///
    /// Panics if the cards are not all different.
    pub fn flop(&self, hole: [Card; 2], flop: [Card; 3]) -> FlopReport {
        let known = [hole[0], hole[1], flop[0], flop[1], flop[2]];
        assert_distinct(&known);

        let current = HandValue::eval(&known);
        let deck = self.remaining(&known);

        let mut turn_outs = Outs::new(deck.count());
        let mut four_to_straight = Vec::new();
        let mut four_to_flush = Vec::new();

        let mut hand = [known[0], known[1], known[2], known[3], known[4], known[0]];
        for card in deck.iter() {
            hand[5] = card;
            let value = HandValue::eval(&hand);
            if value > current {
                turn_outs.push(card, value.rank());
                continue;
            }

            if draws::is_four_to_straight(&hand) {
                four_to_straight.push(card);
            }

            if draws::is_four_to_flush(&hand) {
                four_to_flush.push(card);
            }
        }

        let river_pairs = deck.num_hands(2);
        let improving_pairs = self.improving_pairs(&known, &deck, current);

        debug!(
            "Flop {known:?} {}: {} turn outs of {}, {improving_pairs} of {river_pairs} pairs improve",
            current.rank(),
            turn_outs.count(),
            turn_outs.total(),
        );

        FlopReport {
            made_hand: current.rank(),
            turn_outs_pct: turn_outs.pct(),
            turn_outs,
            four_to_straight,
            four_to_flush,
            river_pairs,
            improving_pairs,
            improve_by_river_pct: percent(improving_pairs, river_pairs),
        }
    }

    /// Analyzes the river cards.
    ///
    /// Panics if the cards are not all different.
    pub fn turn(&self, hole: [Card; 2], flop: [Card; 3], turn: Card) -> TurnReport {
        let known = [hole[0], hole[1], flop[0], flop[1], flop[2], turn];
        assert_distinct(&known);

        let current = HandValue::eval(&known);
        let deck = self.remaining(&known);

        let mut river_outs = Outs::new(deck.count());
        let mut hand = [
            known[0], known[1], known[2], known[3], known[4], known[5], known[0],
        ];
        for card in deck.iter() {
            hand[6] = card;
            let value = HandValue::eval(&hand);
            if value > current {
                river_outs.push(card, value.rank());
            }
        }

        debug!(
            "Turn {known:?} {}: {} river outs of {}",
            current.rank(),
            river_outs.count(),
            river_outs.total(),
        );

        TurnReport {
            made_hand: current.rank(),
            river_outs_pct: river_outs.pct(),
            river_outs,
        }
    }

    /// The cards in this analyzer deck that are not known.
    fn remaining(&self, known: &[Card]) -> Deck {
        let mut deck = self.deck.clone();
        deck.remove_all(known);
        deck
    }

    /// Counts the turn and river pairs that improve the current hand.
    fn improving_pairs(&self, known: &[Card; 5], deck: &Deck, current: HandValue) -> usize {
        #[cfg(feature = "parallel")]
        if self.config.tasks > 1 {
            return par_count_improving_pairs(self.config.tasks, known, deck, current);
        }

        count_improving_pairs(known, deck, current)
    }

    /// The analyzer configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(feature = "parallel")]
fn par_count_improving_pairs(
    tasks: usize,
    known: &[Card; 5],
    deck: &Deck,
    current: HandValue,
) -> usize {
    use std::sync::atomic::{AtomicUsize, Ordering};

    // One counter per task.
    let counters = (0..tasks).map(|_| AtomicUsize::new(0)).collect::<Vec<_>>();

    deck.par_for_each(tasks, 2, |task_id, pair| {
        let hand = [
            known[0], known[1], known[2], known[3], known[4], pair[0], pair[1],
        ];
        if HandValue::eval(&hand) > current {
            counters[task_id].fetch_add(1, Ordering::Relaxed);
        }
    });

    counters.iter().map(|c| c.load(Ordering::Relaxed)).sum()
}

fn count_improving_pairs(known: &[Card; 5], deck: &Deck, current: HandValue) -> usize {
    let mut count = 0;
    let mut hand = [
        known[0], known[1], known[2], known[3], known[4], known[0], known[0],
    ];

    deck.for_each(2, |pair| {
        hand[5] = pair[0];
        hand[6] = pair[1];
        if HandValue::eval(&hand) > current {
            count += 1;
        }
    });

    count
}

/// Duplicate cards come from a bug in the caller.
fn assert_distinct(cards: &[Card]) {
    let unique = cards.iter().collect::<AHashSet<_>>();
    assert_eq!(unique.len(), cards.len(), "Duplicate cards in {cards:?}");
}
