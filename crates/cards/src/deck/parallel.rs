// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use super::{Card, Deck, Rank, Suit, subsets};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The clousure takes an usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        let num_hands = self.num_hands(k);
        if num_hands == 0 {
            return;
        }

        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                let count = hands_per_task.min(num_hands.saturating_sub(start));
                if count == 0 {
                    break;
                }

                let f = &f;
                s.spawn(move || {
                    let mut h = vec![Card::new(Rank::Ace, Suit::Spades); k];
                    subsets::for_each_ksubset(n, k, start, count, |p| {
                        for (idx, &pos) in p.iter().enumerate() {
                            h[idx] = self.cards[pos];
                        }

                        f(task_id, &h);
                    });
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;
    use std::sync::Mutex;

    #[test]
    fn par_for_each_visits_all_hands() {
        let deck = Deck::remaining(&[
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Diamonds),
        ]);

        for num_tasks in [1, 3, 4, 7, 1000] {
            let task_hands = (0..num_tasks)
                .map(|_| Mutex::new(Vec::new()))
                .collect::<Vec<_>>();

            deck.par_for_each(num_tasks, 2, |task_id, hand| {
                task_hands[task_id].lock().unwrap().push(hand.to_owned());
            });

            let hands = task_hands
                .into_iter()
                .flat_map(|h| h.into_inner().unwrap())
                .collect::<Vec<_>>();
            let unique = hands.iter().cloned().collect::<AHashSet<_>>();

            assert_eq!(hands.len(), deck.num_hands(2));
            assert_eq!(unique.len(), deck.num_hands(2));
        }
    }

    #[test]
    fn par_for_each_empty_deck() {
        let deck = Deck::remaining(&Deck::default().into_iter().collect::<Vec<_>>());
        deck.par_for_each(4, 2, |_, _| panic!("no hands in an empty deck"));
    }
}
