// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value types.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use sixplus_cards::{Card, Rank};

use super::mask;

/// The hand category, ordered from the weakest to the strongest using the
/// short-deck ordering with a flush beating a full house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight, the wheel A-6-7-8-9 is the lowest one.
    Straight,
    /// Full house.
    FullHouse,
    /// Flush.
    Flush,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 9;

    /// Returns all the categories from high card to straight flush.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            FullHouse,
            Flush,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::FullHouse => "Full House",
            HandRank::Flush => "Flush",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }

    /// The number of ranks used to break ties in this category.
    fn tiebreak_len(&self) -> usize {
        match self {
            HandRank::StraightFlush | HandRank::Straight => 1,
            HandRank::FourOfAKind | HandRank::FullHouse => 2,
            HandRank::ThreeOfAKind | HandRank::TwoPair => 3,
            HandRank::OnePair => 4,
            HandRank::Flush | HandRank::HighCard => 5,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a 5 cards hand.
///
/// Values compare by category first and then by the tie-break ranks, two
/// hands with the same value split the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    rank: HandRank,
    /// Tie-break ranks, the unused tail is filled with sixes.
    tiebreak: [Rank; 5],
}

impl HandValue {
    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// Panics if the hand has less than 5 or more than 7 cards.
    pub fn eval(cards: &[Card]) -> Self {
        Self::eval_with_best_hand(cards).0
    }

    /// Evaluates a 5, 6, or 7 cards hand and returns the best 5 cards.
    ///
    /// Panics if the hand has less than 5 or more than 7 cards.
    pub fn eval_with_best_hand(cards: &[Card]) -> (Self, [Card; 5]) {
        assert!(
            (5..=7).contains(&cards.len()),
            "5 <= cards <= 7, got {}",
            cards.len()
        );

        let mut best_hand: [Card; 5] = std::array::from_fn(|idx| cards[idx]);
        let mut best_value = Self::eval5(&best_hand);

        // Each subset mask with 5 bits set selects a 5 cards hand, the first
        // one is the hand we started from.
        let n = cards.len();
        for subset in (0u32..1 << n).filter(|s| s.count_ones() == 5).skip(1) {
            let mut hand = best_hand;
            let selected = cards
                .iter()
                .enumerate()
                .filter(|(idx, _)| subset & (1 << idx) != 0)
                .map(|(_, c)| *c);
            for (slot, card) in hand.iter_mut().zip(selected) {
                *slot = card;
            }

            let value = Self::eval5(&hand);
            if value > best_value {
                best_value = value;
                best_hand = hand;
            }
        }

        (best_value, best_hand)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks, most significant first.
    ///
    /// | Category        | Tie-break                        |
    /// |-----------------|----------------------------------|
    /// | Straight flush  | high card                        |
    /// | Four of a kind  | quads rank, kicker               |
    /// | Flush           | five ranks                       |
    /// | Full house      | trips rank, pair rank            |
    /// | Straight        | high card, nine for the wheel    |
    /// | Three of a kind | trips rank, two kickers          |
    /// | Two pair        | high pair, low pair, kicker      |
    /// | One pair        | pair rank, three kickers         |
    /// | High card       | five ranks                       |
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak[..self.rank.tiebreak_len()]
    }

    fn new(rank: HandRank, ranks: &[Rank]) -> Self {
        let mut tiebreak = [Rank::Six; 5];
        let len = rank.tiebreak_len();
        tiebreak[..len].copy_from_slice(&ranks[..len]);
        Self { rank, tiebreak }
    }

    /// Evaluates a 5 cards hand.
    fn eval5(hand: &[Card; 5]) -> Self {
        let mut counts = [0u8; Rank::COUNT];
        for card in hand {
            counts[card.rank() as usize] += 1;
        }

        // Ranks grouped by count, the stable sort keeps higher ranks first
        // for groups with the same count.
        let mut groups = [(0u8, Rank::Six); 5];
        let mut num_groups = 0;
        for rank in Rank::ranks().rev() {
            let count = counts[rank as usize];
            if count > 0 {
                groups[num_groups] = (count, rank);
                num_groups += 1;
            }
        }

        let groups = &mut groups[..num_groups];
        groups.sort_by(|a, b| b.0.cmp(&a.0));

        let mut ranks = [Rank::Six; 5];
        for (slot, (_, rank)) in ranks.iter_mut().zip(groups.iter()) {
            *slot = *rank;
        }

        let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());
        let straight = mask::straight_high(mask::rank_mask(hand));
        let top = groups[0].0;
        let second = groups.get(1).map(|g| g.0).unwrap_or(0);

        match straight {
            Some(high) if is_flush => Self::new(HandRank::StraightFlush, &[high]),
            _ if top == 4 => Self::new(HandRank::FourOfAKind, &ranks),
            _ if is_flush => Self::new(HandRank::Flush, &ranks),
            _ if top == 3 && second == 2 => Self::new(HandRank::FullHouse, &ranks),
            Some(high) => Self::new(HandRank::Straight, &[high]),
            None if top == 3 => Self::new(HandRank::ThreeOfAKind, &ranks),
            None if top == 2 && second == 2 => Self::new(HandRank::TwoPair, &ranks),
            None if top == 2 => Self::new(HandRank::OnePair, &ranks),
            None => Self::new(HandRank::HighCard, &ranks),
        }
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tiebreak().cmp(other.tiebreak()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        for rank in self.tiebreak() {
            write!(f, " {rank}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use sixplus_cards::Deck;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&cards(s))
    }

    #[test]
    fn categories() {
        use HandRank::*;
        use Rank::*;

        let tests = [
            ("As Kh Qd Jc 9s", HighCard, vec![Ace, King, Queen, Jack, Nine]),
            ("As Ah Kd Qc Js", OnePair, vec![Ace, King, Queen, Jack]),
            ("As Ah Kd Kc Js", TwoPair, vec![Ace, King, Jack]),
            ("7s 7h 7d Kc Js", ThreeOfAKind, vec![Seven, King, Jack]),
            ("6s 7h 8d 9c Ts", Straight, vec![Ten]),
            ("Ts Jh Qd Kc As", Straight, vec![Ace]),
            ("As 6h 7d 8c 9s", Straight, vec![Nine]),
            ("Qs Qh Qd 6c 6s", FullHouse, vec![Queen, Six]),
            ("As Js 9s 7s 6s", Flush, vec![Ace, Jack, Nine, Seven, Six]),
            ("8s 8h 8d 8c Ts", FourOfAKind, vec![Eight, Ten]),
            ("9h Th Jh Qh Kh", StraightFlush, vec![King]),
            ("Ad 6d 7d 8d 9d", StraightFlush, vec![Nine]),
        ];

        for (hand, rank, tiebreak) in tests {
            let value = eval(hand);
            assert_eq!(value.rank(), rank, "{hand}");
            assert_eq!(value.tiebreak(), &tiebreak[..], "{hand}");
        }
    }

    #[test]
    fn flush_beats_full_house() {
        let flush = eval("6s 7s 8s 9s Js");
        let full_house = eval("As Ah Ad Kc Ks");
        assert_eq!(flush.rank(), HandRank::Flush);
        assert_eq!(full_house.rank(), HandRank::FullHouse);
        assert!(flush > full_house);

        // Trips in a flush hand play as a flush.
        let value = eval("As Ah Ad 6s 9s Ts Js");
        assert_eq!(value.rank(), HandRank::Flush);
        assert_eq!(value.tiebreak()[0], Rank::Ace);
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = eval("As 6h 7d 8c 9s");
        let six_high = eval("6s 7h 8d 9c Ts");
        assert_eq!(wheel.rank(), HandRank::Straight);
        assert_eq!(wheel.tiebreak(), &[Rank::Nine]);
        assert!(wheel < six_high);

        // The wheel beats any three of a kind.
        assert!(wheel > eval("As Ah Ad Kc Qs"));

        // With a ten the ace no longer plays low.
        let value = eval("As 6h 7d 8c 9s Td");
        assert_eq!(value.tiebreak(), &[Rank::Ten]);
    }

    #[test]
    fn kickers_break_ties() {
        assert!(eval("As Ah Kd Qc Js") > eval("As Ah Kd Qc Ts"));
        assert!(eval("Ks Kh Qd Qc As") > eval("Ks Kh Qd Qc Js"));
        assert!(eval("8s 8h 8d 8c As") > eval("8s 8h 8d 8c Ks"));
        assert!(eval("Qs Qh Qd 7c 7s") > eval("Js Jh Jd Ac As"));
        assert!(eval("As Ks Qs Js 9s") > eval("As Ks Qs Ts 9s"));

        // Same value with different suits.
        assert_eq!(eval("As Ah Kd Qc Js"), eval("Ad Ac Kh Qs Jh"));
        assert_eq!(
            eval("As Ah Kd Qc Js").cmp(&eval("Ad Ac Kh Qs Jh")),
            Ordering::Equal
        );
    }

    #[test]
    fn best_of_seven() {
        // Two pair on board plus a third pair keeps the best two pairs.
        let value = eval("Ks Kh 9d 9c 7s 7h As");
        assert_eq!(value.rank(), HandRank::TwoPair);
        assert_eq!(value.tiebreak(), &[Rank::King, Rank::Nine, Rank::Ace]);

        // Two trips make a full house with the higher trips.
        let value = eval("Ks Kh Kd 9c 9s 9h As");
        assert_eq!(value.rank(), HandRank::FullHouse);
        assert_eq!(value.tiebreak(), &[Rank::King, Rank::Nine]);

        // Straight flush inside a longer straight.
        let value = eval("6s 7s 8s 9s Ts Jh Qd");
        assert_eq!(value.rank(), HandRank::StraightFlush);
        assert_eq!(value.tiebreak(), &[Rank::Ten]);

        let (value, best) = HandValue::eval_with_best_hand(&cards("6s 7s 8s 9s Ts Jh Qd"));
        assert_eq!(value, HandValue::eval(&best));
        assert_eq!(best.iter().map(|c| c.to_string()).collect::<Vec<_>>(), [
            "6s", "7s", "8s", "9s", "Ts"
        ]);
    }

    #[test]
    fn six_cards() {
        let value = eval("As Ad Ks Qh Td 9c");
        assert_eq!(value.rank(), HandRank::OnePair);
        assert_eq!(value.tiebreak(), &[Rank::Ace, Rank::King, Rank::Queen, Rank::Ten]);
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut hand = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            let value = HandValue::eval(&hand);

            for _ in 0..5 {
                hand.shuffle(&mut rng);
                assert_eq!(HandValue::eval(&hand), value);
            }
        }
    }

    #[test]
    fn best_hand_matches_value() {
        let mut rng = rand::rng();
        for n in 5..=7 {
            for _ in 0..500 {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let hand = (0..n).filter_map(|_| deck.deal()).collect::<Vec<_>>();
                let (value, best) = HandValue::eval_with_best_hand(&hand);
                assert_eq!(HandValue::eval(&best), value);
                assert!(best.iter().all(|c| hand.contains(c)));
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
        assert_eq!(eval("As 6h 7d 8c 9s").to_string(), "Straight 9");
        assert_eq!(eval("Ks Kh Qd Qc As").to_string(), "Two Pair K Q A");
    }

    #[test]
    #[should_panic]
    fn too_few_cards() {
        eval("As Ks Qs Js");
    }

    // Counts all the 7 cards hands categories, slow in debug mode.
    #[test]
    #[ignore]
    fn all_seven_cards_hands() {
        let mut counts = [0usize; HandRank::COUNT];
        Deck::default().for_each(7, |hand| {
            counts[HandValue::eval(hand).rank() as usize] += 1;
        });

        assert_eq!(counts.iter().sum::<usize>(), 8_347_680);
        assert_eq!(counts, [
            233_100, 2_316_600, 3_157_056, 607_200, 1_169_940, 633_024, 175_560, 44_640,
            10_560
        ]);
    }
}
