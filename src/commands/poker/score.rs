//! The five-card hand evaluator.
//!
//! Produces a flat point score rather than a categorical poker ranking, so
//! different hand shapes with equal points tie and kickers are never compared.

use crate::commands::games::card::Card;

/// Scores a five-card hand.
///
/// With five distinct ranks, a straight (max - min == 4, Ace high) is worth
/// 100 and a flush 1000; the two stack for a straight flush. Otherwise the
/// rank-count distribution picks exactly one bonus: quads 750, full house 500,
/// trips 250, two pair 100, one pair 50. A straight cannot coexist with the
/// pair family since it needs five distinct ranks.
pub fn hand_score(hand: &[Card]) -> u32 {
    let mut counts = [0u8; 15];
    for card in hand {
        counts[card.rank.poker_value() as usize] += 1;
    }
    let distinct = counts.iter().filter(|&&c| c > 0).count();

    let mut score = 0;
    if distinct == hand.len() && hand.len() == 5 {
        let max = hand.iter().map(|c| c.rank.poker_value()).max().unwrap_or(0);
        let min = hand.iter().map(|c| c.rank.poker_value()).min().unwrap_or(0);
        if max - min == 4 {
            score += 100;
        }
        if hand.iter().all(|c| c.suit == hand[0].suit) {
            score += 1000;
        }
    }

    let pairs = counts.iter().filter(|&&c| c == 2).count();
    let has_trips = counts.contains(&3);
    score += if counts.contains(&4) {
        750
    } else if has_trips && pairs == 1 {
        500
    } else if has_trips {
        250
    } else if pairs == 2 {
        100
    } else if pairs == 1 {
        50
    } else {
        0
    };
    score
}
