use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Hand categories from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// Evaluated strength of a hand. Two strengths compare first by category,
/// then lexicographically by tie-break ranks (higher wins on both).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    /// Tie-break ranks, most significant first. Group hands list ranks by
    /// (count desc, rank desc); straights carry only the high card (5 for
    /// the wheel); a royal flush needs none.
    pub tiebreak: Vec<u8>,
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

/// Evaluate 5 to 7 cards, returning the strength of the best 5-card hand.
///
/// With 6 or 7 cards every 5-card subset is classified and the maximum kept;
/// at 21 subsets for 7 cards the exhaustive scan is the simplest thing that
/// is verifiably correct. Fewer than 5 cards is a degenerate input that only
/// arises outside normal play; it falls back to the highest card present.
pub fn evaluate(cards: &[Card]) -> HandStrength {
    if cards.len() < 5 {
        let high = cards.iter().map(|c| c.rank as u8).max().unwrap_or(0);
        return HandStrength {
            category: Category::HighCard,
            tiebreak: vec![high],
        };
    }
    if cards.len() == 5 {
        return classify_five(cards);
    }

    let n = cards.len();
    let mut best = HandStrength {
        category: Category::HighCard,
        tiebreak: vec![],
    };
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let strength = classify_five(&five);
                        if strength > best {
                            best = strength;
                        }
                    }
                }
            }
        }
    }
    best
}

/// Classify exactly 5 cards.
fn classify_five(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut ranks: Vec<u8> = Vec::with_capacity(5);
    for &c in cards {
        let r = c.rank as u8;
        rank_counts[r as usize] += 1;
        ranks.push(r);
    }

    let is_flush = all_same_suit(cards);
    let straight_high = detect_straight_high(&ranks);

    if let Some(high) = straight_high {
        if is_flush {
            // Royal: the straight flush whose low card is exactly Ten.
            if high == 14 {
                return HandStrength {
                    category: Category::RoyalFlush,
                    tiebreak: vec![],
                };
            }
            return HandStrength {
                category: Category::StraightFlush,
                tiebreak: vec![high],
            };
        }
    }

    // Ranks grouped by multiplicity: (count desc, rank desc)
    let groups = grouped_ranks(&rank_counts);
    let counts: Vec<u8> = groups.iter().map(|&(_, c)| c).collect();
    let values: Vec<u8> = groups.iter().map(|&(r, _)| r).collect();

    if counts == [4, 1] {
        return HandStrength {
            category: Category::FourOfAKind,
            tiebreak: values,
        };
    }
    if counts == [3, 2] {
        return HandStrength {
            category: Category::FullHouse,
            tiebreak: values,
        };
    }
    if is_flush {
        return HandStrength {
            category: Category::Flush,
            tiebreak: ranks_desc(&ranks),
        };
    }
    if let Some(high) = straight_high {
        return HandStrength {
            category: Category::Straight,
            tiebreak: vec![high],
        };
    }
    if counts == [3, 1, 1] {
        return HandStrength {
            category: Category::ThreeOfAKind,
            tiebreak: values,
        };
    }
    if counts == [2, 2, 1] {
        return HandStrength {
            category: Category::TwoPair,
            tiebreak: values,
        };
    }
    if counts == [2, 1, 1, 1] {
        return HandStrength {
            category: Category::Pair,
            tiebreak: values,
        };
    }
    HandStrength {
        category: Category::HighCard,
        tiebreak: ranks_desc(&ranks),
    }
}

fn all_same_suit(cards: &[Card]) -> bool {
    let first: Suit = cards[0].suit;
    cards.iter().all(|c| c.suit == first)
}

/// Straight high card for 5 ranks, or None. The wheel {2,3,4,5,A} counts
/// with a high of 5, not 14.
fn detect_straight_high(ranks: &[u8]) -> Option<u8> {
    let mut v = ranks.to_vec();
    v.sort_unstable();
    v.dedup();
    if v.len() != 5 {
        return None;
    }
    if v.windows(2).all(|w| w[1] == w[0] + 1) {
        return Some(v[4]);
    }
    if v == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    None
}

/// Ranks paired with their multiplicities, sorted by (count desc, rank desc).
fn grouped_ranks(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = Vec::new();
    for r in 2..=14u8 {
        let c = rank_counts[r as usize];
        if c > 0 {
            groups.push((r, c));
        }
    }
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}

fn ranks_desc(ranks: &[u8]) -> Vec<u8> {
    let mut v = ranks.to_vec();
    v.sort_unstable_by(|a, b| b.cmp(a));
    v
}
