use crate::hand::CardMask;
use crate::meld::Meld;

/// A group of cards the search can pick: it claims the cards in `mask` and
/// is worth `points`.
pub trait Combinable {
    fn mask(&self) -> CardMask;
    fn points(&self) -> u32;
}

impl Combinable for Meld {
    fn mask(&self) -> CardMask {
        Meld::mask(self)
    }

    fn points(&self) -> u32 {
        Meld::points(self)
    }
}

impl<T: Combinable + ?Sized> Combinable for &T {
    fn mask(&self) -> CardMask {
        (**self).mask()
    }

    fn points(&self) -> u32 {
        (**self).points()
    }
}

/// Pairwise card-disjoint groups and the points they cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<T> {
    pub value: u32,
    pub melds: Vec<T>,
}

impl<T> Combination<T> {
    pub fn empty() -> Self {
        Self { value: 0, melds: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.melds.is_empty()
    }
}

impl<T: Combinable> Combination<T> {
    /// Union of the cards claimed by every chosen group.
    pub fn mask(&self) -> CardMask {
        self.melds.iter().fold(CardMask::EMPTY, |m, g| m.union(g.mask()))
    }
}

/// The card-disjoint subset of `candidates` covering the most points.
///
/// Candidates are visited in ascending point order (stable, so equal-valued
/// candidates keep their input order). On ties the first combination found
/// in that order wins, which makes the result reproducible. Melds are
/// returned in the order they were chosen.
///
/// ```
/// use gin_rummy::hand::Hand;
/// use gin_rummy::scoring::{best_combination, candidate_melds};
///
/// let hand: Hand = "Ac Ad As 4c 5c 6c 7c Qd Th 4h".parse().unwrap();
/// let best = best_combination(&candidate_melds(&hand));
/// assert_eq!(best.value, 25);
/// assert_eq!(best.melds.len(), 2);
///
/// let none = best_combination::<gin_rummy::meld::Meld>(&[]);
/// assert_eq!(none.value, 0);
/// assert!(none.melds.is_empty());
/// ```
pub fn best_combination<T: Combinable + Clone>(candidates: &[T]) -> Combination<T> {
    let mut order: Vec<&T> = candidates.iter().collect();
    order.sort_by_key(|c| c.points());
    let best = search(&order);
    Combination { value: best.value, melds: best.chosen.into_iter().cloned().collect() }
}

/// Result of one subtree: its best value and the groups that reach it.
struct Branch<'a, T> {
    value: u32,
    chosen: Vec<&'a T>,
}

/// Pick each candidate in turn, drop everything sharing a card with it, and
/// recurse on what is left.
///
/// Only candidates after the pick stay in the pool: a combination holding an
/// earlier candidate is already reached, in the same order, from the branch
/// that picked that earlier candidate first.
fn search<'a, T: Combinable>(pool: &[&'a T]) -> Branch<'a, T> {
    let mut best = Branch { value: 0, chosen: Vec::new() };
    for (i, &pick) in pool.iter().enumerate() {
        let claimed = pick.mask();
        let rest: Vec<&'a T> =
            pool[i + 1..].iter().copied().filter(|c| !c.mask().intersects(claimed)).collect();
        let sub = search(&rest);
        let value = pick.points() + sub.value;
        if value > best.value {
            let mut chosen = Vec::with_capacity(sub.chosen.len() + 1);
            chosen.push(pick);
            chosen.extend(sub.chosen);
            best = Branch { value, chosen };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn meld(s: &str) -> Meld {
        Meld::try_new(parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn empty_pool_is_worth_nothing() {
        let best = best_combination::<Meld>(&[]);
        assert_eq!(best, Combination::empty());
    }

    #[test]
    fn single_candidate_is_taken() {
        let m = meld("2h 3h 4h");
        let best = best_combination(std::slice::from_ref(&m));
        assert_eq!(best.value, 9);
        assert_eq!(best.melds, vec![m]);
    }

    #[test]
    fn prefers_two_disjoint_melds_over_one_bigger_overlap() {
        let big = meld("7c 8c 9c Tc Jc");
        let low = meld("7c 7d 7h");
        let high = meld("8c 9c Tc");
        // big: 44; low + high: 21 + 27 = 48
        let best = best_combination(&[big, low.clone(), high.clone()]);
        assert_eq!(best.value, 48);
        assert_eq!(best.melds, vec![low, high]);
    }

    #[test]
    fn ties_keep_the_first_in_ascending_order() {
        // two interchangeable sets of equal value that overlap
        let a = meld("5s 5d 5c");
        let b = meld("5s 5d 5h");
        let best = best_combination(&[a.clone(), b]);
        assert_eq!(best.value, 15);
        assert_eq!(best.melds, vec![a]);
    }

    #[test]
    fn chosen_melds_never_share_cards() {
        let pool = vec![
            meld("3d 4d 5d"),
            meld("4d 5d 6d"),
            meld("3d 4d 5d 6d"),
            meld("5s 5d 5c"),
            meld("6s 6d 6c"),
        ];
        let best = best_combination(&pool);
        for (i, a) in best.melds.iter().enumerate() {
            for b in &best.melds[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
        // both sets together (15 + 18) beat any run, since every run touches 5d or 6d
        assert_eq!(best.value, 33);
    }
}
