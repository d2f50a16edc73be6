//! Permutation and sign-pattern enumeration.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::Float;

/// Parity of a permutation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Parity {
    /// Even number of swaps.
    #[default]
    Even = 0,
    /// Odd number of swaps.
    Odd = 1,
}
impl Parity {
    /// Returns the opposite parity.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

/// Returns an iterator over permutations of a list, each with its associated
/// parity.
pub fn permutations_with_parity<I>(iter: I) -> impl Iterator<Item = (Vec<I::Item>, Parity)>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
    let len = iter.len();
    iter.permutations(len)
        .enumerate()
        .map(|(i, p)| (p, permutation_parity(i)))
}

/// Returns the even permutations of a list, in lexicographic order of
/// positions. For three elements these are the cyclic shifts.
pub fn even_permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    permutations_with_parity(items.iter().cloned())
        .filter(|(_, parity)| *parity == Parity::Even)
        .map(|(p, _)| p)
        .collect()
}

/// Returns the parity of the permutation with number `n`, where permutations
/// are numbered in lexicographic order.
pub fn permutation_parity(mut n: usize) -> Parity {
    let mut res = Parity::Even;
    let mut i = 2;
    while n > 0 {
        if (n % i) % 2 != 0 {
            res = res.opposite();
        }
        n /= i;
        i += 1;
    }
    res
}

/// Returns every distinct ordering of a multiset, in lexicographic order.
///
/// The number of results is `n! / (k_1! k_2! ...)` where `k_i` are the
/// multiplicities of repeated values. Incomparable values (such as NaN) are
/// treated as equal to everything.
pub fn distinct_permutations<T: Clone + PartialOrd>(items: &[T]) -> Vec<Vec<T>> {
    let cmp = |a: &T, b: &T| a.partial_cmp(b).unwrap_or(Ordering::Equal);

    let mut current = items.to_vec();
    current.sort_by(cmp);
    let mut ret = vec![current.clone()];
    while next_permutation(&mut current, cmp) {
        ret.push(current.clone());
    }
    ret
}

/// Rearranges `items` into the lexicographically next permutation, returning
/// `false` if it was already the last one.
fn next_permutation<T>(items: &mut [T], cmp: impl Fn(&T, &T) -> Ordering) -> bool {
    let Some(pivot) = (1..items.len())
        .rev()
        .find(|&i| cmp(&items[i - 1], &items[i]) == Ordering::Less)
        .map(|i| i - 1)
    else {
        return false;
    };
    // The suffix after `pivot` is non-increasing, so the rightmost element
    // greater than the pivot is the smallest such element.
    let Some(successor) = (pivot + 1..items.len())
        .rev()
        .find(|&j| cmp(&items[pivot], &items[j]) == Ordering::Less)
    else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// Returns all `2^n` assignments of `±1` to `n` positions. The first position
/// varies slowest, and `-1` comes before `+1`.
pub fn sign_assignments(n: usize) -> impl Iterator<Item = Vec<Float>> {
    (0..1_usize << n).map(move |bits| {
        (0..n)
            .map(|i| match (bits >> (n - 1 - i)) & 1 {
                0 => -1.0,
                _ => 1.0,
            })
            .collect()
    })
}
