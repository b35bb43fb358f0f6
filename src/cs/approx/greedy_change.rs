use crate::cs::dynamic::coin_change::{Breakdown, Solution};

/// Makes change by always taking as many of the largest remaining coin as fit.
///
/// Optimal only for canonical coin systems. For `{50, 20, 2, 1}` it pays 62
/// as 50 + 6 x 2 (seven coins) where four suffice, and for `{4, 3}` it fails
/// to pay 6 at all. The returned breakdown keeps the input denomination order.
///
/// # Examples
///
/// ```
/// use coinchange::{greedy_change, solve};
///
/// let coins = [50, 20, 2, 1];
/// assert_eq!(greedy_change(62, &coins).total(), Some(7));
/// assert_eq!(solve(62, &coins).total(), Some(4));
/// ```
pub fn greedy_change(amount: usize, denominations: &[usize]) -> Solution {
    let mut largest_first: Vec<usize> = denominations
        .iter()
        .copied()
        .filter(|&c| c > 0)
        .collect();
    largest_first.sort_unstable_by(|a, b| b.cmp(a));
    largest_first.dedup();

    let mut breakdown = Breakdown::zeroed(denominations);
    let mut remaining = amount;
    for coin in largest_first {
        let take = remaining / coin;
        breakdown.add_many(coin, take);
        remaining -= take * coin;
    }

    if remaining > 0 {
        return Solution::Unreachable;
    }

    let total = breakdown.coins();
    Solution::Solved { breakdown, total }
}
