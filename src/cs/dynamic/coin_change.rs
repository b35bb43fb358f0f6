use log::{debug, trace};

/// Per-denomination coin counts for one amount.
///
/// Every denomination the solver was given appears exactly once, in the
/// order it was given, including those with a count of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    entries: Vec<(usize, usize)>,
}

impl Breakdown {
    pub(crate) fn zeroed(denominations: &[usize]) -> Self {
        let mut entries: Vec<(usize, usize)> = Vec::with_capacity(denominations.len());
        for &coin in denominations {
            if !entries.iter().any(|&(d, _)| d == coin) {
                entries.push((coin, 0));
            }
        }
        Self { entries }
    }

    fn add(&mut self, coin: usize) {
        self.add_many(coin, 1);
    }

    pub(crate) fn add_many(&mut self, coin: usize, count: usize) {
        if let Some(entry) = self.entries.iter_mut().find(|(d, _)| *d == coin) {
            entry.1 += count;
        }
    }

    /// Number of `denomination` coins used, or `None` if it was not part of
    /// the coin set.
    pub fn count(&self, denomination: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|&&(d, _)| d == denomination)
            .map(|&(_, n)| n)
    }

    /// `(denomination, count)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Pairs with a non-zero count.
    pub fn used(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }

    /// Total number of coins.
    pub fn coins(&self) -> usize {
        self.entries.iter().map(|&(_, n)| n).sum()
    }

    /// Sum of `denomination * count`.
    pub fn value(&self) -> usize {
        self.entries.iter().map(|&(d, n)| d * n).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of a minimum-coin query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// `breakdown` sums to the amount using `total` coins, the fewest possible.
    Solved { breakdown: Breakdown, total: usize },
    /// No combination of the denominations sums exactly to the amount.
    Unreachable,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved { .. })
    }

    pub fn total(&self) -> Option<usize> {
        match self {
            Solution::Solved { total, .. } => Some(*total),
            Solution::Unreachable => None,
        }
    }

    pub fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            Solution::Solved { breakdown, .. } => Some(breakdown),
            Solution::Unreachable => None,
        }
    }
}

/// Filled minimum-coin tables for every amount in `0..=max_amount`.
///
/// `best[i]` is the fewest coins summing to `i` (`None` when unreachable) and
/// `choice[i]` the denomination that achieved it. Building once and querying
/// many amounts avoids refilling the table per query.
#[derive(Debug, Clone)]
pub struct ChangeTable {
    denominations: Vec<usize>,
    best: Vec<Option<usize>>,
    choice: Vec<Option<usize>>,
}

impl ChangeTable {
    /// Fills the tables bottom-up in `O(max_amount * denominations.len())`.
    ///
    /// Denominations are tried in the order given and an entry is only
    /// replaced by a strictly smaller count, so on ties the earliest
    /// denomination wins.
    pub fn build(max_amount: usize, denominations: &[usize]) -> Self {
        let mut best: Vec<Option<usize>> = vec![None; max_amount + 1];
        let mut choice: Vec<Option<usize>> = vec![None; max_amount + 1];
        best[0] = Some(0);

        // best[i] only reads smaller indices, so ascending order is required.
        for i in 1..=max_amount {
            for &coin in denominations {
                if coin == 0 || coin > i {
                    continue;
                }
                let Some(prev) = best[i - coin] else {
                    continue;
                };
                let candidate = prev + 1;
                if best[i].map_or(true, |current| candidate < current) {
                    best[i] = Some(candidate);
                    choice[i] = Some(coin);
                }
            }
        }

        debug!(
            "filled change table up to {} over {} denominations",
            max_amount,
            denominations.len()
        );

        Self {
            denominations: denominations.to_vec(),
            best,
            choice,
        }
    }

    pub fn max_amount(&self) -> usize {
        self.best.len() - 1
    }

    pub fn denominations(&self) -> &[usize] {
        &self.denominations
    }

    /// Fewest coins summing to `amount`; `None` if unreachable or beyond the table.
    pub fn min_coins(&self, amount: usize) -> Option<usize> {
        self.best.get(amount).copied().flatten()
    }

    /// Reconstructs the breakdown for `amount` by following `choice` back to 0.
    ///
    /// Returns `None` only when `amount > self.max_amount()`.
    pub fn solution(&self, amount: usize) -> Option<Solution> {
        let best = *self.best.get(amount)?;
        let Some(total) = best else {
            trace!("amount {} is unreachable", amount);
            return Some(Solution::Unreachable);
        };

        let mut breakdown = Breakdown::zeroed(&self.denominations);
        let mut remaining = amount;
        // choice[0] is never set, and every reachable i > 0 has a choice.
        while let Some(coin) = self.choice[remaining] {
            breakdown.add(coin);
            remaining -= coin;
        }
        debug_assert_eq!(remaining, 0);
        debug_assert_eq!(breakdown.coins(), total);

        trace!("amount {} reconstructed with {} coins", amount, total);
        Some(Solution::Solved { breakdown, total })
    }
}

/// Finds the fewest coins summing to `amount` and which coins they are.
///
/// Each denomination may be used any number of times. When several
/// breakdowns share the minimum count, the one reached through the earliest
/// denomination in `denominations` is returned, so the result is fully
/// determined by the order of the input. An empty coin set solves only 0.
///
/// # Examples
///
/// ```
/// use coinchange::{solve, Solution};
///
/// // Largest-first would take 50 + 6 x 2 (seven coins).
/// let solution = solve(62, &[50, 20, 2, 1]);
/// assert_eq!(solution.total(), Some(4));
///
/// let breakdown = solution.breakdown().unwrap();
/// assert_eq!(breakdown.count(20), Some(3));
/// assert_eq!(breakdown.count(2), Some(1));
/// assert_eq!(breakdown.count(50), Some(0));
///
/// // Odd amounts cannot be made without a unit coin.
/// assert_eq!(solve(3, &[50, 20, 2]), Solution::Unreachable);
/// ```
pub fn solve(amount: usize, denominations: &[usize]) -> Solution {
    match ChangeTable::build(amount, denominations).solution(amount) {
        Some(solution) => solution,
        // The table always covers its own max amount.
        None => Solution::Unreachable,
    }
}

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// The coin change problem here is the "unbounded" variant, meaning each coin
/// can be used any number of times. Only the count is kept, so no choice
/// table is allocated. Returns `None` if it's impossible to form the
/// `amount` using the given `coins`.
///
/// # Examples
///
/// ```
/// use coinchange::min_coins_for_change;
///
/// // Minimum 3 coins: 6 + 6 + 6 = 18
/// let coins = vec![1, 6, 10];
/// assert_eq!(min_coins_for_change(&coins, 18), Some(3));
///
/// // Impossible to form 7 from [2,4], so returns None
/// let coins2 = vec![2, 4];
/// assert_eq!(min_coins_for_change(&coins2, 7), None);
/// ```
pub fn min_coins_for_change(coins: &[usize], amount: usize) -> Option<usize> {
    if amount == 0 {
        return Some(0);
    }
    if coins.is_empty() {
        return None;
    }

    let mut dp: Vec<Option<usize>> = vec![None; amount + 1];
    dp[0] = Some(0);

    // Coin-major order is fine here since only counts are kept.
    for &coin in coins.iter().filter(|&&c| c > 0) {
        for curr_amount in coin..=amount {
            if let Some(prev) = dp[curr_amount - coin] {
                let candidate = prev + 1;
                dp[curr_amount] = Some(dp[curr_amount].map_or(candidate, |c| c.min(candidate)));
            }
        }
    }

    dp[amount]
}
