use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{ChangeError, Result};

/// The coin set used when none is configured: 50, 20, 2 and 1.
///
/// Greedy selection is not optimal for this set (62 = 50 + 6 x 2 uses seven
/// coins, 3 x 20 + 2 uses four).
pub const DEFAULT_DENOMINATIONS: [usize; 4] = [50, 20, 2, 1];

/// An ordered set of distinct, positive coin values.
///
/// Order matters: when several breakdowns reach the same minimum, the solver
/// keeps the one found with the earliest denomination in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations {
    values: Vec<usize>,
}

impl Denominations {
    /// Validates and wraps a list of coin values.
    ///
    /// # Errors
    ///
    /// * `EmptyDenominations` if `values` is empty
    /// * `ZeroDenomination` if any value is 0
    /// * `DuplicateDenomination` if a value appears twice
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::Denominations;
    ///
    /// let coins = Denominations::new(vec![25, 10, 5, 1]).unwrap();
    /// assert_eq!(coins.largest(), 25);
    /// assert!(Denominations::new(vec![5, 5]).is_err());
    /// ```
    pub fn new(values: Vec<usize>) -> Result<Self> {
        if values.is_empty() {
            return Err(ChangeError::EmptyDenominations);
        }

        let mut seen = HashSet::with_capacity(values.len());
        for &value in &values {
            if value == 0 {
                return Err(ChangeError::ZeroDenomination);
            }
            if !seen.insert(value) {
                return Err(ChangeError::DuplicateDenomination(value));
            }
        }

        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }

    pub fn largest(&self) -> usize {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// A unit coin makes every amount reachable.
    pub fn has_unit(&self) -> bool {
        self.values.contains(&1)
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self {
            values: DEFAULT_DENOMINATIONS.to_vec(),
        }
    }
}

impl FromStr for Denominations {
    type Err = ChangeError;

    /// Parses a comma-separated list such as `"50,20,2,1"`.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| ChangeError::invalid_denomination(part))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(values)
    }
}

impl fmt::Display for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}
