//! Counting the ways to make change for an amount.
//!
//! A combination is a multiset of coins: `5 + 1` and `1 + 5` are the same way.
//! Both counters enumerate each multiset exactly once by only ever spending
//! coins in non-increasing order, which is what the `(remaining, index)` state
//! of the memoized counter encodes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while counting coin combinations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoinError {
    /// A zero denomination admits infinitely many combinations.
    #[error("Coin denominations must be positive; found 0 at index {0}")]
    ZeroDenomination(usize),
    /// The amount does not fit the platform's address space, or the table
    /// needed to count it cannot be allocated.
    #[error("Amount {0} is too large to count on this platform")]
    AmountTooLarge(i64),
    /// The number of combinations does not fit in a `u64`.
    #[error("Number of combinations for amount {0} exceeds u64::MAX")]
    CountOverflow(i64),
}

/// Trait implemented by the different combination-counting strategies.
///
/// Every implementation must return the same answer for the same input; they
/// differ only in how the sub-problems are evaluated.
pub trait CombinationCounter {
    /// Number of multisets of `coins` summing exactly to `amount`.
    ///
    /// A negative `amount` has zero combinations and `0` has exactly one (the
    /// empty multiset), regardless of the coin set.
    ///
    /// # Errors
    ///
    /// Returns `CoinError::ZeroDenomination` if a positive amount is paired
    /// with a zero coin, `CoinError::AmountTooLarge` if the working table for
    /// `amount` cannot be allocated and `CoinError::CountOverflow` if the
    /// answer does not fit in a `u64`.
    fn count(&self, amount: i64, coins: &[u32]) -> Result<u64, CoinError>;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Selects a `CombinationCounter` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CounterStrategy {
    /// Top-down reduction with a per-call memo table.
    #[default]
    Memoized,
    /// Bottom-up table over amounts.
    Tabulated,
}

impl CounterStrategy {
    /// Returns the counter implementing this strategy.
    pub fn counter(self) -> Box<dyn CombinationCounter> {
        match self {
            Self::Memoized => Box::new(MemoizedCounter::new()),
            Self::Tabulated => Box::new(TabulatedCounter::new()),
        }
    }
}

/// Input reduced to the cases the counters actually have to evaluate.
enum Prepared {
    /// The answer is known without evaluating anything.
    Known(u64),
    /// A positive target and distinct denominations, largest first.
    Ready { target: usize, coins: Vec<usize> },
}

fn prepare(amount: i64, coins: &[u32]) -> Result<Prepared, CoinError> {
    if amount < 0 {
        return Ok(Prepared::Known(0));
    }
    if amount == 0 {
        return Ok(Prepared::Known(1));
    }
    if let Some(index) = coins.iter().position(|&c| c == 0) {
        return Err(CoinError::ZeroDenomination(index));
    }
    let target = usize::try_from(amount).map_err(|_| CoinError::AmountTooLarge(amount))?;

    let mut denominations: Vec<usize> = coins.iter().map(|&c| c as usize).collect();
    denominations.sort_unstable_by(|a, b| b.cmp(a));
    denominations.dedup();

    if denominations.is_empty() {
        return Ok(Prepared::Known(0));
    }
    Ok(Prepared::Ready {
        target,
        coins: denominations,
    })
}

/// Memoized "last coin allowed" reduction.
///
/// The state `(remaining, index)` means: ways to pay `remaining` using only
/// `coins[index..]` (coins no larger than the last one spent). It splits into
/// spending `coins[index]` once more or never spending it again:
///
/// `ways(r, i) = ways(r - coins[i], i) + ways(r, i + 1)`
///
/// The memo table is keyed by both fields and lives for one call only.
/// Evaluation runs on an explicit stack, so deep reductions do not grow the
/// call stack.
#[derive(Debug, Clone, Default)]
pub struct MemoizedCounter;

impl MemoizedCounter {
    /// Creates a memoized counter.
    pub fn new() -> Self {
        Self
    }
}

impl CombinationCounter for MemoizedCounter {
    fn count(&self, amount: i64, coins: &[u32]) -> Result<u64, CoinError> {
        let (target, coins) = match prepare(amount, coins)? {
            Prepared::Known(ways) => return Ok(ways),
            Prepared::Ready { target, coins } => (target, coins),
        };

        // Up to one state per amount below the target with a single coin.
        let mut cache: HashMap<(usize, usize), u64> = HashMap::new();
        cache
            .try_reserve(target)
            .map_err(|_| CoinError::AmountTooLarge(amount))?;
        let lookup = |cache: &HashMap<(usize, usize), u64>, state: (usize, usize)| {
            if state.0 == 0 {
                Some(1)
            } else {
                cache.get(&state).copied()
            }
        };

        let mut stack = vec![(target, 0_usize)];
        while let Some(&(remaining, index)) = stack.last() {
            if cache.contains_key(&(remaining, index)) {
                stack.pop();
                continue;
            }

            let spend = remaining.checked_sub(coins[index]).map(|r| (r, index));
            let retire = (index + 1 < coins.len()).then_some((remaining, index + 1));

            let mut pending = false;
            let mut total: u64 = 0;
            for state in [spend, retire].into_iter().flatten() {
                match lookup(&cache, state) {
                    Some(ways) => {
                        total = total
                            .checked_add(ways)
                            .ok_or(CoinError::CountOverflow(amount))?;
                    }
                    None => {
                        stack.push(state);
                        pending = true;
                    }
                }
            }

            if !pending {
                cache.insert((remaining, index), total);
                stack.pop();
            }
        }

        let ways = lookup(&cache, (target, 0)).unwrap_or_default();
        log::debug!(
            "memoized: amount={amount} coins={coins:?} ways={ways} states={}",
            cache.len()
        );
        Ok(ways)
    }

    fn name(&self) -> &'static str {
        "memoized"
    }
}

/// Bottom-up counter over amounts `0..=target`.
///
/// Processing one denomination at a time (outer loop) is what keeps the table
/// counting combinations rather than orderings. Cells that overflow become
/// `None`; since every cell feeding the target is a summand of it, the target
/// overflows exactly when the true count does.
#[derive(Debug, Clone, Default)]
pub struct TabulatedCounter;

impl TabulatedCounter {
    /// Creates a tabulated counter.
    pub fn new() -> Self {
        Self
    }
}

impl CombinationCounter for TabulatedCounter {
    fn count(&self, amount: i64, coins: &[u32]) -> Result<u64, CoinError> {
        let (target, coins) = match prepare(amount, coins)? {
            Prepared::Known(ways) => return Ok(ways),
            Prepared::Ready { target, coins } => (target, coins),
        };

        let mut table: Vec<Option<u64>> = Vec::new();
        table
            .try_reserve_exact(target + 1)
            .map_err(|_| CoinError::AmountTooLarge(amount))?;
        table.resize(target + 1, Some(0));
        table[0] = Some(1);

        for &coin in &coins {
            for current in coin..=target {
                table[current] = match (table[current], table[current - coin]) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
            }
        }

        let ways = table[target].ok_or(CoinError::CountOverflow(amount))?;
        log::debug!("tabulated: amount={amount} coins={coins:?} ways={ways}");
        Ok(ways)
    }

    fn name(&self) -> &'static str {
        "tabulated"
    }
}

/// Number of multisets of `coins` summing exactly to `amount`, using the
/// memoized counter.
///
/// # Errors
///
/// See [`CombinationCounter::count`].
pub fn coin_combinations(amount: i64, coins: &[u32]) -> Result<u64, CoinError> {
    MemoizedCounter::new().count(amount, coins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(amount: i64, coins: &[u32]) -> (u64, u64) {
        (
            MemoizedCounter::new().count(amount, coins).unwrap(),
            TabulatedCounter::new().count(amount, coins).unwrap(),
        )
    }

    #[test]
    fn test_fifteen_cents_pennies_and_nickels() {
        assert_eq!(both(15, &[1, 5]), (4, 4));
    }

    #[test]
    fn test_zero_amount_has_one_way() {
        assert_eq!(both(0, &[]), (1, 1));
        assert_eq!(both(0, &[3, 7]), (1, 1));
        // Even a zero coin is irrelevant when nothing has to be paid.
        assert_eq!(coin_combinations(0, &[0]), Ok(1));
    }

    #[test]
    fn test_no_coins_positive_amount() {
        assert_eq!(both(7, &[]), (0, 0));
    }

    #[test]
    fn test_negative_amount_is_zero_ways() {
        assert_eq!(both(-3, &[1, 2]), (0, 0));
        assert_eq!(coin_combinations(-1, &[0]), Ok(0));
    }

    #[test]
    fn test_unreachable_amount() {
        assert_eq!(both(7, &[2, 4]), (0, 0));
    }

    #[test]
    fn test_duplicates_are_redundant() {
        assert_eq!(both(10, &[5, 1, 5, 1]), both(10, &[1, 5]));
    }

    #[test]
    fn test_zero_denomination_rejected() {
        assert_eq!(
            coin_combinations(5, &[1, 0]),
            Err(CoinError::ZeroDenomination(1))
        );
        assert_eq!(
            TabulatedCounter::new().count(5, &[0]),
            Err(CoinError::ZeroDenomination(0))
        );
    }

    #[test]
    fn test_us_coins_for_a_dollar() {
        assert_eq!(both(100, &[1, 5, 10, 25, 50, 100]), (293, 293));
    }

    #[test]
    fn test_overflow_reported() {
        let coins: Vec<u32> = (1..=60).collect();
        assert_eq!(
            coin_combinations(5_000, &coins),
            Err(CoinError::CountOverflow(5_000))
        );
        assert_eq!(
            TabulatedCounter::new().count(5_000, &coins),
            Err(CoinError::CountOverflow(5_000))
        );
    }

    #[test]
    fn test_large_amount_does_not_exhaust_stack() {
        // One state per amount; a recursive formulation would be 100k frames deep.
        assert_eq!(coin_combinations(100_000, &[1]), Ok(1));
        assert_eq!(coin_combinations(100_000, &[2, 1]), Ok(50_001));
    }

    #[test]
    fn test_unallocatable_amount_rejected() {
        assert_eq!(
            TabulatedCounter::new().count(i64::MAX, &[1]),
            Err(CoinError::AmountTooLarge(i64::MAX))
        );
        assert_eq!(
            MemoizedCounter::new().count(i64::MAX, &[1]),
            Err(CoinError::AmountTooLarge(i64::MAX))
        );
    }

    #[test]
    fn test_strategy_selects_counter() {
        assert_eq!(CounterStrategy::Memoized.counter().name(), "memoized");
        assert_eq!(CounterStrategy::Tabulated.counter().name(), "tabulated");
        assert_eq!(CounterStrategy::default(), CounterStrategy::Memoized);
    }
}
