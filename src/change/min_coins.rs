use crate::change::{validate_denominations, ChangeBreakdown, Result};
use crate::error::Error;

/// Makes change for `amount` using the minimum number of coins.
///
/// The coin change problem here is the "unbounded" variant, meaning each
/// denomination can be used any number of times. A bottom-up table records
/// the optimal coin count for every amount up to the target, along with the
/// denomination that achieved it; the breakdown is then reconstructed by
/// walking those choices back to zero.
///
/// Denominations are tried in input order during each relaxation and the
/// first strict improvement wins, so the reconstructed breakdown is
/// reproducible for a fixed input ordering. Amounts that no combination of
/// denominations can reach fail with [`Error::NoSolution`] rather than
/// producing a partial result.
///
/// # Examples
///
/// ```
/// use changemaker::min_coin_change;
///
/// // Greedy would take 4 + 1 + 1; the optimum is 3 + 3.
/// let breakdown = min_coin_change(6, &[1, 3, 4]).unwrap();
/// assert_eq!(breakdown.count_of(3), 2);
/// assert_eq!(breakdown.coin_count(), 2);
///
/// // 7 cannot be formed from [2, 4].
/// assert!(min_coin_change(7, &[2, 4]).is_err());
/// ```
pub fn min_coin_change(amount: usize, denominations: &[usize]) -> Result<ChangeBreakdown> {
    validate_denominations(denominations)?;

    // min_coins[i] is the optimal coin count for amount i, None while i is
    // unreachable. last_coin[i] is the denomination that achieved it.
    let mut min_coins: Vec<Option<usize>> = vec![None; amount + 1];
    let mut last_coin = vec![0usize; amount + 1];
    min_coins[0] = Some(0);

    for i in 1..=amount {
        for &coin in denominations {
            if coin > i {
                continue;
            }
            if let Some(below) = min_coins[i - coin] {
                let candidate = below + 1;
                if min_coins[i].map_or(true, |best| candidate < best) {
                    min_coins[i] = Some(candidate);
                    last_coin[i] = coin;
                }
            }
        }
    }

    let optimum = min_coins[amount].ok_or(Error::NoSolution { amount })?;
    log::trace!(
        "min coin change for {} reachable with {} coins",
        amount,
        optimum
    );

    // Reachability was checked above, so every index visited by the walk
    // has a recorded last coin and the walk reaches zero.
    let mut breakdown = ChangeBreakdown::new();
    let mut i = amount;
    while i > 0 {
        let coin = last_coin[i];
        breakdown.add(coin, 1);
        i -= coin;
    }

    Ok(breakdown)
}

/// Computes the minimum number of coins needed to form `amount`, without
/// reconstructing the breakdown.
///
/// Cheaper than [`min_coin_change`] when only the count matters, since no
/// choice table is kept. Agrees with `min_coin_change(..).coin_count()` for
/// every reachable amount and fails with [`Error::NoSolution`] for
/// unreachable ones.
pub fn min_coin_count(amount: usize, denominations: &[usize]) -> Result<usize> {
    validate_denominations(denominations)?;

    let mut min_coins: Vec<Option<usize>> = vec![None; amount + 1];
    min_coins[0] = Some(0);

    for i in 1..=amount {
        for &coin in denominations {
            if coin > i {
                continue;
            }
            if let Some(below) = min_coins[i - coin] {
                let candidate = below + 1;
                if min_coins[i].map_or(true, |best| candidate < best) {
                    min_coins[i] = Some(candidate);
                }
            }
        }
    }

    min_coins[amount].ok_or(Error::NoSolution { amount })
}

/// Computes the number of distinct coin multisets forming `amount`.
///
/// Iterating denominations in the outer loop counts each multiset once
/// regardless of coin order. An unreachable amount is a legitimate count of
/// 0, not an error; `amount = 0` has exactly one way (no coins). Duplicate
/// denominations inflate the count, as each copy is treated as a distinct
/// coin.
///
/// # Examples
///
/// ```
/// use changemaker::count_change_ways;
///
/// // 5 = 1+1+1+1+1 = 1+1+1+2 = 1+2+2 = 5
/// assert_eq!(count_change_ways(5, &[1, 2, 5]).unwrap(), 4);
/// ```
pub fn count_change_ways(amount: usize, denominations: &[usize]) -> Result<usize> {
    validate_denominations(denominations)?;

    let mut ways = vec![0usize; amount + 1];
    ways[0] = 1;

    for &coin in denominations {
        for i in coin..=amount {
            ways[i] += ways[i - coin];
        }
    }

    Ok(ways[amount])
}
