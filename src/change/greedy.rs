use crate::change::{validate_denominations, ChangeBreakdown, Result};

/// Makes change for `amount` by consuming denominations largest-first.
///
/// Denominations are sorted descending (the caller's slice is left
/// untouched); each one contributes `amount / d` coins and the scan moves on
/// with the remainder. The result is not guaranteed to use the minimum
/// number of coins, and when the set lacks a unit coin the remainder may
/// never reach zero. In that case the returned breakdown is the closest
/// greedy partial result, with `total_value()` short of `amount`. The
/// shortfall is a known limitation of the greedy strategy, not an error.
///
/// Returns an error only for invalid input (empty denomination set, or a
/// zero-valued denomination).
///
/// # Examples
///
/// ```
/// use changemaker::greedy_change;
///
/// // 113 = 50 + 50 + 10 + 2 + 1
/// let breakdown = greedy_change(113, &[50, 25, 10, 5, 2, 1]).unwrap();
/// assert_eq!(breakdown.coin_count(), 5);
/// assert_eq!(breakdown.total_value(), 113);
///
/// // Without a unit coin the result can fall short: 3 is not reachable from [5].
/// let partial = greedy_change(3, &[5]).unwrap();
/// assert!(partial.is_empty());
/// ```
pub fn greedy_change(amount: usize, denominations: &[usize]) -> Result<ChangeBreakdown> {
    validate_denominations(denominations)?;

    let mut sorted = denominations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut breakdown = ChangeBreakdown::new();
    let mut remaining = amount;
    for &denomination in &sorted {
        let count = remaining / denomination;
        if count > 0 {
            breakdown.add(denomination, count);
            remaining -= denomination * count;
        }
    }

    if remaining > 0 {
        log::trace!(
            "greedy change left {} of {} unaccounted",
            remaining,
            amount
        );
    }

    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_exact_change_on_standard_set() {
        // 113 = 50*2 + 10 + 2 + 1
        let breakdown = greedy_change(113, &[50, 25, 10, 5, 2, 1]).unwrap();
        assert_eq!(breakdown.count_of(50), 2);
        assert_eq!(breakdown.count_of(10), 1);
        assert_eq!(breakdown.count_of(2), 1);
        assert_eq!(breakdown.count_of(1), 1);
        assert_eq!(breakdown.coin_count(), 5);
        assert_eq!(breakdown.total_value(), 113);
    }

    #[test]
    fn test_suboptimal_on_non_canonical_set() {
        // Greedy takes 4 + 1 + 1 for 6, though 3 + 3 uses fewer coins.
        let breakdown = greedy_change(6, &[1, 3, 4]).unwrap();
        assert_eq!(breakdown.count_of(4), 1);
        assert_eq!(breakdown.count_of(1), 2);
        assert_eq!(breakdown.coin_count(), 3);
    }

    #[test]
    fn test_zero_amount() {
        assert!(greedy_change(0, &[1, 2, 5]).unwrap().is_empty());
    }

    #[test]
    fn test_partial_result_without_unit_coin() {
        let breakdown = greedy_change(3, &[5]).unwrap();
        assert!(breakdown.is_empty());

        // 13 from [5] stops at 10, leaving 3 unaccounted.
        let breakdown = greedy_change(13, &[5]).unwrap();
        assert_eq!(breakdown.count_of(5), 2);
        assert_eq!(breakdown.total_value(), 10);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let sorted = greedy_change(113, &[50, 25, 10, 5, 2, 1]).unwrap();
        let shuffled = greedy_change(113, &[5, 1, 50, 2, 25, 10]).unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_duplicate_denominations_collapse() {
        let plain = greedy_change(25, &[10, 1]).unwrap();
        let duplicated = greedy_change(25, &[10, 10, 1]).unwrap();
        assert_eq!(plain, duplicated);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            greedy_change(10, &[]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            greedy_change(10, &[1, 0, 5]),
            Err(Error::InvalidInput(_))
        ));
    }
}
