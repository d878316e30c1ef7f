//! Prints greedy and minimum-coin breakdowns for two fixed scenarios.

use changemaker::{greedy_change, min_coin_change, Result};

fn main() -> Result<()> {
    let custom = [1, 3, 4];
    println!("Custom coin set [1, 3, 4], amount = 6");
    println!("Greedy: {}", greedy_change(6, &custom)?);
    println!("DP:     {}", min_coin_change(6, &custom)?);
    println!();

    let standard = [50, 25, 10, 5, 2, 1];
    println!("Standard coin set [50, 25, 10, 5, 2, 1], amount = 113");
    println!("Greedy: {}", greedy_change(113, &standard)?);
    println!("DP:     {}", min_coin_change(113, &standard)?);

    Ok(())
}
