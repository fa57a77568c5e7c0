//! Strategy demo: the same calculator with two tax policies.
//!
//! Run with: cargo run --bin strategy

use anyhow::{ensure, Result};
use colored::Colorize;
use design_patterns::logging;
use design_patterns::strategy::{NyTaxStrategy, TaxCalculator, TxTaxStrategy};

fn main() -> Result<()> {
    logging::init();
    println!("{}", "=== Strategy ===".bold());

    let income = 60_000.0;

    let calculator = TaxCalculator::new(Box::new(NyTaxStrategy::default()));
    let ny = calculator.tax_amount(income);
    println!("NY tax on {}: {}", income, ny);
    ensure!(ny == 6000.0, "NY tax should be 6000, got {}", ny);

    let calculator = TaxCalculator::new(Box::new(TxTaxStrategy));
    let tx = calculator.tax_amount(income);
    println!("TX tax on {}: {}", income, tx);
    ensure!(tx == 0.0, "TX tax should be 0, got {}", tx);

    println!("{}", "Both strategies agree with expectations".green());
    Ok(())
}
