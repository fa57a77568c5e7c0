//! Adapter demo: two customer shapes behind one interface.
//!
//! Run with: cargo run --bin adapter

use anyhow::{ensure, Result};
use colored::Colorize;
use design_patterns::adapter::{
    Customer, LegacyAdapter, LegacyCustomer, ThirdPartyAdapter, ThirdPartyCustomer,
};
use design_patterns::logging;

fn main() -> Result<()> {
    logging::init();
    println!("{}", "=== Adapter ===".bold());

    let customer_a = LegacyAdapter::new(LegacyCustomer::new("Bob", "Smith", "555-321-9876"));
    let customer_b =
        ThirdPartyAdapter::new(ThirdPartyCustomer::new("Jackie Crusoe", "555", "777-5432"));

    // Both are used only through the Customer trait
    let customers: Vec<&dyn Customer> = vec![&customer_a, &customer_b];
    for customer in &customers {
        println!("{}", customer.name());
        println!("{}", customer.phone());
    }

    ensure!(customer_a.name() == "Bob Smith", "unexpected legacy name");
    ensure!(customer_a.phone() == "555-321-9876", "unexpected legacy phone");
    ensure!(customer_b.name() == "Jackie Crusoe", "unexpected third-party name");
    ensure!(customer_b.phone() == "555-777-5432", "unexpected third-party phone");

    println!("{}", "All customers adapted".green());
    Ok(())
}
