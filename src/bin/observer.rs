//! Observer demo: a town message board and its citizens.
//!
//! Run with: cargo run --bin observer

use anyhow::{ensure, Context, Result};
use colored::Colorize;
use design_patterns::logging;
use design_patterns::observer::{MessageBoard, Subject, TownCitizen};

fn main() -> Result<()> {
    logging::init();
    println!("{}", "=== Observer ===".bold());

    let board = MessageBoard::new();
    let bob = TownCitizen::new("Bob", &board);
    let jane = TownCitizen::new("Jane", &board);
    let willy = TownCitizen::new("Willy", &board);

    board.set_latest_message(
        "This is the new notification system for Townville \
         from the Townville Police department.",
    );

    board.set_latest_message("We're looking for a suspect, his name is Bob.");
    board.remove(&bob).context("Bob was not subscribed")?;

    board.set_latest_message("We're also looking for Jane.");
    board.remove(&jane).context("Jane was not subscribed")?;

    board.set_latest_message("Have you seen Willy? Wanted in connection to Bob and Jane");
    board.remove(&willy).context("Willy was not subscribed")?;

    // Nobody is left to see this one
    board.set_latest_message("We should probably stop notifying our suspects.");

    let total = [&bob, &jane, &willy]
        .iter()
        .map(|citizen| citizen.notification_count())
        .sum::<usize>();
    ensure!(bob.notification_count() == 2, "Bob should see 2 messages");
    ensure!(jane.notification_count() == 3, "Jane should see 3 messages");
    ensure!(willy.notification_count() == 4, "Willy should see 4 messages");
    ensure!(total == 9, "expected 9 notifications, got {}", total);

    println!("{}", format!("{} notifications delivered", total).green());
    Ok(())
}
