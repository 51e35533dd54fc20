//! Demo data dump.

use anyhow::Result;

use profilecraft_infrastructure::demo_portfolio;

/// Prints the seeded demo portfolio as pretty JSON.
pub fn run() -> Result<()> {
    let portfolio = demo_portfolio();
    println!("{}", serde_json::to_string_pretty(&portfolio)?);
    Ok(())
}
