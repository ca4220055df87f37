//! Command handlers, one module per dashboard screen.

pub mod banners;
pub mod categories;
pub mod coupons;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod session;
pub mod users;

use serde::Serialize;

/// Print a value the way the dashboard rendered a table: as readable
/// JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
