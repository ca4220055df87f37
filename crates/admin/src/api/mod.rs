//! Resource methods on [`crate::AdminClient`].
//!
//! One module per backend resource; each adds an `impl AdminClient`
//! block with the typed operations for that screen.

mod banners;
mod categories;
mod coupons;
mod dashboard;
mod orders;
mod products;
mod users;
