//! Shopdesk Core - Shared types library.
//!
//! This crate provides common types used across all Shopdesk components:
//! - `admin` - API client for the e-commerce backend
//! - `cli` - Command-line admin surface
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no HTTP clients. The
//! backend owns every entity; these types are the client-side copies plus
//! the handful of values the client derives itself (discount prices, SKU
//! suffixes).
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, SKUs, emails,
//!   and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
