//! Shopdesk admin API client.
//!
//! The backend owns every entity and all business logic (pricing,
//! inventory, discount validation, order lifecycle enforcement). This
//! crate is the administrative client: typed CRUD over the REST surface,
//! pre-submission form validation, the multi-step product creation
//! workflow, and report export.
//!
//! # Architecture
//!
//! - [`client::AdminClient`] wraps `reqwest` with bearer authentication
//!   and the one-shot 401 refresh flow; it is cheap to clone.
//! - [`api`] adds one `impl AdminClient` block per resource.
//! - [`forms`] validates user input before any request is made.
//! - [`workflow`] is the best-effort product/variants/images creation
//!   sequence.
//! - [`reports`] turns a fetched sales report into CSV, XLSX or PDF.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopdesk_admin::{AdminClient, AdminConfig, auth::FileTokenStore};
//!
//! let config = AdminConfig::from_env()?;
//! let store = FileTokenStore::new(config.token_path.clone());
//! let client = AdminClient::new(&config, Box::new(store))?;
//!
//! let products = client.list_products(Some(1), None).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod reports;
pub mod types;
pub mod workflow;

pub use client::AdminClient;
pub use config::{AdminConfig, ConfigError};
pub use error::ApiError;
