// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Rickdex Store
//!
//! Catalog browsing session state for the Rickdex application.
//!
//! This crate provides:
//!
//! - **[`CatalogSession`]**: the pagination/filter state machine. It owns
//!   the accumulated character collection, drives paged fetching through
//!   the request pipeline, and applies the status filter client-side over
//!   already-fetched data.
//! - **[`CatalogSnapshot`]**: the read-only view published to consumers.
//!
//! ## Usage
//!
//! ```ignore
//! use rickdex_fetch::RequestClient;
//! use rickdex_store::CatalogSession;
//!
//! let session = CatalogSession::new(RequestClient::new()?);
//!
//! // Fetch the first page and read the published state
//! session.fetch_next_page().await;
//! let snapshot = session.snapshot().await;
//!
//! // Subscribe to changes
//! let mut rx = session.subscribe();
//! while rx.changed().await.is_ok() {
//!     println!("{} visible", rx.borrow().visible.len());
//! }
//! ```

pub mod session;

pub use session::{CatalogSession, CatalogSnapshot};
#[cfg(test)]
mod session_tests;
