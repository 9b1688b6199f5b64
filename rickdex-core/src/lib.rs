// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Rickdex Core
//!
//! Core types, models, and errors for the Rickdex application.
//!
//! This crate provides the foundational abstractions used across all other
//! Rickdex crates, including:
//!
//! - Domain models (characters, page envelopes)
//! - The request error taxonomy
//!
//! ## Key Types
//!
//! ### Models
//! - [`Character`] - One catalog entry, identified by its `id`
//! - [`CharacterStatus`] - Life status, the filterable dimension
//! - [`Gender`] - Gender
//! - [`LocationRef`] - Named reference to an origin or location
//! - [`CharacterPage`] - One page of results plus pagination metadata
//! - [`PageInfo`] - Pagination metadata (`next` absent on the last page)
//!
//! ### Errors
//! - [`NetworkError`] - Transport-level failure classification
//! - [`ParsingError`] - Response decoding failure
//! - [`RequestError`] - Tagged union over the two, by origin

pub mod error;
pub mod models;

// Re-export error types
pub use error::{NetworkError, ParsingError, RequestError};

// Re-export all model types
pub use models::{Character, CharacterPage, CharacterStatus, Gender, LocationRef, PageInfo};
