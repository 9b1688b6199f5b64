// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Rickdex Fetch
//!
//! HTTP transport, decoding, and the request pipeline for the Rickdex
//! application.
//!
//! The layering mirrors the request path:
//!
//! - [`request`] - Typed request descriptions ([`ApiRequest`])
//! - [`transport`] - One HTTP call per invocation ([`Transport`],
//!   [`HttpTransport`])
//! - [`decoder`] - Raw bytes into typed structures
//! - [`pipeline`] - The two composed into a single typed operation
//!   ([`RequestClient`])
//!
//! ## Example
//!
//! ```ignore
//! use rickdex_core::CharacterPage;
//! use rickdex_fetch::{ApiRequest, RequestClient};
//!
//! let client = RequestClient::new()?;
//! let page: CharacterPage = client
//!     .perform(&ApiRequest::character_page(1, None))
//!     .await?;
//! ```

pub mod decoder;
pub mod pipeline;
pub mod request;
pub mod transport;

// Re-export key types at crate root
pub use decoder::decode;
pub use pipeline::RequestClient;
pub use request::{ApiRequest, Method};
pub use transport::{DEFAULT_BASE_URL, HttpTransport, Transport};
