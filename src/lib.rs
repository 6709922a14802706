//! # mailboxlayer Client
//! Asynchronous wrapper around the mailboxlayer email verification HTTP API. One call to [`Client::check`] sends one request and returns a [`Verdict`] describing the address.
//!
//! ## Audience and uses
//! For Rust developers who want to vet addresses at sign-up or before a mailing: configure with [`ClientBuilder`], call [`Client::check`], then act on the flags and score in the returned [`Verdict`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`; timeouts, proxies and TLS settings belong to the transport you configure on the builder.
//!
//! ## Out of scope
//! No batching, caching, rate limiting or retries. Every call goes to the service and every failure is returned to the caller as-is.
//!
//! ## Errors
//! Transport failures surface as [`Error::Request`], bodies that do not match the expected shape as [`Error::Json`], and errors reported by the service as [`Error::Api`] carrying an [`ApiError`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use mailboxlayer_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailboxlayer_client::Error> {
//!     let client = Client::new("your-access-key")?;
//!     let verdict = client.check("someone@gmail.com").await?;
//!     println!("valid format: {}, score: {}", verdict.format_valid, verdict.score);
//!
//!     if let Some(suggestion) = verdict.suggestion() {
//!         println!("Did you mean {suggestion}?");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::{ApiError, Verdict};

/// Result type alias for mailboxlayer operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
