//! Pokepay Partner API client library.
//!
//! Typed request and response definitions for the Pokepay partner
//! payment-platform API, plus a [`Client`] that prepares calls and hands them
//! to a caller-supplied [`Dispatcher`].
//!
//! # Architecture
//!
//! - **Requests**: one struct per endpoint, built with a checked builder
//! - **Models**: serde types for every response shape
//! - **Client**: path rendering, call stamping and response decoding
//! - **Config**: credentials and settings from `POKEPAY_*` environment variables
//! - **Crypto**: AES-CBC sealing of call envelopes with the client secret
//!
//! Transport and retries are not part of this crate; they live behind the
//! [`Dispatcher`] trait.

pub mod client;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod requests;

pub use client::{ApiResponse, Client, Dispatcher, PreparedRequest, RawResponse};
pub use config::Config;
pub use crypto::{Cipher, SealedRequest};
pub use error::Error;
pub use requests::{Method, Request};
