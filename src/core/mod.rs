//! Core components of the `stockwatch-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FhClient`], its builder and the lazily built [`SharedClient`].
//! - The primary [`FhError`] type.
//! - Retry and cache policies.
//! - The [`NewsService`] seam used by news aggregation.

/// The main client (`FhClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FhError`) for the crate.
pub mod error;
/// Service traits for abstracting upstream data sources.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FhClient`
pub use client::{Backoff, CacheMode, FhClient, FhClientBuilder, RetryConfig, SharedClient};
pub use error::FhError;
pub use services::{FetchOptions, NewsFuture, NewsService};
