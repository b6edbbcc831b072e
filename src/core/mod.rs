//! Core components of the `finboard` crate.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`BoardClient`] and its builder.
//! - The primary [`BoardError`] type.
//! - Shared data models like [`Candle`] and the request parameter enums.

/// The main client (`BoardClient`), builder, and configuration.
pub mod client;
/// The primary error type (`BoardError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules (e.g., `Candle`, `Range`).
pub mod models;

// convenient re-exports so most code can just `use crate::core::BoardClient`
pub use client::{BoardClient, BoardClientBuilder};
pub use error::BoardError;
pub use models::{Candle, Interval, Range};
