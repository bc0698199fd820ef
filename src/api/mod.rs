//! Unsplash API module.
//!
//! This module provides:
//! - HTTP client for the Unsplash REST API
//! - Rate-limit header tracking
//! - API response types

pub mod client;
pub mod ratelimit;
pub mod types;

pub use client::{total_pages, UnsplashApi};
pub use ratelimit::{RateLimit, RateLimitState};
pub use types::*;
