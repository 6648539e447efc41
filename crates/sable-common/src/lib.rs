//! Common utilities for the Sable selector builder.
//!
//! This crate provides shared infrastructure used by the builder crates:
//! - **Warning System** - colored, deduplicated terminal output for
//!   inputs that are accepted but produce questionable selectors

pub mod warning;
