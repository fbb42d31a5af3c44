//! # Pubgate Common Library
//!
//! Shared code for every host of the readiness engine:
//! - Error types
//! - TOML configuration loading and path resolution
//! - Engine event types and the broadcast EventBus
//! - Timestamp helpers

pub mod config;
pub mod error;
pub mod events;
pub mod time;

pub use error::{Error, Result};
