//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and session assembly (game config plus
//! factories, either built-in or loaded from content files) that any
//! front-end can hand to [`runtime::Runtime::builder`].
pub mod builder;
pub mod config;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::RuntimeConfig;
