//! Configuration module for the matching pipeline
//!
//! This module provides the `MatchConfig` struct and its builder for
//! configuring network-performing components with validation and sensible
//! defaults. User agents and request bounds live here instead of any
//! shared mutable state.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::MatchConfigBuilder;
pub use types::MatchConfig;
