//! Shared test utilities for the keypath workspace.
//!
//! This crate provides settings-file fixtures so crate test suites do not
//! each hand-roll temporary directories. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`settings`]: [`SettingsDir`] and sample settings sources

pub mod settings;

pub use settings::SettingsDir;
