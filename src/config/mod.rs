//! Configuration management module
//!
//! Responsible for loading and validating environment-sourced settings

pub mod settings;

pub use settings::Settings;
