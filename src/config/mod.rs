/// Database configuration and connection management
pub mod database;

/// Menu seed loading from TOML files
pub mod menu;

/// Application settings from config.toml
pub mod settings;
