// src/core/mod.rs
//! HTTP client, configuration and local persistence

pub mod api_client;
pub mod config_manager;
pub mod fs_ops;
pub mod preferences;
pub mod token_store;

pub use api_client::ApiClient;
pub use config_manager::ConfigManager;
pub use fs_ops::FsOps;
pub use preferences::{PreferenceStore, Preferences};
pub use token_store::TokenStore;
