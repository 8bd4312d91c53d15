// src/lib.rs
//! Client for the internship job-board API: typed requests, uniform error
//! normalization, the signed-in session and persisted listing preferences

pub mod applicant;
pub mod auth;
pub mod cli;
pub mod core;
pub mod display;
pub mod environment;
pub mod error;
pub mod filters;
pub mod forms;
pub mod query;
pub mod types;
pub mod utils;

pub use auth::AuthSession;
pub use crate::core::{ApiClient, ConfigManager};
pub use error::{ClientError, ClientResult};
