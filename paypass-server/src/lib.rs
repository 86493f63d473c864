//! PayPass Backend
//!
//! Mock backend for the PayPass car-wash booking app. Serves static
//! service packages and washing-place listings over a JSON HTTP API.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;

pub use config::{Profile, ServerConfig};
pub use error::{Result, ServerError};
