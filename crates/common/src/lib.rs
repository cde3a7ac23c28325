//! Tour of Schools Common Library
//!
//! Shared types and errors for the Tour of Schools tutorial system.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Tour of Schools version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen address for the mock backend
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";

/// Default base URL the client talks to
pub fn default_base_url() -> String {
    format!("http://{}", DEFAULT_SERVER_ADDR)
}
