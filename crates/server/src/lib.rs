//! Tour of Schools Mock Backend
//!
//! An in-memory REST backend for the tutorial. Collection state lives for
//! the lifetime of the process; every run starts from the same seed data.

pub mod server;
pub mod store;

pub use server::{serve, ApiServer};
pub use store::SchoolStore;
