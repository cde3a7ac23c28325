//! Tour of Schools E2E Test Harness
//!
//! Runs the mock backend in-process on an ephemeral port and lets the
//! scenario tests under `tests/` drive the client crate against it over
//! real HTTP. Each test gets its own server, so the seeded collection is
//! fresh per scenario.

pub mod error;
pub mod server;

pub use error::{E2eError, E2eResult};
pub use server::ServerHandle;
