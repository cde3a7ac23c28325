//! Tour of Schools Client Library
//!
//! The data-access layer of the tutorial: a failure-tolerant REST client
//! ([`SchoolService`]), an append-only notification sink ([`MessageLog`]),
//! and the view controllers that consume them.
//!
//! Every transport failure is absorbed inside [`SchoolService`] and turned
//! into a benign fallback value plus a log entry, so controllers never
//! handle transport errors directly. The one exception is the not-found
//! answer on a single-entity fetch, which propagates to the caller.

pub mod controllers;
pub mod messages;
pub mod service;

pub use controllers::{Dashboard, SchoolDetail, SchoolList, SchoolSearch};
pub use messages::MessageLog;
pub use service::{DeleteTarget, SchoolService};
