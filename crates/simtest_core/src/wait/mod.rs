//! simtest_core::wait
//!
//! Poll-with-deadline building blocks.
//!
//! Key ideas:
//! - `Deadline` is a wall-clock budget on the tokio clock
//! - `PendingCall::spin_once` makes one bounded progress step on an in-flight request
//! - the caller owns the loop and re-checks the deadline after every step

mod deadline;
mod pending;
mod service;

pub use deadline::Deadline;
pub use pending::PendingCall;
pub use service::{wait_for_service, ServiceClient};
