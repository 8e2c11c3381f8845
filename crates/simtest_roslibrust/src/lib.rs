//! simtest_roslibrust
//!
//! rosbridge-facing adapter built on top of roslibrust.
//! Implements the `simtest_core` node traits so spawn waits can run against a
//! live simulator, while keeping wait semantics in `simtest_core`.

pub mod error;
pub mod names;

#[cfg(feature = "roslibrust")]
pub mod interfaces;
#[cfg(feature = "roslibrust")]
pub mod transport;

#[cfg(feature = "roslibrust")]
pub use interfaces::SimInterfaces;
#[cfg(feature = "roslibrust")]
pub use transport::roslibrust::{RosbridgeNode, RosbridgeNodeFactory};

// Re-export core types adapter users will commonly need
pub use simtest_core::error::{CoreError, Result};
pub use simtest_core::{SpawnWaiter, WaitConfig, WaitOutcome};
