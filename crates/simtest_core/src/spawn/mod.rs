//! simtest_core::spawn
//!
//! Waiting for a simulated robot to show up in the simulator's entity state.
//!
//! Flow: create node -> wait for the entity state service -> send one request
//! -> step it until it completes or the deadline passes -> release the node.

mod phase;
mod waiter;

pub use phase::{advance, WaitPhase, ALL_PHASES};
pub use waiter::{wait_for_spawned_robot, SpawnWaiter, WaitOutcome};
