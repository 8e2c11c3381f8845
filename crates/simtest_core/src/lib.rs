//! simtest_core: transport-agnostic core for simulator integration tests.
//!
//! Design goals:
//! - Pure, testable logic (no ROS deps).
//! - Transport behind the `Node` / `NodeFactory` traits.
//! - Non-fatal outcomes are values; contract violations are errors.

pub mod error;

/// Wait configuration (defaults + `SIMTEST_*` environment overrides).
pub mod config;

/// Entity state DTOs (`GetEntityState` request/response, poses).
pub mod entity;

/// Communication endpoint traits and the scoped node guard.
pub mod node;

/// Poll-with-deadline primitives and the service readiness wait.
pub mod wait;

/// Waiting for a robot to be reported by the simulator.
pub mod spawn;

pub use config::WaitConfig;
pub use entity::{get_entity_state, EntityState, Point, Pose, Quaternion};
pub use error::{CoreError, Result};
pub use node::{Node, NodeError, NodeFactory, NodeFuture, NodeGuard};
pub use spawn::{wait_for_spawned_robot, SpawnWaiter, WaitOutcome};
