use std::time::Duration;

use tracing::{debug, info, warn};

use super::phase::{advance, WaitPhase};
use crate::config::WaitConfig;
use crate::entity::{get_entity_state, Pose};
use crate::error::{CoreError, Domain, Result};
use crate::node::{wait_node_name, Node, NodeError, NodeFactory, NodeGuard};
use crate::wait::{wait_for_service, Deadline, PendingCall};

/// What the caller gets back from a spawn wait.
///
/// `pose` is `Some` exactly when `spawned` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitOutcome {
    pub spawned: bool,
    pub pose: Option<Pose>,
}

impl WaitOutcome {
    pub fn spawned(pose: Pose) -> Self {
        Self {
            spawned: true,
            pose: Some(pose),
        }
    }

    /// Service never ready, or no reply before the deadline.
    pub fn not_spawned() -> Self {
        Self {
            spawned: false,
            pose: None,
        }
    }

    pub fn into_parts(self) -> (bool, Option<Pose>) {
        (self.spawned, self.pose)
    }
}

/// Waits for robots through nodes created by `F`.
pub struct SpawnWaiter<F: NodeFactory> {
    factory: F,
    config: WaitConfig,
}

impl<F: NodeFactory> SpawnWaiter<F> {
    pub fn new(factory: F, config: WaitConfig) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &WaitConfig {
        &self.config
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Wait using the configured timeout.
    pub async fn wait_for_spawned_robot(&self, robot_name: &str) -> Result<WaitOutcome> {
        wait_with_config(&self.factory, robot_name, &self.config).await
    }

    /// Wait with a per-call timeout; the other settings come from the config.
    pub async fn wait_with_timeout(
        &self,
        robot_name: &str,
        timeout: Duration,
    ) -> Result<WaitOutcome> {
        let config = self.config.clone().with_timeout(timeout);
        wait_with_config(&self.factory, robot_name, &config).await
    }
}

/// Wait up to `timeout` for `robot_name` to be reported by the simulator.
///
/// Returns `Ok` with `spawned == false` when the service never became ready or
/// no reply arrived in time. A reply naming another entity is an error.
///
/// Any reply carrying the requested name counts as spawned; its `success`
/// flag is only logged. Simulators that echo the requested name for unknown
/// entities therefore report them as spawned at the identity pose.
///
/// Errors from the node pass through unchanged when they already are
/// `CoreError`s (see `NodeError`).
pub async fn wait_for_spawned_robot<F: NodeFactory>(
    factory: &F,
    robot_name: &str,
    timeout: Duration,
) -> Result<WaitOutcome> {
    let config = WaitConfig::default().with_timeout(timeout);
    wait_with_config(factory, robot_name, &config).await
}

async fn wait_with_config<F: NodeFactory>(
    factory: &F,
    robot_name: &str,
    config: &WaitConfig,
) -> Result<WaitOutcome> {
    if robot_name.is_empty() {
        return Err(CoreError::invalid_argument(
            Domain::Spawn,
            "robot name must not be empty",
        ));
    }
    config.validate()?;

    info!(robot = robot_name, timeout = ?config.timeout, "Waiting for robot [{robot_name}]...");

    let node_name = wait_node_name(robot_name);
    let node = factory
        .create_node(&node_name)
        .await
        .map_err(|err| err.into_core_error("create node"))?;
    let node = NodeGuard::new(node);

    poll_entity_state(&*node, robot_name, config).await
}

async fn poll_entity_state<N: Node>(
    node: &N,
    robot_name: &str,
    config: &WaitConfig,
) -> Result<WaitOutcome> {
    let phase = advance(WaitPhase::NotStarted, WaitPhase::WaitingForService)?;

    let client = wait_for_service(
        node,
        &config.service_name,
        config.timeout,
        config.service_poll_interval,
    )
    .await;
    if !client.service_is_ready() {
        let phase = advance(phase, WaitPhase::TimedOut)?;
        debug!(robot = robot_name, phase = phase.label(), "entity state service unavailable");
        return Ok(WaitOutcome::not_spawned());
    }

    let phase = advance(phase, WaitPhase::Polling)?;
    let deadline = Deadline::after(config.timeout);
    let request = get_entity_state::Request::for_entity(robot_name);
    let mut pending = PendingCall::new(node.call_get_entity_state(client.service_name(), request));

    while !deadline.expired() {
        let Some(result) = pending.spin_once(deadline.clip(config.spin_period)).await else {
            continue;
        };
        let response = result.map_err(|err| err.into_core_error("GetEntityState call"))?;
        let state = response.state;

        info!(
            robot = robot_name,
            success = response.success,
            name = %state.name,
            pose = %state.pose,
            reference_frame = %state.reference_frame,
            "Result of [GetEntityState]"
        );

        if state.name != robot_name {
            return Err(CoreError::entity_name_mismatch(robot_name, state.name));
        }

        let phase = advance(phase, WaitPhase::Spawned)?;
        debug!(
            robot = robot_name,
            phase = phase.label(),
            elapsed = ?deadline.elapsed(),
            "robot spawned"
        );
        return Ok(WaitOutcome::spawned(state.pose));
    }

    let phase = advance(phase, WaitPhase::TimedOut)?;
    warn!(
        robot = robot_name,
        phase = phase.label(),
        timeout = ?config.timeout,
        "no GetEntityState reply before timeout"
    );
    Ok(WaitOutcome::not_spawned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_parts_follow_spawned_flag() {
        let pose = Pose::default();
        assert_eq!(WaitOutcome::spawned(pose).into_parts(), (true, Some(pose)));
        assert_eq!(WaitOutcome::not_spawned().into_parts(), (false, None));
    }
}
