//! Communication endpoint seam.
//!
//! A `Node` is the context through which remote calls are issued. The core
//! never talks to a transport directly; adapters (rosbridge, test doubles)
//! implement these traits.

use std::fmt;
use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use tracing::debug;

use crate::entity::get_entity_state;
use crate::error::CoreError;

/// Boxed, `Send` future returned by node operations.
pub type NodeFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Error reported by a node.
///
/// A `CoreError` from an adapter is kept as is; other errors become
/// transport failures tagged with `context`.
pub trait NodeError: fmt::Display + Send + Sync + Sized + 'static {
    fn into_core_error(self, context: &'static str) -> CoreError {
        CoreError::transport(context, self)
    }
}

impl NodeError for CoreError {
    fn into_core_error(self, _context: &'static str) -> CoreError {
        self
    }
}

impl NodeError for String {}

impl NodeError for &'static str {}

pub trait Node: Send + Sync {
    type Error: NodeError;

    fn name(&self) -> &str;

    /// One readiness check for `service`. Must not block for long.
    fn service_is_ready<'a>(&'a self, service: &'a str) -> NodeFuture<'a, bool, Self::Error>;

    /// Issue a `GetEntityState` request.
    ///
    /// The returned future owns everything it needs so it can be stepped
    /// independently of the node.
    fn call_get_entity_state(
        &self,
        service: &str,
        req: get_entity_state::Request,
    ) -> NodeFuture<'static, get_entity_state::Response, Self::Error>;

    /// Release transport resources. Called exactly once, by `NodeGuard`.
    fn destroy(&mut self);
}

pub trait NodeFactory: Send + Sync {
    type Node: Node;

    fn create_node<'a>(
        &'a self,
        name: &'a str,
    ) -> NodeFuture<'a, Self::Node, <Self::Node as Node>::Error>;
}

/// Owns a node for the duration of one call and destroys it on drop.
pub struct NodeGuard<N: Node> {
    node: N,
}

impl<N: Node> NodeGuard<N> {
    pub fn new(node: N) -> Self {
        Self { node }
    }
}

impl<N: Node> Deref for NodeGuard<N> {
    type Target = N;

    fn deref(&self) -> &N {
        &self.node
    }
}

impl<N: Node> Drop for NodeGuard<N> {
    fn drop(&mut self) {
        debug!(node = %self.node.name(), "destroying node");
        self.node.destroy();
    }
}

/// ROS-legal node name for a wait on `robot_name`.
pub fn wait_node_name(robot_name: &str) -> String {
    let sanitized: String = robot_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("wait_for_{sanitized}")
}
