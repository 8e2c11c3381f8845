use std::marker::PhantomData;
use std::time::Duration;

use roslibrust::rosbridge::ClientHandle;
use simtest_core::entity::get_entity_state;
use simtest_core::error::CoreError;
use simtest_core::node::{Node, NodeFactory, NodeFuture};
use tracing::debug;

use crate::error::{bridge_timeout, node_released};
use crate::interfaces::SimInterfaces;
use crate::names::{resolve_service_name, ROSAPI_SERVICES};

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// One rosbridge connection used as a node for a single wait.
///
/// Readiness is answered by the rosapi service listing.
pub struct RosbridgeNode<I: SimInterfaces> {
    name: String,
    ros: Option<ClientHandle>,
    services_query: String,
    _interfaces: PhantomData<fn() -> I>,
}

impl<I: SimInterfaces> RosbridgeNode<I> {
    pub fn new(name: impl Into<String>, ros: ClientHandle, services_query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ros: Some(ros),
            services_query: services_query.into(),
            _interfaces: PhantomData,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.ros.is_none()
    }

    fn handle(&self) -> Result<&ClientHandle, CoreError> {
        self.ros.as_ref().ok_or_else(|| node_released(&self.name))
    }
}

impl<I: SimInterfaces> Node for RosbridgeNode<I> {
    type Error = CoreError;

    fn name(&self) -> &str {
        &self.name
    }

    fn service_is_ready<'a>(&'a self, service: &'a str) -> NodeFuture<'a, bool, CoreError> {
        Box::pin(async move {
            let ros = self.handle()?;
            let target = resolve_service_name(service);
            let resp = ros
                .call_service::<I::ListServices>(&self.services_query, I::list_services_request())
                .await
                .map_err(|err| CoreError::transport("rosapi services query", err))?;
            Ok(I::service_names(resp).iter().any(|name| *name == target))
        })
    }

    fn call_get_entity_state(
        &self,
        service: &str,
        req: get_entity_state::Request,
    ) -> NodeFuture<'static, get_entity_state::Response, CoreError> {
        let ros = self.handle().map(Clone::clone);
        let service = resolve_service_name(service);
        Box::pin(async move {
            let ros = ros?;
            let resp = ros
                .call_service::<I::GetEntityState>(&service, I::entity_state_request(&req))
                .await
                .map_err(|err| CoreError::transport("GetEntityState call", err))?;
            Ok(I::entity_state_response(resp))
        })
    }

    fn destroy(&mut self) {
        if self.ros.take().is_some() {
            debug!(node = %self.name, "rosbridge connection released");
        }
    }
}

/// Opens a fresh rosbridge connection per node.
pub struct RosbridgeNodeFactory<I: SimInterfaces> {
    bridge_url: String,
    connect_timeout: Duration,
    services_query: String,
    _interfaces: PhantomData<fn() -> I>,
}

impl<I: SimInterfaces> RosbridgeNodeFactory<I> {
    pub fn new(bridge_url: impl Into<String>) -> Self {
        Self {
            bridge_url: bridge_url.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            services_query: ROSAPI_SERVICES.to_string(),
            _interfaces: PhantomData,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the rosapi listing service (namespaced rosapi setups).
    pub fn with_services_query(mut self, service: &str) -> Self {
        self.services_query = resolve_service_name(service);
        self
    }

    pub fn bridge_url(&self) -> &str {
        &self.bridge_url
    }
}

impl<I: SimInterfaces> NodeFactory for RosbridgeNodeFactory<I> {
    type Node = RosbridgeNode<I>;

    fn create_node<'a>(&'a self, name: &'a str) -> NodeFuture<'a, RosbridgeNode<I>, CoreError> {
        Box::pin(async move {
            let connect = ClientHandle::new(&self.bridge_url);
            let ros = tokio::time::timeout(self.connect_timeout, connect)
                .await
                .map_err(|_| bridge_timeout("connect to rosbridge", &self.bridge_url))?
                .map_err(|err| CoreError::transport("connect to rosbridge", err))?;
            debug!(node = name, bridge = %self.bridge_url, "rosbridge node created");
            Ok(RosbridgeNode::new(name, ros, self.services_query.clone()))
        })
    }
}
