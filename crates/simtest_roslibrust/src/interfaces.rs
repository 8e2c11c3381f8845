//! Binding between concrete ROS service types and the core DTOs.
//!
//! Downstream crates generate the message types (e.g. with
//! `roslibrust::codegen`) and implement `SimInterfaces` once. This keeps this
//! crate independent of `ue_msgs` and `rosapi_msgs`.

use roslibrust::RosServiceType;
use simtest_core::entity::get_entity_state;

/// Request type of service `S`.
pub type RequestOf<S> = <S as RosServiceType>::Request;
/// Response type of service `S`.
pub type ResponseOf<S> = <S as RosServiceType>::Response;

pub trait SimInterfaces: Send + Sync + 'static {
    /// `ue_msgs/srv/GetEntityState` or equivalent.
    type GetEntityState: RosServiceType;
    /// `rosapi_msgs/srv/Services` or equivalent.
    type ListServices: RosServiceType;

    fn entity_state_request(req: &get_entity_state::Request) -> RequestOf<Self::GetEntityState>;

    fn entity_state_response(resp: ResponseOf<Self::GetEntityState>)
        -> get_entity_state::Response;

    fn list_services_request() -> RequestOf<Self::ListServices>;

    fn service_names(resp: ResponseOf<Self::ListServices>) -> Vec<String>;
}
