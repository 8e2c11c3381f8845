use simtest_core::entity::{get_entity_state, EntityState, Point, Pose, Quaternion};
use simtest_roslibrust::SimInterfaces;

use crate::{geometry_msgs, rosapi_msgs, ue_msgs};

/// `ue_msgs` entity state service + `rosapi_msgs` service listing.
pub struct UeInterfaces;

impl SimInterfaces for UeInterfaces {
    type GetEntityState = ue_msgs::GetEntityState;
    type ListServices = rosapi_msgs::Services;

    fn entity_state_request(req: &get_entity_state::Request) -> ue_msgs::GetEntityStateRequest {
        ue_msgs::GetEntityStateRequest {
            name: req.name.clone(),
            reference_frame: req.reference_frame.clone(),
        }
    }

    fn entity_state_response(resp: ue_msgs::GetEntityStateResponse) -> get_entity_state::Response {
        get_entity_state::Response {
            success: resp.success,
            state: entity_state_from_msg(resp.state),
        }
    }

    fn list_services_request() -> rosapi_msgs::ServicesRequest {
        rosapi_msgs::ServicesRequest::default()
    }

    fn service_names(resp: rosapi_msgs::ServicesResponse) -> Vec<String> {
        resp.services
    }
}

pub fn entity_state_from_msg(msg: ue_msgs::EntityState) -> EntityState {
    EntityState {
        name: msg.name,
        pose: pose_from_msg(&msg.pose),
        reference_frame: msg.reference_frame,
    }
}

pub fn pose_from_msg(msg: &geometry_msgs::Pose) -> Pose {
    Pose {
        position: Point {
            x: msg.position.x,
            y: msg.position.y,
            z: msg.position.z,
        },
        orientation: Quaternion {
            x: msg.orientation.x,
            y: msg.orientation.y,
            z: msg.orientation.z,
            w: msg.orientation.w,
        },
    }
}
