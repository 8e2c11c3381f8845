use simtest_core::entity::get_entity_state;
use simtest_roslibrust::SimInterfaces;
use simtest_spawn_waiter::interfaces::UeInterfaces;
use simtest_spawn_waiter::{geometry_msgs, rosapi_msgs, ue_msgs};

#[test]
fn entity_state_request_carries_name_and_frame() {
    let req = get_entity_state::Request {
        name: "robot_1".to_string(),
        reference_frame: "map".to_string(),
    };

    let msg = UeInterfaces::entity_state_request(&req);
    assert_eq!(msg.name, "robot_1");
    assert_eq!(msg.reference_frame, "map");
}

#[test]
fn entity_state_response_copies_pose_unchanged() {
    let mut msg = ue_msgs::GetEntityStateResponse::default();
    msg.success = true;
    msg.state.name = "robot_1".to_string();
    msg.state.reference_frame = "map".to_string();
    msg.state.pose = geometry_msgs::Pose {
        position: geometry_msgs::Point {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        },
        orientation: geometry_msgs::Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.5,
            w: 0.866,
        },
    };

    let resp = UeInterfaces::entity_state_response(msg);
    assert!(resp.success);
    assert_eq!(resp.state.name, "robot_1");
    assert_eq!(resp.state.reference_frame, "map");
    assert_eq!(resp.state.pose.position.y, 2.0);
    assert_eq!(resp.state.pose.orientation.w, 0.866);
}

#[test]
fn service_listing_is_passed_through() {
    let resp = rosapi_msgs::ServicesResponse {
        services: vec!["/GetEntityState".to_string(), "/rosapi/services".to_string()],
    };

    let names = UeInterfaces::service_names(resp);
    assert!(names.iter().any(|name| name == "/GetEntityState"));
    let _ = UeInterfaces::list_services_request();
}
