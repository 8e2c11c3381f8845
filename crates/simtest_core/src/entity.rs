//! Entity state DTOs.
//!
//! Transport-agnostic mirrors of the simulator's entity messages.
//! Transport adapters map real ROS messages into these.

use std::fmt;

/// Position of a point in free space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Orientation in quaternion form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// Position + orientation of an entity. Carried through untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.position;
        let q = &self.orientation;
        write!(
            f,
            "position=({}, {}, {}) orientation=({}, {}, {}, {})",
            p.x, p.y, p.z, q.x, q.y, q.z, q.w
        )
    }
}

/// Named entity with its pose in `reference_frame`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityState {
    pub name: String,
    pub pose: Pose,
    pub reference_frame: String,
}

/// `GetEntityState` request/response.
pub mod get_entity_state {
    use super::EntityState;

    /// Request: entity name, pose expressed in `reference_frame` (empty = world).
    #[derive(Debug, Clone, Default, Eq, PartialEq)]
    pub struct Request {
        pub name: String,
        pub reference_frame: String,
    }

    impl Request {
        pub fn for_entity(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                reference_frame: String::new(),
            }
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Response {
        pub success: bool,
        pub state: EntityState,
    }
}
