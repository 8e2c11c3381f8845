//! rosbridge node adapter
//!
//! Wires `simtest_core` node traits to a roslibrust rosbridge client.
//! It contains **no ROS message types**, only transport glue.

mod node;

pub use node::{RosbridgeNode, RosbridgeNodeFactory, DEFAULT_CONNECT_TIMEOUT};
