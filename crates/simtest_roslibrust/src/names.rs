//! ROS graph names used by the adapter.

pub const DEFAULT_BRIDGE_URL: &str = "ws://localhost:9090";

/// rosapi service listing every advertised service.
pub const ROSAPI_SERVICES: &str = "/rosapi/services";

/// Resolve a service name against the root namespace.
///
/// Relative names (`GetEntityState`) become absolute (`/GetEntityState`);
/// absolute names are returned unchanged.
pub fn resolve_service_name(name: &str) -> String {
    let name = name.trim();
    if name.starts_with('/') {
        name.to_string()
    } else {
        format!("/{name}")
    }
}
