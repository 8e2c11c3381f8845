use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let msgs_dir = manifest_dir.join("msgs");
    println!("cargo:rerun-if-changed={}", msgs_dir.display());

    if !msgs_dir.is_dir() {
        return Err(format!("message definitions not found at {}", msgs_dir.display()).into());
    }

    // ue_msgs, the geometry_msgs it references, rosapi_msgs. Kept in-tree so
    // the build does not need a sourced ROS installation.
    let search_paths = vec![msgs_dir];

    let (source, dependent_paths) =
        roslibrust::codegen::find_and_generate_ros_messages_without_ros_package_path(search_paths)?;

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let dest_path = out_dir.join("messages.rs");
    std::fs::write(dest_path, source.to_string())?;

    for path in dependent_paths {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    Ok(())
}
