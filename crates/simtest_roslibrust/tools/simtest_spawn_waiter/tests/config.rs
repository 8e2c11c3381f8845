use std::env;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use simtest_core::config::{ENV_SERVICE_NAME, ENV_TIMEOUT};
use simtest_core::error::{Domain, ErrorKind};
use simtest_spawn_waiter::config::{Config, ENV_BRIDGE_URL, ENV_ROBOT};

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().expect("lock")
}

fn clear_env() {
    for key in [ENV_ROBOT, ENV_BRIDGE_URL, ENV_TIMEOUT, ENV_SERVICE_NAME] {
        env::remove_var(key);
    }
}

#[test]
fn defaults_without_flags() {
    let _guard = env_lock();
    clear_env();

    let config = Config::from_args_iter(["bin"]).unwrap();
    assert!(config.robot_name.is_none());
    assert_eq!(config.bridge_url, "ws://localhost:9090");
    assert_eq!(config.wait.timeout, Duration::from_secs(10));
    assert_eq!(config.wait.service_name, "GetEntityState");
}

#[test]
fn flags_set_robot_timeout_and_bridge() {
    let _guard = env_lock();
    clear_env();

    let config = Config::from_args_iter([
        "bin",
        "--robot",
        "robot_1",
        "--timeout=2.5",
        "--bridge-url",
        "ws://sim:9090",
        "--service=/sim/GetEntityState",
    ])
    .unwrap();

    assert_eq!(config.robot_name.as_deref(), Some("robot_1"));
    assert_eq!(config.wait.timeout, Duration::from_millis(2500));
    assert_eq!(config.bridge_url, "ws://sim:9090");
    assert_eq!(config.wait.service_name, "/sim/GetEntityState");
}

#[test]
fn positional_robot_name_is_accepted() {
    let _guard = env_lock();
    clear_env();

    let config = Config::from_args_iter(["bin", "robot_7"]).unwrap();
    assert_eq!(config.robot_name.as_deref(), Some("robot_7"));
}

#[test]
fn env_fallbacks_apply_and_flags_win() {
    let _guard = env_lock();
    clear_env();
    env::set_var(ENV_ROBOT, "robot_env");
    env::set_var(ENV_TIMEOUT, "4");
    env::set_var(ENV_BRIDGE_URL, "ws://env:9090");

    let config = Config::from_args_iter(["bin", "--timeout", "1"]).unwrap();
    assert_eq!(config.robot_name.as_deref(), Some("robot_env"));
    assert_eq!(config.bridge_url, "ws://env:9090");
    assert_eq!(config.wait.timeout, Duration::from_secs(1));

    clear_env();
}

#[test]
fn positional_robot_name_wins_over_env() {
    let _guard = env_lock();
    clear_env();
    env::set_var(ENV_ROBOT, "robot_env");

    let config = Config::from_args_iter(["bin", "robot_cli"]).unwrap();
    assert_eq!(config.robot_name.as_deref(), Some("robot_cli"));

    let config = Config::from_args_iter(["bin", "--robot=robot_flag"]).unwrap();
    assert_eq!(config.robot_name.as_deref(), Some("robot_flag"));

    clear_env();
}

#[test]
fn invalid_timeout_is_rejected() {
    let _guard = env_lock();
    clear_env();

    let err = Config::from_args_iter(["bin", "--robot", "robot_1", "--timeout", "-1"])
        .err()
        .expect("negative timeout must fail");
    assert_eq!(err.domain, Domain::Config);
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
}
