use std::process::ExitCode;

use anyhow::{Context, Result};
use simtest_core::SpawnWaiter;
use simtest_roslibrust::error::log_core_error;
use simtest_roslibrust::RosbridgeNodeFactory;
use simtest_spawn_waiter::config::Config;
use simtest_spawn_waiter::interfaces::UeInterfaces;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_args().context("read configuration")?;
    let robot = config
        .robot_name
        .clone()
        .context("missing robot name (--robot <name>)")?;

    info!(
        robot = %robot,
        bridge = %config.bridge_url,
        service = %config.wait.service_name,
        timeout = ?config.wait.timeout,
        "spawn waiter started"
    );

    let factory = RosbridgeNodeFactory::<UeInterfaces>::new(config.bridge_url.clone());
    let waiter = SpawnWaiter::new(factory, config.wait);

    let outcome = waiter
        .wait_for_spawned_robot(&robot)
        .await
        .inspect_err(log_core_error)
        .with_context(|| format!("wait for robot [{robot}]"))?;

    match outcome.pose {
        Some(pose) if outcome.spawned => {
            println!("robot [{robot}] spawned: {pose}");
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            println!("robot [{robot}] not spawned");
            Ok(ExitCode::FAILURE)
        }
    }
}
