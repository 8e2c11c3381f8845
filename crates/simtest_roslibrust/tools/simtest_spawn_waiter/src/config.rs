use std::env;

use simtest_core::config::{parse_secs, WaitConfig};
use simtest_core::error::{CoreError, Domain, Result};
use simtest_roslibrust::names::DEFAULT_BRIDGE_URL;

pub const ENV_ROBOT: &str = "SIMTEST_ROBOT";
pub const ENV_BRIDGE_URL: &str = "SIMTEST_BRIDGE_URL";

pub struct Config {
    pub robot_name: Option<String>,
    pub bridge_url: String,
    pub wait: WaitConfig,
}

impl Config {
    pub fn from_args() -> Result<Self> {
        Self::from_args_iter(env::args())
    }

    /// Flags win over `SIMTEST_*` variables, which win over defaults.
    pub fn from_args_iter<I, S>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wait = WaitConfig::from_env()?;
        let mut robot_name: Option<String> = None;
        let mut bridge_url =
            env::var(ENV_BRIDGE_URL).unwrap_or_else(|_| DEFAULT_BRIDGE_URL.to_string());

        let mut args = iter.into_iter();
        let _ = args.next();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--robot" => {
                    if let Some(value) = args.next() {
                        robot_name = Some(value.as_ref().to_string());
                    }
                }
                "--timeout" => {
                    if let Some(value) = args.next() {
                        wait.timeout = timeout_arg(value.as_ref())?;
                    }
                }
                "--bridge-url" => {
                    if let Some(value) = args.next() {
                        bridge_url = value.as_ref().to_string();
                    }
                }
                "--service" => {
                    if let Some(value) = args.next() {
                        wait.service_name = value.as_ref().to_string();
                    }
                }
                _ if arg.starts_with("--robot=") => {
                    robot_name = Some(arg["--robot=".len()..].to_string());
                }
                _ if arg.starts_with("--timeout=") => {
                    wait.timeout = timeout_arg(&arg["--timeout=".len()..])?;
                }
                _ if arg.starts_with("--bridge-url=") => {
                    bridge_url = arg["--bridge-url=".len()..].to_string();
                }
                _ if arg.starts_with("--service=") => {
                    wait.service_name = arg["--service=".len()..].to_string();
                }
                _ if !arg.starts_with('-') && robot_name.is_none() => {
                    robot_name = Some(arg.to_string());
                }
                _ => {}
            }
        }

        let robot_name =
            robot_name.or_else(|| env::var(ENV_ROBOT).ok().filter(|name| !name.is_empty()));

        wait.validate()?;

        Ok(Self {
            robot_name,
            bridge_url,
            wait,
        })
    }
}

fn print_usage() {
    println!(
        "simtest_spawn_waiter --robot <name> [--timeout <secs>] [--bridge-url ws://host:port] [--service <name>]"
    );
}

fn timeout_arg(value: &str) -> Result<std::time::Duration> {
    parse_secs(value).ok_or_else(|| {
        CoreError::invalid_argument(Domain::Config, format!("invalid --timeout value {value:?}"))
    })
}
