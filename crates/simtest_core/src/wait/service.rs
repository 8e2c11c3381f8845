use std::time::Duration;

use tracing::{debug, warn};

use super::Deadline;
use crate::node::Node;

/// Outcome of waiting for a remote service.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ServiceClient {
    service_name: String,
    ready: bool,
}

impl ServiceClient {
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_is_ready(&self) -> bool {
        self.ready
    }
}

/// Check `service_name` through `node` until it is ready or `timeout` passes.
///
/// Check errors are logged and retried. Never-ready is reported through
/// `ServiceClient::service_is_ready`, not as an error.
pub async fn wait_for_service<N: Node>(
    node: &N,
    service_name: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> ServiceClient {
    let deadline = Deadline::after(timeout);
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let check =
            tokio::time::timeout(deadline.remaining(), node.service_is_ready(service_name)).await;
        match check {
            Ok(Ok(true)) => {
                debug!(
                    node = %node.name(),
                    service = service_name,
                    attempts,
                    "service ready"
                );
                return ServiceClient {
                    service_name: service_name.to_string(),
                    ready: true,
                };
            }
            Ok(Ok(false)) => {}
            Ok(Err(err)) => {
                warn!(service = service_name, error = %err, "service check failed, retrying");
            }
            Err(_) => {}
        }

        if deadline.expired() {
            warn!(
                service = service_name,
                timeout = ?timeout,
                attempts,
                "service not ready before timeout"
            );
            return ServiceClient {
                service_name: service_name.to_string(),
                ready: false,
            };
        }

        tokio::time::sleep(deadline.clip(poll_interval)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::get_entity_state;
    use crate::node::NodeFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    /// Fails the first `failures` checks, then reports ready.
    struct FlakyNode {
        checks: AtomicUsize,
        failures: usize,
    }

    impl Node for FlakyNode {
        type Error = String;

        fn name(&self) -> &str {
            "flaky"
        }

        fn service_is_ready<'a>(&'a self, _service: &'a str) -> NodeFuture<'a, bool, String> {
            let n = self.checks.fetch_add(1, Ordering::SeqCst);
            let failures = self.failures;
            Box::pin(async move {
                if n < failures {
                    Err(format!("check {n} failed"))
                } else {
                    Ok(true)
                }
            })
        }

        fn call_get_entity_state(
            &self,
            _service: &str,
            _req: get_entity_state::Request,
        ) -> NodeFuture<'static, get_entity_state::Response, String> {
            Box::pin(std::future::pending::<Result<get_entity_state::Response, String>>())
        }

        fn destroy(&mut self) {}
    }

    #[tokio::test(start_paused = true)]
    async fn check_errors_are_retried_until_ready() {
        let node = FlakyNode {
            checks: AtomicUsize::new(0),
            failures: 3,
        };

        let client = wait_for_service(
            &node,
            "GetEntityState",
            Duration::from_secs(2),
            Duration::from_millis(100),
        )
        .await;

        assert!(client.service_is_ready());
        assert_eq!(client.service_name(), "GetEntityState");
        assert_eq!(node.checks.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_at_timeout() {
        let node = FlakyNode {
            checks: AtomicUsize::new(0),
            failures: usize::MAX,
        };
        let start = Instant::now();

        let client = wait_for_service(
            &node,
            "GetEntityState",
            Duration::from_millis(500),
            Duration::from_millis(100),
        )
        .await;

        assert!(!client.service_is_ready());
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }

    /// Readiness check that never resolves.
    struct HangingNode;

    impl Node for HangingNode {
        type Error = String;

        fn name(&self) -> &str {
            "hanging"
        }

        fn service_is_ready<'a>(&'a self, _service: &'a str) -> NodeFuture<'a, bool, String> {
            Box::pin(std::future::pending::<Result<bool, String>>())
        }

        fn call_get_entity_state(
            &self,
            _service: &str,
            _req: get_entity_state::Request,
        ) -> NodeFuture<'static, get_entity_state::Response, String> {
            Box::pin(std::future::pending::<Result<get_entity_state::Response, String>>())
        }

        fn destroy(&mut self) {}
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_readiness_check_is_cut_off_at_timeout() {
        let start = Instant::now();

        let client = wait_for_service(
            &HangingNode,
            "GetEntityState",
            Duration::from_secs(2),
            Duration::from_millis(100),
        )
        .await;

        assert!(!client.service_is_ready());
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }
}
