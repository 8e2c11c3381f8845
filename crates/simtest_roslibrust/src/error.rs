use simtest_core::error::{CoreError, Domain, ErrorKind, Severity};

pub fn log_core_error(err: &CoreError) {
    match err.severity {
        Severity::Trace => tracing::trace!("{err}"),
        Severity::Debug => tracing::debug!("{err}"),
        Severity::Info => tracing::info!("{err}"),
        Severity::Warn => tracing::warn!("{err}"),
        Severity::Error | Severity::Fatal => tracing::error!("{err}"),
    }
}

/// The node was used after `destroy()`.
pub fn node_released(node: &str) -> CoreError {
    CoreError::error()
        .domain(Domain::Transport)
        .kind(ErrorKind::InvalidState)
        .msgf(format_args!("node [{node}] already destroyed"))
        .build()
}

/// The bridge did not answer in time.
pub fn bridge_timeout(context: &'static str, url: &str) -> CoreError {
    CoreError::error()
        .domain(Domain::Transport)
        .kind(ErrorKind::Timeout)
        .msgf(format_args!("{context}: no answer from {url}"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_node_error_names_node() {
        let err = node_released("wait_for_robot_1");
        assert_eq!(err.kind, ErrorKind::InvalidState);
        assert!(err.message.contains("wait_for_robot_1"));
    }

    #[test]
    fn bridge_timeout_is_transport_timeout() {
        let err = bridge_timeout("connect to rosbridge", "ws://localhost:9090");
        assert_eq!(err.domain, Domain::Transport);
        assert_eq!(err.kind, ErrorKind::Timeout);
        log_core_error(&err);
    }
}
