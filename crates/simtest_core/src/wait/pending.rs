use std::time::Duration;

use crate::node::NodeFuture;

/// An in-flight request that is advanced in bounded steps.
///
/// Replaces a "spin the executor once, then check the future" loop: each
/// `spin_once` waits at most `step` and reports whether the call finished.
pub struct PendingCall<T, E> {
    call: Option<NodeFuture<'static, T, E>>,
}

impl<T, E> PendingCall<T, E> {
    pub fn new(call: NodeFuture<'static, T, E>) -> Self {
        Self { call: Some(call) }
    }

    /// True once the result has been handed out.
    pub fn is_done(&self) -> bool {
        self.call.is_none()
    }

    /// Advance the call for at most `step`.
    ///
    /// Returns `None` if the step elapsed without completion, or if the result
    /// was already taken by an earlier step.
    pub async fn spin_once(&mut self, step: Duration) -> Option<Result<T, E>> {
        let call = self.call.as_mut()?;
        let stepped = tokio::time::timeout(step, call).await;
        match stepped {
            Ok(result) => {
                self.call = None;
                Some(result)
            }
            Err(_) => None,
        }
    }
}
