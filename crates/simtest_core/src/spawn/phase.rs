use crate::error::{CoreError, Domain, ErrorKind, Payload, Result};

/// Progress of a single spawn wait.
///
/// Terminal phases: `Spawned`, `TimedOut`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WaitPhase {
    NotStarted,
    WaitingForService,
    Polling,
    Spawned,
    TimedOut,
}

impl WaitPhase {
    /// Compact id used in error payloads.
    pub const fn id(self) -> u8 {
        match self {
            WaitPhase::NotStarted => 0,
            WaitPhase::WaitingForService => 1,
            WaitPhase::Polling => 2,
            WaitPhase::Spawned => 3,
            WaitPhase::TimedOut => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WaitPhase::NotStarted => "NotStarted",
            WaitPhase::WaitingForService => "WaitingForService",
            WaitPhase::Polling => "Polling",
            WaitPhase::Spawned => "Spawned",
            WaitPhase::TimedOut => "TimedOut",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, WaitPhase::Spawned | WaitPhase::TimedOut)
    }
}

pub const ALL_PHASES: [WaitPhase; 5] = [
    WaitPhase::NotStarted,
    WaitPhase::WaitingForService,
    WaitPhase::Polling,
    WaitPhase::Spawned,
    WaitPhase::TimedOut,
];

/// Checked phase step.
///
/// The service that never becomes ready skips `Polling` and lands directly in
/// `TimedOut`.
pub fn advance(from: WaitPhase, to: WaitPhase) -> Result<WaitPhase> {
    use WaitPhase::*;
    match (from, to) {
        (NotStarted, WaitingForService)
        | (WaitingForService, Polling)
        | (WaitingForService, TimedOut)
        | (Polling, Spawned)
        | (Polling, TimedOut) => Ok(to),
        _ => Err(CoreError::warn()
            .domain(Domain::Spawn)
            .kind(ErrorKind::InvalidTransition)
            .msgf(format_args!(
                "invalid wait phase step {} -> {}",
                from.label(),
                to.label()
            ))
            .payload(Payload::PhaseTransition {
                from_phase: from.id(),
                to_phase: to.id(),
            })
            .build()),
    }
}
