use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Convenient result alias for simtest_core.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Log/handling importance. Maps onto `tracing` levels in the adapters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Where an error came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Domain {
    /// The spawn wait itself (phases, entity checks).
    Spawn,
    Transport,
    Config,
    Other,
}

/// Stable error "kind" for matching/branching.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    InvalidTransition,
    Transport,
    ProtocolViolation,
    Timeout,
    Other,
}

/// Optional structured payload.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Payload {
    None,

    /// Generic key/value context.
    Context {
        key: &'static str,
        value: Cow<'static, str>,
    },

    /// The entity state service answered for a different entity than requested.
    EntityNameMismatch { expected: String, actual: String },

    /// Rejected wait phase step (phase ids, see `WaitPhase::id`).
    PhaseTransition { from_phase: u8, to_phase: u8 },
}

/// The one error type that crosses crate boundaries.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{severity:?}: {message}")]
pub struct CoreError {
    pub domain: Domain,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: Cow<'static, str>,
    pub payload: Payload,
}

impl CoreError {
    #[inline]
    pub fn warn() -> ErrB {
        ErrB::new(Severity::Warn)
    }
    #[inline]
    pub fn error() -> ErrB {
        ErrB::new(Severity::Error)
    }
    #[inline]
    pub fn fatal() -> ErrB {
        ErrB::new(Severity::Fatal)
    }

    /// The service replied with a state for another entity.
    pub fn entity_name_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        CoreError::fatal()
            .domain(Domain::Spawn)
            .kind(ErrorKind::ProtocolViolation)
            .msgf(format_args!(
                "entity state reply names [{actual}], requested [{expected}]"
            ))
            .payload(Payload::EntityNameMismatch { expected, actual })
            .build()
    }

    /// Wrap a transport-layer failure, keeping where it happened.
    pub fn transport(context: &'static str, err: impl fmt::Display) -> Self {
        CoreError::error()
            .domain(Domain::Transport)
            .kind(ErrorKind::Transport)
            .msgf(format_args!("{context}: {err}"))
            .payload(Payload::Context {
                key: "where",
                value: context.into(),
            })
            .build()
    }

    pub fn invalid_argument(domain: Domain, message: impl Into<Cow<'static, str>>) -> Self {
        CoreError::error()
            .domain(domain)
            .kind(ErrorKind::InvalidArgument)
            .msg(message)
            .build()
    }

    pub fn is_protocol_violation(&self) -> bool {
        self.kind == ErrorKind::ProtocolViolation
    }
}

/// Fluent builder (takes self, returns Self).
/// Defaults: domain = Other, kind = Other, message = "", payload = None.
#[derive(Debug, Clone)]
pub struct ErrB {
    domain: Domain,
    kind: ErrorKind,
    severity: Severity,
    message: Cow<'static, str>,
    payload: Payload,
}

impl ErrB {
    #[inline]
    fn new(severity: Severity) -> Self {
        Self {
            domain: Domain::Other,
            kind: ErrorKind::Other,
            severity,
            message: Cow::Borrowed(""),
            payload: Payload::None,
        }
    }

    #[inline]
    pub fn domain(mut self, d: Domain) -> Self {
        self.domain = d;
        self
    }

    #[inline]
    pub fn kind(mut self, k: ErrorKind) -> Self {
        self.kind = k;
        self
    }

    #[inline]
    pub fn msg(mut self, m: impl Into<Cow<'static, str>>) -> Self {
        self.message = m.into();
        self
    }

    #[inline]
    pub fn msgf(mut self, args: fmt::Arguments<'_>) -> Self {
        self.message = Cow::Owned(args.to_string());
        self
    }

    /// Replaces any previous payload.
    #[inline]
    pub fn payload(mut self, p: Payload) -> Self {
        self.payload = p;
        self
    }

    #[inline]
    pub fn build(self) -> CoreError {
        CoreError {
            domain: self.domain,
            kind: self.kind,
            severity: self.severity,
            message: self.message,
            payload: self.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_mismatch_is_fatal_protocol_violation() {
        let err = CoreError::entity_name_mismatch("robot_1", "robot_9");

        assert_eq!(err.kind, ErrorKind::ProtocolViolation);
        assert_eq!(err.severity, Severity::Fatal);
        assert!(err.is_protocol_violation());
        assert_eq!(
            err.payload,
            Payload::EntityNameMismatch {
                expected: "robot_1".into(),
                actual: "robot_9".into(),
            }
        );
        assert!(err.to_string().contains("robot_9"));
    }

    #[test]
    fn transport_error_keeps_context() {
        let err = CoreError::transport("connect to rosbridge", "connection refused");

        assert_eq!(err.domain, Domain::Transport);
        assert_eq!(err.message, "connect to rosbridge: connection refused");
        assert!(matches!(
            err.payload,
            Payload::Context { key: "where", .. }
        ));
    }

    #[test]
    fn builder_defaults_to_other() {
        let err = CoreError::warn().msg("plain").build();
        assert_eq!(err.domain, Domain::Other);
        assert_eq!(err.kind, ErrorKind::Other);
        assert_eq!(err.payload, Payload::None);
    }
}
