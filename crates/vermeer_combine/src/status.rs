//! Engine session status.

/// Lifecycle status of an engine session.
///
/// A session moves `Idle → Loading → Ready` during initialization, or
/// `Loading → Error` when the engine never becomes available or its core
/// fails to load. Each combine run moves `Ready → Busy → Ready`. A session
/// never returns to `Loading`; retrying initialization requires a fresh
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EngineStatus {
    /// Session created, initialization not yet attempted
    Idle,
    /// Waiting for the engine capability and loading its core
    Loading,
    /// Engine loaded and no combine in flight
    Ready,
    /// A combine operation is running
    Busy,
    /// Initialization failed; terminal for this session
    Error,
}
