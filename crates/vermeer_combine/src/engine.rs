//! Combine engine capability trait.

use vermeer_error::VermeerResult;

/// Callback receiving textual log lines emitted by the engine while a
/// transform runs.
pub type LogSink<'a> = &'a (dyn Fn(&str) + Sync);

/// Narrow capability interface over an external video-transcoding engine.
///
/// The engine is treated as a black box with a virtual filesystem keyed by
/// name and a single transform entry point. Implementations must tolerate
/// being probed before the underlying capability has been injected:
/// [`CombineEngine::available`] simply answers `false` until it has.
#[async_trait::async_trait]
pub trait CombineEngine: Send + Sync {
    /// Probe whether the engine capability is present and reachable.
    ///
    /// Must not fail: an engine that has not been injected yet answers
    /// `false`.
    async fn available(&self) -> bool;

    /// Load the engine core. Called once per session, after detection.
    async fn load(&self) -> VermeerResult<()>;

    /// Write bytes into the engine's virtual filesystem under `name`,
    /// replacing any existing file with that name.
    async fn write_file(&self, name: &str, bytes: &[u8]) -> VermeerResult<()>;

    /// Read a file from the virtual filesystem.
    async fn read_file(&self, name: &str) -> VermeerResult<Vec<u8>>;

    /// Remove a file from the virtual filesystem.
    async fn unlink(&self, name: &str) -> VermeerResult<()>;

    /// Run the transform with the given argument list.
    ///
    /// Log lines produced by the engine are delivered to `log` as they are
    /// emitted; the call resolves when the transform completes or fails.
    async fn exec(&self, args: &[String], log: LogSink<'_>) -> VermeerResult<()>;
}
