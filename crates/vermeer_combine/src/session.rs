//! Engine session lifecycle and combine operation.

use crate::{
    parse_time_marker, CombineEngine, CombineProgress, EngineConfig, EngineStatus, ProgressSink,
};
use std::sync::Arc;
use vermeer_core::{Artifact, ArtifactKind, ArtifactPayload};
use vermeer_error::{CombineError, CombineErrorKind, VermeerResult};

/// Staged manifest file consumed by the concat transform.
const MANIFEST_NAME: &str = "filelist.txt";
/// Output file produced by the transform.
const OUTPUT_NAME: &str = "output.mp4";

/// Fixed concatenation argument list: concat demuxer over the manifest,
/// H.264 video, AAC audio, fixed quality preset.
fn concat_args() -> Vec<String> {
    [
        "-f", "concat", "-safe", "0", "-i", MANIFEST_NAME, "-c:v", "libx264", "-preset", "fast",
        "-crf", "23", "-c:a", "aac", "-b:a", "192k", OUTPUT_NAME,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// An owned session over a video-transcoding engine.
///
/// The session drives the engine through a strict lifecycle and guarantees
/// that every file it stages into the engine's virtual filesystem is removed
/// before a combine call returns, whether the transform succeeded or not.
///
/// `initialize` and `combine` take `&mut self`: the exclusive borrow is the
/// busy gate, so overlapping combine calls against one session do not
/// compile. The engine's virtual filesystem is only ever touched from one
/// in-flight operation.
pub struct EngineSession {
    engine: Arc<dyn CombineEngine>,
    config: EngineConfig,
    status: EngineStatus,
    on_progress: Option<ProgressSink>,
}

impl EngineSession {
    /// Create a new session over an engine capability. The session starts
    /// `Idle`; call [`EngineSession::initialize`] before combining.
    pub fn new(engine: Arc<dyn CombineEngine>, config: EngineConfig) -> Self {
        tracing::debug!(
            poll_interval_ms = config.poll_interval_ms(),
            max_attempts = config.max_attempts(),
            "Creating new EngineSession"
        );
        Self {
            engine,
            config,
            status: EngineStatus::Idle,
            on_progress: None,
        }
    }

    /// Attach a progress callback for coarse status display.
    pub fn with_progress(mut self, sink: ProgressSink) -> Self {
        self.on_progress = Some(sink);
        self
    }

    /// Current lifecycle status.
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    fn report(&self, progress: CombineProgress) {
        if let Some(sink) = &self.on_progress {
            sink(progress);
        }
    }

    /// Wait for the engine capability and load its core.
    ///
    /// Polls availability at the configured interval up to the configured
    /// attempt budget. Exhausting the budget or failing the core load moves
    /// the session to `Error`, which is terminal: later calls fail
    /// immediately without polling again, and a fresh session is required
    /// to retry.
    ///
    /// Calling `initialize` on a session that is already `Ready` is a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(&mut self) -> VermeerResult<()> {
        match self.status {
            EngineStatus::Ready => return Ok(()),
            EngineStatus::Error => {
                return Err(CombineError::new(CombineErrorKind::EngineUnavailable(
                    "engine failed to initialize earlier in this session".to_string(),
                ))
                .into());
            }
            EngineStatus::Loading | EngineStatus::Busy => {
                return Err(CombineError::new(CombineErrorKind::NotReady(
                    self.status.to_string(),
                ))
                .into());
            }
            EngineStatus::Idle => {}
        }

        self.status = EngineStatus::Loading;
        let interval = self.config.poll_interval();
        let max_attempts = *self.config.max_attempts();
        let mut attempts = 0u32;

        let detected = loop {
            if self.engine.available().await {
                break true;
            }
            attempts += 1;
            if attempts >= max_attempts {
                break false;
            }
            if attempts % 4 == 0 {
                self.report(CombineProgress::WaitingForEngine {
                    waited_secs: (interval * attempts).as_secs(),
                });
            }
            tokio::time::sleep(interval).await;
        };

        if !detected {
            self.status = EngineStatus::Error;
            tracing::error!(attempts, "Video engine never became available");
            return Err(CombineError::new(CombineErrorKind::InitTimeout {
                attempts,
                waited_secs: (interval * attempts).as_secs(),
            })
            .into());
        }

        tracing::debug!(attempts, "Video engine detected");
        self.report(CombineProgress::LoadingCore);

        if let Err(e) = self.engine.load().await {
            self.status = EngineStatus::Error;
            tracing::error!(error = %e, "Video engine core failed to load");
            return Err(
                CombineError::new(CombineErrorKind::LoadFailed(e.to_string())).into(),
            );
        }

        self.status = EngineStatus::Ready;
        tracing::info!("Video engine ready");
        Ok(())
    }

    /// Concatenate the given video artifacts, in order, into one output.
    ///
    /// Requires an initialized session and at least two sources; both
    /// preconditions are reported synchronously with no state change and
    /// nothing written to the engine. Any failure after staging begins
    /// still removes every staged file, and the session returns to `Ready`
    /// either way: only initialization failures are terminal.
    #[tracing::instrument(skip(self, sources), fields(sources = sources.len()))]
    pub async fn combine(&mut self, sources: &[Artifact]) -> VermeerResult<Artifact> {
        match self.status {
            EngineStatus::Error => {
                return Err(CombineError::new(CombineErrorKind::EngineUnavailable(
                    "engine failed to initialize earlier in this session".to_string(),
                ))
                .into());
            }
            EngineStatus::Ready => {}
            other => {
                return Err(
                    CombineError::new(CombineErrorKind::NotReady(other.to_string())).into(),
                );
            }
        }
        if sources.len() < 2 {
            return Err(
                CombineError::new(CombineErrorKind::TooFewSources(sources.len())).into(),
            );
        }

        self.status = EngineStatus::Busy;
        let mut staged = Vec::new();
        let result = self.run_combine(sources, &mut staged).await;
        self.cleanup(&staged).await;
        self.status = EngineStatus::Ready;

        match &result {
            Ok(artifact) => tracing::info!(size = artifact.size_bytes(), "Video merge complete"),
            Err(e) => tracing::error!(error = %e, "Video merge failed"),
        }
        result
    }

    /// Stage sources, run the transform, read the output back.
    ///
    /// Every name written into the engine is pushed onto `staged` before
    /// the write is attempted, so the caller can remove whatever made it in.
    async fn run_combine(
        &self,
        sources: &[Artifact],
        staged: &mut Vec<String>,
    ) -> VermeerResult<Artifact> {
        self.report(CombineProgress::Preparing);

        let total = sources.len();
        let mut manifest = String::new();

        for (i, source) in sources.iter().enumerate() {
            let position = i + 1;
            if source.payload().is_empty() {
                return Err(CombineError::new(CombineErrorKind::StagingFailed {
                    position,
                    detail: "artifact has no binary payload".to_string(),
                })
                .into());
            }

            let file_name = format!("input{}.mp4", i);
            staged.push(file_name.clone());
            self.report(CombineProgress::Staging {
                current: position,
                total,
            });

            self.engine
                .write_file(&file_name, source.payload().bytes())
                .await
                .map_err(|e| {
                    CombineError::new(CombineErrorKind::StagingFailed {
                        position,
                        detail: e.to_string(),
                    })
                })?;

            manifest.push_str(&format!("file '{}'\n", file_name));
        }

        staged.push(MANIFEST_NAME.to_string());
        staged.push(OUTPUT_NAME.to_string());
        self.engine
            .write_file(MANIFEST_NAME, manifest.as_bytes())
            .await
            .map_err(|e| {
                CombineError::new(CombineErrorKind::TransformFailed(format!(
                    "failed to write manifest: {}",
                    e
                )))
            })?;

        self.report(CombineProgress::Transforming { elapsed: None });
        tracing::debug!(clips = total, "Starting video merge");

        let on_progress = &self.on_progress;
        let log = |line: &str| {
            tracing::trace!(engine_log = line);
            if let Some(sink) = on_progress
                && let Some(elapsed) = parse_time_marker(line)
            {
                sink(CombineProgress::Transforming {
                    elapsed: Some(elapsed),
                });
            }
        };

        self.engine
            .exec(&concat_args(), &log)
            .await
            .map_err(|e| CombineError::new(CombineErrorKind::TransformFailed(e.to_string())))?;

        self.report(CombineProgress::Finishing);

        let bytes = self.engine.read_file(OUTPUT_NAME).await.map_err(|e| {
            CombineError::new(CombineErrorKind::OutputUnreadable(e.to_string()))
        })?;

        let payload = ArtifactPayload::new(bytes, "video/mp4");
        Ok(Artifact::new(
            ArtifactKind::Video,
            format!("Combined video ({} clips)", total),
            payload,
        ))
    }

    /// Remove every staged file. Individual failures are logged and
    /// swallowed; they never replace the operation's own result.
    async fn cleanup(&self, staged: &[String]) {
        for name in staged {
            if let Err(e) = self.engine.unlink(name).await {
                tracing::warn!(file = %name, error = %e, "Failed to remove staged file");
            }
        }
    }
}
