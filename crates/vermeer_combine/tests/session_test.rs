//! Tests for engine session lifecycle, staging, cleanup, and progress.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use vermeer_combine::{
    CombineEngine, CombineProgress, EngineConfig, EngineSession, EngineStatus, LogSink,
};
use vermeer_core::{Artifact, ArtifactKind, ArtifactPayload};
use vermeer_error::{CombineError, CombineErrorKind, StorageError, StorageErrorKind, VermeerResult};

/// In-memory engine fake with a scriptable virtual filesystem.
#[derive(Default)]
struct FakeEngine {
    injected: AtomicBool,
    fail_load: AtomicBool,
    fail_exec: AtomicBool,
    files: Mutex<BTreeMap<String, Vec<u8>>>,
    manifest_seen: Mutex<Option<String>>,
    exec_args: Mutex<Vec<String>>,
    log_script: Mutex<Vec<String>>,
    available_calls: AtomicUsize,
    load_calls: AtomicUsize,
    write_calls: AtomicUsize,
}

impl FakeEngine {
    fn ready() -> Arc<Self> {
        let engine = Self::default();
        engine.injected.store(true, Ordering::SeqCst);
        Arc::new(engine)
    }

    fn absent() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn staged_file_count(&self) -> usize {
        self.files.lock().expect("files lock").len()
    }
}

#[async_trait]
impl CombineEngine for FakeEngine {
    async fn available(&self) -> bool {
        self.available_calls.fetch_add(1, Ordering::SeqCst);
        self.injected.load(Ordering::SeqCst)
    }

    async fn load(&self) -> VermeerResult<()> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(CombineError::new(CombineErrorKind::LoadFailed(
                "core download refused".to_string(),
            ))
            .into());
        }
        Ok(())
    }

    async fn write_file(&self, name: &str, bytes: &[u8]) -> VermeerResult<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .expect("files lock")
            .insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn read_file(&self, name: &str) -> VermeerResult<Vec<u8>> {
        self.files
            .lock()
            .expect("files lock")
            .get(name)
            .cloned()
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::NotFound(name.to_string())).into()
            })
    }

    async fn unlink(&self, name: &str) -> VermeerResult<()> {
        self.files
            .lock()
            .expect("files lock")
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::NotFound(name.to_string())).into()
            })
    }

    async fn exec(&self, args: &[String], log: LogSink<'_>) -> VermeerResult<()> {
        *self.exec_args.lock().expect("args lock") = args.to_vec();

        for line in self.log_script.lock().expect("log lock").iter() {
            log(line);
        }

        if self.fail_exec.load(Ordering::SeqCst) {
            return Err(CombineError::new(CombineErrorKind::TransformFailed(
                "simulated engine rejection".to_string(),
            ))
            .into());
        }

        // Concatenate the staged inputs in manifest order.
        let mut files = self.files.lock().expect("files lock");
        let manifest = String::from_utf8(
            files
                .get("filelist.txt")
                .expect("manifest staged before exec")
                .clone(),
        )
        .expect("utf8 manifest");
        *self.manifest_seen.lock().expect("manifest lock") = Some(manifest.clone());

        let mut output = Vec::new();
        for line in manifest.lines() {
            let name = line
                .trim_start_matches("file '")
                .trim_end_matches('\'');
            output.extend_from_slice(files.get(name).expect("staged input"));
        }
        files.insert("output.mp4".to_string(), output);
        Ok(())
    }
}

fn clip(bytes: &[u8]) -> Artifact {
    Artifact::new(
        ArtifactKind::Video,
        "clip",
        ArtifactPayload::new(bytes.to_vec(), "video/mp4"),
    )
}

fn fast_config() -> EngineConfig {
    EngineConfig::builder()
        .poll_interval_ms(1)
        .max_attempts(5)
        .build()
        .expect("config")
}

#[tokio::test]
async fn initialize_reaches_ready_and_is_idempotent() {
    let engine = FakeEngine::ready();
    let mut session = EngineSession::new(engine.clone(), EngineConfig::default());

    session.initialize().await.expect("initialize");
    assert_eq!(session.status(), EngineStatus::Ready);

    // Second initialize is a no-op; the core loads exactly once.
    session.initialize().await.expect("re-initialize");
    assert_eq!(engine.load_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn init_timeout_is_terminal_and_stops_polling() {
    let engine = FakeEngine::absent();
    let mut session = EngineSession::new(engine.clone(), EngineConfig::default());

    let err = session.initialize().await.expect_err("timeout");
    assert!(format!("{}", err).contains("not detected after 60 attempts"));
    assert_eq!(session.status(), EngineStatus::Error);
    assert_eq!(engine.available_calls.load(Ordering::SeqCst), 60);

    // Combines now fail immediately, with no further polling or staging.
    let err = session
        .combine(&[clip(b"aa"), clip(b"bb")])
        .await
        .expect_err("engine unavailable");
    assert!(format!("{}", err).contains("unavailable"));
    assert_eq!(engine.available_calls.load(Ordering::SeqCst), 60);
    assert_eq!(engine.write_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn load_failure_is_terminal() {
    let engine = FakeEngine::ready();
    engine.fail_load.store(true, Ordering::SeqCst);
    let mut session = EngineSession::new(engine, fast_config());

    let err = session.initialize().await.expect_err("load failure");
    assert!(format!("{}", err).contains("load video engine core"));
    assert_eq!(session.status(), EngineStatus::Error);

    let err = session.initialize().await.expect_err("terminal");
    assert!(format!("{}", err).contains("unavailable"));
}

#[tokio::test]
async fn combine_requires_an_initialized_session() {
    let engine = FakeEngine::ready();
    let mut session = EngineSession::new(engine.clone(), fast_config());

    let err = session
        .combine(&[clip(b"aa"), clip(b"bb")])
        .await
        .expect_err("not ready");
    assert!(format!("{}", err).contains("not ready"));
    assert_eq!(session.status(), EngineStatus::Idle);
    assert_eq!(engine.write_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn combine_with_one_source_is_rejected_before_staging() {
    let engine = FakeEngine::ready();
    let mut session = EngineSession::new(engine.clone(), fast_config());
    session.initialize().await.expect("initialize");

    let err = session.combine(&[clip(b"aa")]).await.expect_err("too few");
    assert!(format!("{}", err).contains("At least 2"));
    assert_eq!(session.status(), EngineStatus::Ready);
    assert_eq!(engine.write_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn combine_merges_sources_in_caller_order() {
    let engine = FakeEngine::ready();
    let mut session = EngineSession::new(engine.clone(), fast_config());
    session.initialize().await.expect("initialize");

    let a = clip(b"AAAA");
    let b = clip(b"BB");
    let c = clip(b"CCCCCC");

    let merged = session
        .combine(&[a.clone(), b.clone(), c.clone()])
        .await
        .expect("combine");

    assert_eq!(*merged.kind(), ArtifactKind::Video);
    assert_eq!(merged.payload().mime_type(), "video/mp4");
    assert_eq!(merged.payload().bytes(), b"AAAABBCCCCCC");
    assert!(merged.prompt_summary().contains("3 clips"));

    let manifest = engine
        .manifest_seen
        .lock()
        .expect("manifest lock")
        .clone()
        .expect("manifest captured");
    assert_eq!(
        manifest,
        "file 'input0.mp4'\nfile 'input1.mp4'\nfile 'input2.mp4'\n"
    );

    // Every staged file is gone after a successful run.
    assert_eq!(engine.staged_file_count(), 0);
    assert_eq!(session.status(), EngineStatus::Ready);
}

#[tokio::test]
async fn reordering_sources_reorders_the_output() {
    let engine = FakeEngine::ready();
    let mut session = EngineSession::new(engine, fast_config());
    session.initialize().await.expect("initialize");

    let merged = session
        .combine(&[clip(b"CC"), clip(b"AA"), clip(b"BB")])
        .await
        .expect("combine");
    assert_eq!(merged.payload().bytes(), b"CCAABB");
}

#[tokio::test]
async fn transform_runs_the_fixed_concat_arguments() {
    let engine = FakeEngine::ready();
    let mut session = EngineSession::new(engine.clone(), fast_config());
    session.initialize().await.expect("initialize");

    session
        .combine(&[clip(b"aa"), clip(b"bb")])
        .await
        .expect("combine");

    let args = engine.exec_args.lock().expect("args lock").clone();
    let expected: Vec<String> = [
        "-f", "concat", "-safe", "0", "-i", "filelist.txt", "-c:v", "libx264", "-preset",
        "fast", "-crf", "23", "-c:a", "aac", "-b:a", "192k", "output.mp4",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(args, expected);
}

#[tokio::test]
async fn transform_failure_still_cleans_every_staged_file() {
    let engine = FakeEngine::ready();
    engine.fail_exec.store(true, Ordering::SeqCst);
    let mut session = EngineSession::new(engine.clone(), fast_config());
    session.initialize().await.expect("initialize");

    let err = session
        .combine(&[clip(b"aa"), clip(b"bb"), clip(b"cc")])
        .await
        .expect_err("transform failure");

    // The original error survives even though unlinking the never-written
    // output file fails underneath.
    assert!(format!("{}", err).contains("merge failed"));
    assert_eq!(engine.staged_file_count(), 0);
    assert_eq!(session.status(), EngineStatus::Ready);

    // The session is still usable for another attempt.
    engine.fail_exec.store(false, Ordering::SeqCst);
    session
        .combine(&[clip(b"aa"), clip(b"bb")])
        .await
        .expect("retry succeeds");
}

#[tokio::test]
async fn empty_payload_fails_staging_with_its_position() {
    let engine = FakeEngine::ready();
    let mut session = EngineSession::new(engine.clone(), fast_config());
    session.initialize().await.expect("initialize");

    let empty = Artifact::new(
        ArtifactKind::Video,
        "empty",
        ArtifactPayload::new(Vec::new(), "video/mp4"),
    );
    let err = session
        .combine(&[clip(b"aa"), empty, clip(b"cc")])
        .await
        .expect_err("staging failure");

    assert!(format!("{}", err).contains("stage video 2"));
    assert_eq!(engine.staged_file_count(), 0);
    assert_eq!(session.status(), EngineStatus::Ready);
}

#[tokio::test]
async fn progress_reports_staging_and_scraped_time_markers() {
    let engine = FakeEngine::ready();
    *engine.log_script.lock().expect("log lock") = vec![
        "ffmpeg version n6.0".to_string(),
        "frame=  120 fps= 30 q=28.0 size=512kB time=00:00:04.80 bitrate=873.1kbits/s".to_string(),
        "frame=  240 fps= 30 q=28.0 size=1024kB time=00:00:09.60 bitrate=873.4kbits/s".to_string(),
    ];

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink_seen = seen.clone();
    let mut session = EngineSession::new(engine, fast_config()).with_progress(Box::new(
        move |progress| sink_seen.lock().expect("progress lock").push(progress),
    ));
    session.initialize().await.expect("initialize");

    session
        .combine(&[clip(b"aa"), clip(b"bb")])
        .await
        .expect("combine");

    let seen = seen.lock().expect("progress lock");
    assert!(seen.contains(&CombineProgress::Staging {
        current: 1,
        total: 2
    }));
    assert!(seen.contains(&CombineProgress::Transforming {
        elapsed: Some("00:00:04".to_string())
    }));
    assert!(seen.contains(&CombineProgress::Transforming {
        elapsed: Some("00:00:09".to_string())
    }));
    assert!(seen.contains(&CombineProgress::Finishing));
}

#[test]
fn config_rejects_zero_values() {
    let config = EngineConfig::builder()
        .poll_interval_ms(0)
        .build()
        .expect("build");
    assert!(config.validate().is_err());

    let config = EngineConfig::builder().max_attempts(0).build().expect("build");
    assert!(config.validate().is_err());

    assert!(EngineConfig::default().validate().is_ok());
}
