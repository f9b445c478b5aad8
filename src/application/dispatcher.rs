//! Cue Dispatcher
//!
//! cue id → 音频资源 → 播放后端。所有失败在这里消化为 `false` + 日志，
//! 不会向调用方传播。

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::application::ports::{AlertBeeper, PlaybackBackend, PlaybackError};
use crate::domain::{BeepSeverity, CueCatalog};

/// 播放后端注册表
///
/// 注册顺序即优先级
#[derive(Default)]
pub struct BackendRegistry {
    backends: Vec<Arc<dyn PlaybackBackend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, backend: Arc<dyn PlaybackBackend>) {
        self.backends.push(backend);
    }

    pub fn with(mut self, backend: Arc<dyn PlaybackBackend>) -> Self {
        self.register(backend);
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// 选择第一个可用的后端
    pub fn select(&self) -> Option<Arc<dyn PlaybackBackend>> {
        for backend in &self.backends {
            if backend.can_play() {
                tracing::info!(backend = backend.name(), "Playback backend selected");
                return Some(backend.clone());
            }
            tracing::warn!(backend = backend.name(), "Playback backend unavailable, skipping");
        }

        tracing::error!(
            registered = ?self.names(),
            "No playback backend available, cues will not be played"
        );
        None
    }
}

/// Cue Dispatcher
///
/// 后端在构造时选定一次，之后不再探测
pub struct CueDispatcher {
    catalog: Arc<CueCatalog>,
    backend: Option<Arc<dyn PlaybackBackend>>,
    beeper: Option<Arc<dyn AlertBeeper>>,
}

impl CueDispatcher {
    pub fn new(
        catalog: Arc<CueCatalog>,
        registry: &BackendRegistry,
        beeper: Option<Arc<dyn AlertBeeper>>,
    ) -> Self {
        Self {
            catalog,
            backend: registry.select(),
            beeper,
        }
    }

    /// 选中的后端名称
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|b| b.name())
    }

    pub fn is_audio_available(&self) -> bool {
        self.backend.is_some()
    }

    /// 播放 cue，阻塞直到播放结束
    ///
    /// 返回是否成功播放。未登记的 cue 替换为兜底 cue，文件不存在、
    /// 没有可用后端、后端出错或 panic 都返回 `false`。
    pub fn dispatch(&self, cue_id: &str) -> bool {
        let resolved = self.catalog.lookup(cue_id);
        if resolved.substituted {
            tracing::warn!(
                requested = %cue_id,
                fallback = %resolved.cue_id,
                "Unknown cue, using fallback"
            );
        }

        let handle = self.catalog.resource_for(&resolved);
        if !handle.exists() {
            tracing::warn!(
                cue_id = %handle.cue_id,
                path = %handle.path.display(),
                "Sound file not found"
            );
            return false;
        }

        let Some(backend) = self.backend.as_ref() else {
            tracing::error!(cue_id = %handle.cue_id, "No playback backend available");
            return false;
        };

        match contain(|| backend.play(&handle.path)) {
            Ok(()) => {
                tracing::info!(
                    cue_id = %handle.cue_id,
                    backend = backend.name(),
                    file = %resolved.file,
                    "Cue played"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    cue_id = %handle.cue_id,
                    backend = backend.name(),
                    path = %handle.path.display(),
                    error = %e,
                    "Cue playback failed"
                );
                false
            }
        }
    }

    /// 播放系统提示音
    pub fn beep(&self, severity: BeepSeverity) -> bool {
        let Some(beeper) = self.beeper.as_ref().filter(|b| b.is_available()) else {
            tracing::warn!(severity = %severity, "System beep unavailable");
            return false;
        };

        match contain(|| beeper.beep(severity)) {
            Ok(()) => {
                tracing::debug!(severity = %severity, "System beep played");
                true
            }
            Err(e) => {
                tracing::error!(severity = %severity, error = %e, "System beep failed");
                false
            }
        }
    }
}

/// 执行后端调用，panic 视为后端故障
fn contain<F>(f: F) -> Result<(), PlaybackError>
where
    F: FnOnce() -> Result<(), PlaybackError>,
{
    catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|_| Err(PlaybackError::Device("backend panicked".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::domain::FALLBACK_CUE;
    use crate::test_support::catalog_in;

    /// 记录每次播放的测试后端
    struct RecordingBackend {
        available: bool,
        fail: bool,
        played: Mutex<Vec<PathBuf>>,
        checks: AtomicUsize,
    }

    impl RecordingBackend {
        fn new(available: bool) -> Self {
            Self {
                available,
                fail: false,
                played: Mutex::new(Vec::new()),
                checks: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(true)
            }
        }

        fn play_count(&self) -> usize {
            self.played.lock().unwrap().len()
        }
    }

    impl PlaybackBackend for RecordingBackend {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn can_play(&self) -> bool {
            self.checks.fetch_add(1, Ordering::SeqCst);
            self.available
        }

        fn play(&self, path: &Path) -> Result<(), PlaybackError> {
            self.played.lock().unwrap().push(path.to_path_buf());
            if self.fail {
                return Err(PlaybackError::ProcessFailed("exit status 1".to_string()));
            }
            Ok(())
        }
    }

    struct PanickingBackend;

    impl PlaybackBackend for PanickingBackend {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn can_play(&self) -> bool {
            true
        }

        fn play(&self, _path: &Path) -> Result<(), PlaybackError> {
            panic!("device exploded");
        }
    }

    struct FakeBeeper {
        available: bool,
        beeps: Mutex<Vec<BeepSeverity>>,
    }

    impl AlertBeeper for FakeBeeper {
        fn is_available(&self) -> bool {
            self.available
        }

        fn beep(&self, severity: BeepSeverity) -> Result<(), PlaybackError> {
            self.beeps.lock().unwrap().push(severity);
            Ok(())
        }
    }

    fn dispatcher_with(dir: &Path, backend: Arc<dyn PlaybackBackend>) -> CueDispatcher {
        let registry = BackendRegistry::new().with(backend);
        CueDispatcher::new(catalog_in(dir), &registry, None)
    }

    #[test]
    fn test_dispatch_plays_known_cue() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(RecordingBackend::new(true));
        let dispatcher = dispatcher_with(dir.path(), backend.clone());

        assert!(dispatcher.dispatch("tool_complete"));
        assert_eq!(
            backend.played.lock().unwrap().as_slice(),
            &[dir.path().join("done.mp3")]
        );
    }

    #[test]
    fn test_dispatch_unknown_cue_plays_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(RecordingBackend::new(true));
        let dispatcher = dispatcher_with(dir.path(), backend.clone());

        assert!(dispatcher.dispatch("nonexistent_cue"));
        assert!(dispatcher.dispatch(""));
        let played = backend.played.lock().unwrap();
        assert_eq!(played.len(), 2);
        assert!(played.iter().all(|p| p == &dir.path().join("ping.mp3")));
    }

    #[test]
    fn test_dispatch_missing_file_skips_backend() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(RecordingBackend::new(true));
        let dispatcher = dispatcher_with(dir.path(), backend.clone());

        assert!(!dispatcher.dispatch("tool_start"));
        assert_eq!(backend.play_count(), 0);
    }

    #[test]
    fn test_missing_fallback_file_does_not_loop() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_in(dir.path());
        std::fs::remove_file(dir.path().join("ping.mp3")).unwrap();
        let backend = Arc::new(RecordingBackend::new(true));
        let registry = BackendRegistry::new().with(backend.clone());
        let dispatcher = CueDispatcher::new(catalog, &registry, None);

        assert!(!dispatcher.dispatch("unknown"));
        assert_eq!(backend.play_count(), 0);
    }

    #[test]
    fn test_no_available_backend_returns_false_for_every_cue() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(RecordingBackend::new(false));
        let dispatcher = dispatcher_with(dir.path(), backend.clone());

        assert!(!dispatcher.is_audio_available());
        assert_eq!(dispatcher.backend_name(), None);
        for cue in [FALLBACK_CUE, "tool_complete", "tool_start", "nope", ""] {
            assert!(!dispatcher.dispatch(cue));
        }
        assert_eq!(backend.play_count(), 0);
    }

    #[test]
    fn test_empty_registry_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = CueDispatcher::new(catalog_in(dir.path()), &BackendRegistry::new(), None);
        assert!(!dispatcher.dispatch(FALLBACK_CUE));
    }

    #[test]
    fn test_backend_error_is_contained() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(RecordingBackend::failing());
        let dispatcher = dispatcher_with(dir.path(), backend.clone());

        assert!(!dispatcher.dispatch("tool_complete"));
        assert_eq!(backend.play_count(), 1);
    }

    #[test]
    fn test_backend_panic_is_contained() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = dispatcher_with(dir.path(), Arc::new(PanickingBackend));
        assert!(!dispatcher.dispatch("tool_complete"));
    }

    #[test]
    fn test_selection_picks_first_available_once() {
        let dir = tempfile::tempdir().unwrap();
        let unavailable = Arc::new(RecordingBackend::new(false));
        let available = Arc::new(RecordingBackend::new(true));
        let never_checked = Arc::new(RecordingBackend::new(true));
        let registry = BackendRegistry::new()
            .with(unavailable.clone())
            .with(available.clone())
            .with(never_checked.clone());
        let dispatcher = CueDispatcher::new(catalog_in(dir.path()), &registry, None);

        assert!(dispatcher.dispatch("tool_complete"));
        assert!(dispatcher.dispatch("tool_complete"));
        assert_eq!(unavailable.checks.load(Ordering::SeqCst), 1);
        assert_eq!(available.checks.load(Ordering::SeqCst), 1);
        assert_eq!(never_checked.checks.load(Ordering::SeqCst), 0);
        assert_eq!(available.play_count(), 2);
        assert_eq!(unavailable.play_count(), 0);
    }

    #[test]
    fn test_beep() {
        let dir = tempfile::tempdir().unwrap();
        let beeper = Arc::new(FakeBeeper {
            available: true,
            beeps: Mutex::new(Vec::new()),
        });
        let dispatcher =
            CueDispatcher::new(catalog_in(dir.path()), &BackendRegistry::new(), Some(beeper.clone()));

        assert!(dispatcher.beep(BeepSeverity::Error));
        assert_eq!(beeper.beeps.lock().unwrap().as_slice(), &[BeepSeverity::Error]);
    }

    #[test]
    fn test_beep_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let beeper = Arc::new(FakeBeeper {
            available: false,
            beeps: Mutex::new(Vec::new()),
        });
        let dispatcher =
            CueDispatcher::new(catalog_in(dir.path()), &BackendRegistry::new(), Some(beeper.clone()));

        assert!(!dispatcher.beep(BeepSeverity::Info));
        assert!(beeper.beeps.lock().unwrap().is_empty());

        let no_beeper = CueDispatcher::new(catalog_in(dir.path()), &BackendRegistry::new(), None);
        assert!(!no_beeper.beep(BeepSeverity::Info));
    }
}
