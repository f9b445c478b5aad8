//! Playback Worker - Background Cue Player

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{DispatchQueuePort, PlaybackJob, PlaybackKind, SubmitError};
use crate::application::CueDispatcher;
use crate::config::MAX_WORKERS;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct PlaybackWorkerConfig {
    /// 最大并发播放数，限定在 1..=MAX_WORKERS
    pub workers: usize,
}

impl Default for PlaybackWorkerConfig {
    fn default() -> Self {
        Self { workers: 2 }
    }
}

/// 创建有界播放队列
pub fn playback_channel(capacity: usize) -> (PlaybackQueue, mpsc::Receiver<PlaybackJob>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (PlaybackQueue { sender }, receiver)
}

/// 播放队列（入队端）
#[derive(Clone)]
pub struct PlaybackQueue {
    sender: mpsc::Sender<PlaybackJob>,
}

impl DispatchQueuePort for PlaybackQueue {
    fn submit(&self, job: PlaybackJob) -> Result<(), SubmitError> {
        self.sender.try_send(job).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::QueueFull,
            TrySendError::Closed(_) => SubmitError::Closed,
        })
    }

    fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// 播放 Worker
///
/// 从队列消费任务，在阻塞线程池中执行播放。同时进行的播放数不超过
/// `workers`；不保证播放顺序与入队顺序一致。
pub struct PlaybackWorker {
    config: PlaybackWorkerConfig,
    queue_receiver: mpsc::Receiver<PlaybackJob>,
    dispatcher: Arc<CueDispatcher>,
    shutdown: CancellationToken,
}

impl PlaybackWorker {
    pub fn new(
        config: PlaybackWorkerConfig,
        queue_receiver: mpsc::Receiver<PlaybackJob>,
        dispatcher: Arc<CueDispatcher>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            config,
            queue_receiver,
            dispatcher,
            shutdown,
        }
    }

    /// 启动 Worker
    ///
    /// 收到关闭信号后停止接收新任务，执行完已排队和进行中的任务再返回
    pub async fn run(mut self) {
        let workers = self.config.workers.clamp(1, MAX_WORKERS);
        tracing::info!(workers, "PlaybackWorker started");

        // 使用 semaphore 控制并发
        let semaphore = Arc::new(Semaphore::new(workers));

        loop {
            let job = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                job = self.queue_receiver.recv() => job,
            };

            match job {
                Some(job) => self.spawn_job(job, &semaphore).await,
                None => break,
            }
        }

        tracing::info!("PlaybackWorker draining queue");
        self.queue_receiver.close();

        let mut drained = 0usize;
        while let Some(job) = self.queue_receiver.recv().await {
            self.spawn_job(job, &semaphore).await;
            drained += 1;
        }

        // 拿回全部 permit 即表示进行中的播放都已结束
        if semaphore.acquire_many(workers as u32).await.is_err() {
            tracing::error!("Playback semaphore closed while draining");
        }

        tracing::info!(drained, "PlaybackWorker stopped");
    }

    async fn spawn_job(&self, job: PlaybackJob, semaphore: &Arc<Semaphore>) {
        let permit = match semaphore.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                tracing::error!(job_id = %job.job_id, "Failed to acquire semaphore permit");
                return;
            }
        };

        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move {
            let _permit = permit; // 持有 permit 直到播放结束
            let job_id = job.job_id;

            let result = tokio::task::spawn_blocking(move || Self::process_job(&dispatcher, job)).await;
            if let Err(e) = result {
                tracing::error!(job_id = %job_id, error = %e, "Playback job aborted");
            }
        });
    }

    /// 处理单个任务（阻塞）
    fn process_job(dispatcher: &CueDispatcher, job: PlaybackJob) -> bool {
        let started = Instant::now();
        let played = match &job.kind {
            PlaybackKind::Cue(cue_id) => dispatcher.dispatch(cue_id),
            PlaybackKind::Beep(severity) => dispatcher.beep(*severity),
        };

        tracing::debug!(
            job_id = %job.job_id,
            kind = ?job.kind,
            played,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Playback job finished"
        );
        played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::application::ports::{PlaybackBackend, PlaybackError};
    use crate::application::BackendRegistry;
    use crate::test_support::catalog_in;

    /// 每次播放固定耗时，并记录最大并发数
    struct SlowBackend {
        delay: Duration,
        active: AtomicUsize,
        max_active: AtomicUsize,
        played: AtomicUsize,
    }

    impl SlowBackend {
        fn new(delay: Duration) -> Self {
            Self {
                delay,
                active: AtomicUsize::new(0),
                max_active: AtomicUsize::new(0),
                played: AtomicUsize::new(0),
            }
        }
    }

    impl PlaybackBackend for SlowBackend {
        fn name(&self) -> &'static str {
            "slow"
        }

        fn can_play(&self) -> bool {
            true
        }

        fn play(&self, _path: &Path) -> Result<(), PlaybackError> {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(self.delay);
            self.active.fetch_sub(1, Ordering::SeqCst);
            self.played.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Harness {
        _dir: tempfile::TempDir,
        backend: Arc<SlowBackend>,
        queue: PlaybackQueue,
        shutdown: CancellationToken,
        handle: tokio::task::JoinHandle<()>,
    }

    fn start(workers: usize, capacity: usize, delay: Duration) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(SlowBackend::new(delay));
        let registry = BackendRegistry::new().with(backend.clone());
        let dispatcher = Arc::new(CueDispatcher::new(catalog_in(dir.path()), &registry, None));

        let (queue, receiver) = playback_channel(capacity);
        let shutdown = CancellationToken::new();
        let worker = PlaybackWorker::new(
            PlaybackWorkerConfig { workers },
            receiver,
            dispatcher,
            shutdown.clone(),
        );
        let handle = tokio::spawn(worker.run());

        Harness {
            _dir: dir,
            backend,
            queue,
            shutdown,
            handle,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_shutdown_drains_queued_jobs() {
        let h = start(2, 64, Duration::from_millis(20));

        for _ in 0..8 {
            h.queue.submit(PlaybackJob::cue("tool_complete")).unwrap();
        }
        h.shutdown.cancel();
        h.handle.await.unwrap();

        assert_eq!(h.backend.played.load(Ordering::SeqCst), 8);
        assert!(!h.queue.is_open());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrency_is_bounded_by_pool_size() {
        let h = start(2, 64, Duration::from_millis(50));

        for _ in 0..6 {
            h.queue.submit(PlaybackJob::cue("tool_complete")).unwrap();
        }
        h.shutdown.cancel();
        h.handle.await.unwrap();

        assert_eq!(h.backend.played.load(Ordering::SeqCst), 6);
        assert!(h.backend.max_active.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_submit_does_not_wait_for_playback() {
        let h = start(2, 64, Duration::from_millis(200));

        let started = Instant::now();
        for _ in 0..50 {
            h.queue.submit(PlaybackJob::cue("tool_complete")).unwrap();
        }
        assert!(started.elapsed() < Duration::from_millis(200));

        // 不等待排队任务播完，直接丢弃 harness
        h.handle.abort();
    }

    #[tokio::test]
    async fn test_oversized_pool_is_clamped() {
        let h = start(usize::MAX, 8, Duration::from_millis(1));

        h.queue.submit(PlaybackJob::cue("tool_complete")).unwrap();
        h.shutdown.cancel();
        h.handle.await.unwrap();

        assert_eq!(h.backend.played.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_full_queue_rejects_without_blocking() {
        let (queue, _receiver) = playback_channel(1);

        queue.submit(PlaybackJob::cue("tool_start")).unwrap();
        assert_eq!(
            queue.submit(PlaybackJob::cue("tool_start")),
            Err(SubmitError::QueueFull)
        );
    }

    #[tokio::test]
    async fn test_submit_after_shutdown_is_closed() {
        let h = start(1, 4, Duration::from_millis(1));

        h.shutdown.cancel();
        h.handle.await.unwrap();

        assert!(!h.queue.is_open());
        assert_eq!(
            h.queue.submit(PlaybackJob::cue("tool_complete")),
            Err(SubmitError::Closed)
        );
    }

    #[tokio::test]
    async fn test_missing_files_and_unknown_cues_do_not_stop_worker() {
        let h = start(1, 16, Duration::from_millis(1));

        h.queue.submit(PlaybackJob::cue("tool_start")).unwrap(); // 文件不存在
        h.queue.submit(PlaybackJob::cue("no_such_cue")).unwrap(); // 兜底
        h.queue
            .submit(PlaybackJob::beep(crate::domain::BeepSeverity::Error))
            .unwrap(); // 没有 beeper
        h.queue.submit(PlaybackJob::cue("tool_complete")).unwrap();
        h.shutdown.cancel();
        h.handle.await.unwrap();

        assert_eq!(h.backend.played.load(Ordering::SeqCst), 2);
    }
}
