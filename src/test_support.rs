//! 测试辅助：假队列与临时提示音目录

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::application::ports::{DispatchQueuePort, PlaybackJob, PlaybackKind, SubmitError};
use crate::domain::{CueCatalog, FALLBACK_CUE};

/// 记录入队任务的测试队列
pub struct FakeQueue {
    pub jobs: Mutex<Vec<PlaybackJob>>,
    pub reject: Option<SubmitError>,
}

impl FakeQueue {
    pub fn open() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
            reject: None,
        }
    }

    pub fn rejecting(err: SubmitError) -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
            reject: Some(err),
        }
    }

    pub fn kinds(&self) -> Vec<PlaybackKind> {
        self.jobs.lock().unwrap().iter().map(|j| j.kind.clone()).collect()
    }
}

impl DispatchQueuePort for FakeQueue {
    fn submit(&self, job: PlaybackJob) -> Result<(), SubmitError> {
        if let Some(err) = &self.reject {
            return Err(err.clone());
        }
        self.jobs.lock().unwrap().push(job);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.reject != Some(SubmitError::Closed)
    }
}

/// 在 `dir` 中创建目录：兜底与 tool_complete 有文件，tool_start 没有
pub fn catalog_in(dir: &Path) -> Arc<CueCatalog> {
    std::fs::write(dir.join("ping.mp3"), b"fake").unwrap();
    std::fs::write(dir.join("done.mp3"), b"fake").unwrap();
    let files: BTreeMap<String, String> = [
        (FALLBACK_CUE, "ping.mp3"),
        ("tool_complete", "done.mp3"),
        ("tool_start", "start.mp3"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    Arc::new(CueCatalog::new(dir, files).unwrap())
}
