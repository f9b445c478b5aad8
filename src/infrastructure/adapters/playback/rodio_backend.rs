//! Rodio Backend - 进程内解码播放
//!
//! 需要 `native-audio` feature

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{PlaybackBackend, PlaybackError};

/// Rodio 播放后端
///
/// `OutputStream` 不是 `Send`，每次播放在 worker 线程上重新打开默认输出设备
pub struct RodioBackend {
    available: bool,
}

impl RodioBackend {
    /// 探测默认输出设备
    pub fn detect() -> Self {
        let available = match OutputStream::try_default() {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "No default audio output device");
                false
            }
        };
        Self { available }
    }
}

impl PlaybackBackend for RodioBackend {
    fn name(&self) -> &'static str {
        "rodio"
    }

    fn can_play(&self) -> bool {
        self.available
    }

    fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let (_stream, handle) =
            OutputStream::try_default().map_err(|e| PlaybackError::Device(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| PlaybackError::Device(e.to_string()))?;

        let file = File::open(path)?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode(e.to_string()))?;

        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}
