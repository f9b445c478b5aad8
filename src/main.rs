//! Hookbell - Hook 事件提示音服务

use std::sync::Arc;

use hookbell::application::{AlertBeeper, CueDispatcher};
use hookbell::config::{load_config, print_config, LogConfig};
use hookbell::infrastructure::build_registry;
use hookbell::infrastructure::http::{AppState, HttpServer, ServerConfig};
use hookbell::infrastructure::worker::{playback_channel, PlaybackWorker, PlaybackWorkerConfig};
use tokio_util::sync::CancellationToken;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},hookbell={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Hookbell - Hook Notification Service starting");
    print_config(&config);

    // 提示音目录（缺少兜底 cue 在配置校验时已失败）
    let catalog = Arc::new(config.sounds.to_catalog()?);
    for cue in catalog.unmapped_event_cues() {
        tracing::warn!(cue_id = %cue, "Event cue not in sound catalog, fallback will be used");
    }

    // 确保音频目录存在
    tokio::fs::create_dir_all(catalog.base_path()).await?;

    // 选择播放后端
    let (registry, beep) = build_registry(&config.dispatcher);
    let beeper: Arc<dyn AlertBeeper> = beep;
    let dispatcher = Arc::new(CueDispatcher::new(catalog.clone(), &registry, Some(beeper)));
    let audio_backend = dispatcher.backend_name();

    // 创建播放队列与 Worker
    let (queue, queue_rx) = playback_channel(config.dispatcher.queue_capacity);
    let shutdown = CancellationToken::new();
    let worker = PlaybackWorker::new(
        PlaybackWorkerConfig {
            workers: config.dispatcher.workers,
        },
        queue_rx,
        dispatcher,
        shutdown.clone(),
    );
    let worker_handle = tokio::spawn(worker.run());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = Arc::new(AppState::new(Arc::new(queue), catalog, audio_backend));
    let server = HttpServer::new(server_config, state);

    let served = server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await;

    // 停止接收新任务，等待已排队和进行中的播放结束
    shutdown.cancel();
    if let Err(e) = worker_handle.await {
        tracing::error!(error = %e, "Playback worker terminated abnormally");
    }

    served?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
