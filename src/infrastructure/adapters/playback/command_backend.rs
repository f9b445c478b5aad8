//! Command Backend - 外部播放器进程
//!
//! 调用 ffplay / mpv / paplay / afplay 等可执行文件播放，
//! 等待进程退出即视为播放结束

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::application::ports::{PlaybackBackend, PlaybackError};

/// 平台默认播放器候选（按优先级）
#[cfg(target_os = "macos")]
const DEFAULT_PLAYERS: &[&str] = &["afplay", "ffplay -nodisp -autoexit -loglevel quiet"];

#[cfg(target_os = "windows")]
const DEFAULT_PLAYERS: &[&str] = &[
    "ffplay -nodisp -autoexit -loglevel quiet",
    "mpv --no-video --really-quiet",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_PLAYERS: &[&str] = &[
    "ffplay -nodisp -autoexit -loglevel quiet",
    "mpv --no-video --really-quiet",
    "mpg123 -q",
    "paplay",
    "pw-play",
    "aplay -q",
];

/// 播放器命令行：程序 + 固定参数，文件路径追加在最后
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl PlayerCommand {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// 按空白切分，例如 `"mpv --no-video"`
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts.map(str::to_string).collect()))
    }
}

/// 在 PATH 中查找可执行文件
pub(crate) fn find_program(program: &Path) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")
        .map(|p| std::env::split_paths(&p).collect::<Vec<_>>())
        .unwrap_or_default();
    find_program_in(program, paths)
}

pub(crate) fn find_program_in<I>(program: &Path, search_paths: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    if program.components().count() > 1 {
        return is_executable(program).then(|| program.to_path_buf());
    }

    search_paths.into_iter().find_map(|dir| {
        let candidate = dir.join(program);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) && program.extension().is_none() {
            let exe = candidate.with_extension("exe");
            if is_executable(&exe) {
                return Some(exe);
            }
        }
        None
    })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// 运行命令直到退出，非零退出码视为失败
pub(crate) fn run_to_completion<I, S>(program: &Path, args: I) -> Result<(), PlaybackError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(PlaybackError::ProcessFailed(format!(
        "{} exited with {}: {}",
        program.display(),
        output.status,
        stderr.trim()
    )))
}

/// 外部播放器后端
pub struct CommandBackend {
    player: Option<PlayerCommand>,
}

impl CommandBackend {
    /// 在候选列表中选出第一个存在的播放器；列表为空时使用平台默认
    pub fn detect(candidates: &[String]) -> Self {
        let lines: Vec<&str> = if candidates.is_empty() {
            DEFAULT_PLAYERS.to_vec()
        } else {
            candidates.iter().map(String::as_str).collect()
        };

        let player = lines.into_iter().filter_map(PlayerCommand::parse).find_map(|cmd| {
            let program = find_program(&cmd.program)?;
            Some(PlayerCommand { program, ..cmd })
        });

        match &player {
            Some(cmd) => tracing::debug!(player = %cmd.program.display(), "External player found"),
            None => tracing::debug!("No external player found"),
        }

        Self { player }
    }

    /// 使用指定播放器（不做探测）
    pub fn with_player(player: PlayerCommand) -> Self {
        Self {
            player: Some(player),
        }
    }
}

impl PlaybackBackend for CommandBackend {
    fn name(&self) -> &'static str {
        "command"
    }

    fn can_play(&self) -> bool {
        self.player.is_some()
    }

    fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let player = self
            .player
            .as_ref()
            .ok_or_else(|| PlaybackError::Unavailable("no external player".to_string()))?;

        let args = player
            .args
            .iter()
            .map(OsStr::new)
            .chain(std::iter::once(path.as_os_str()));
        run_to_completion(&player.program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_command_line() {
        let cmd = PlayerCommand::parse("ffplay  -nodisp -autoexit").unwrap();
        assert_eq!(cmd.program, PathBuf::from("ffplay"));
        assert_eq!(cmd.args, vec!["-nodisp", "-autoexit"]);
        assert_eq!(PlayerCommand::parse("   "), None);
    }

    #[test]
    fn test_find_program_in_search_paths() {
        let dir = tempfile::tempdir().unwrap();
        let program = dir.path().join("fakeplayer");
        std::fs::write(&program, b"#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let found = find_program_in(Path::new("fakeplayer"), vec![dir.path().to_path_buf()]);
        assert_eq!(found, Some(program.clone()));

        let missing = find_program_in(Path::new("otherplayer"), vec![dir.path().to_path_buf()]);
        assert_eq!(missing, None);

        assert_eq!(find_program_in(&program, Vec::new()), Some(program));
    }

    #[test]
    fn test_detect_without_players_is_unavailable() {
        let backend = CommandBackend::detect(&["hookbell-no-such-player --flag".to_string()]);
        assert!(!backend.can_play());
        assert!(matches!(
            backend.play(Path::new("x.mp3")),
            Err(PlaybackError::Unavailable(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_play_success_and_failure() {
        let ok = CommandBackend::with_player(PlayerCommand::new("true", Vec::new()));
        assert!(ok.can_play());
        assert!(ok.play(Path::new("cue.mp3")).is_ok());

        let failing = CommandBackend::with_player(PlayerCommand::new("false", Vec::new()));
        assert!(matches!(
            failing.play(Path::new("cue.mp3")),
            Err(PlaybackError::ProcessFailed(_))
        ));
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let backend =
            CommandBackend::with_player(PlayerCommand::new("/nonexistent/hookbell-player", Vec::new()));
        assert!(matches!(
            backend.play(Path::new("cue.mp3")),
            Err(PlaybackError::Io(_))
        ));
    }
}
