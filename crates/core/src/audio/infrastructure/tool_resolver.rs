use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::shared::constants::FFMPEG_EXECUTABLE;

/// Locate the ffmpeg executable used for audio normalization.
///
/// Resolution order:
/// 1. the platform-conventional name (`ffmpeg` / `ffmpeg.exe`) on `PATH`
/// 2. next to the running executable, which covers bundled installs
///    where ffmpeg ships alongside the binary
///
/// Called once at startup; the resolved path is handed to
/// `FfmpegTranscoder` so nothing downstream repeats the lookup.
pub fn resolve() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    resolve_in(FFMPEG_EXECUTABLE, env::var_os("PATH").as_deref(), &exe_dir)
}

fn resolve_in(name: &str, path_var: Option<&OsStr>, exe_dir: &Path) -> PathBuf {
    match search_path(name, path_var) {
        Some(found) => found,
        None => exe_dir.join(name),
    }
}

fn search_path(name: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    env::split_paths(path_var?)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
