/// ggml model identifier passed to whisper.cpp when `-m` is omitted.
pub const DEFAULT_MODEL: &str = "tiny";

pub const MODEL_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Fixed decode-language hint handed to the model.
pub const LANGUAGE_HINT: &str = "vi";

pub const TARGET_SAMPLE_RATE: u32 = 16000;
pub const TARGET_CHANNELS: u32 = 1;

/// Conventional name of the ffmpeg executable on this platform.
pub const FFMPEG_EXECUTABLE: &str = if cfg!(windows) { "ffmpeg.exe" } else { "ffmpeg" };
