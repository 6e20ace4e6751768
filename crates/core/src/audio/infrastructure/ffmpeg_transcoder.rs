use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::audio::domain::normalized_wav::NormalizedWav;
use crate::audio::domain::transcoder::AudioTranscoder;
use crate::error::ScribeError;
use crate::shared::constants::{TARGET_CHANNELS, TARGET_SAMPLE_RATE};

/// Normalizes audio by shelling out to ffmpeg.
///
/// Any container or codec ffmpeg understands comes out as a temporary
/// single-channel 16 kHz PCM wav. ffmpeg's own output is suppressed;
/// only its exit status is inspected.
#[derive(Debug)]
pub struct FfmpegTranscoder {
    tool: PathBuf,
}

impl FfmpegTranscoder {
    /// `tool` is the path produced by `tool_resolver::resolve`.
    pub fn new(tool: PathBuf) -> Self {
        Self { tool }
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }
}

impl AudioTranscoder for FfmpegTranscoder {
    fn transcode(&self, input: &Path) -> Result<NormalizedWav, ScribeError> {
        if !input.exists() {
            return Err(ScribeError::InputNotFound(input.to_path_buf()));
        }

        let temp = tempfile::Builder::new()
            .suffix(".wav")
            .tempfile()
            .map_err(ScribeError::TempWav)?
            .into_temp_path();
        let out_path: &Path = temp.as_ref();

        let status = Command::new(&self.tool)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-ar")
            .arg(TARGET_SAMPLE_RATE.to_string())
            .arg("-ac")
            .arg(TARGET_CHANNELS.to_string())
            .arg(out_path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ScribeError::ToolSpawn {
                tool: self.tool.clone(),
                source: e,
            })?;

        if !status.success() {
            // temp drops here, taking any partial wav with it
            return Err(ScribeError::ConversionFailed { status });
        }

        Ok(NormalizedWav::new(temp))
    }
}
