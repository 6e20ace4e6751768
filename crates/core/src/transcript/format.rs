use std::path::{Path, PathBuf};

use crate::transcription::domain::segment::{Segment, TranscriptionResult};

/// Serialization applied to a transcription result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Srt,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Srt => "srt",
        }
    }
}

/// Output path used when none is given: the input path with the
/// format's extension.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Plain-text rendering: the trimmed full transcript, nothing else.
pub fn format_plain_text(result: &TranscriptionResult) -> String {
    result.text.trim().to_string()
}

/// SubRip rendering: 1-based index, time range, trimmed text, one
/// blank line between blocks.
pub fn format_srt(segments: &[Segment]) -> String {
    let blocks: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                srt_timestamp(seg.start),
                srt_timestamp(seg.end),
                seg.text.trim()
            )
        })
        .collect();
    blocks.join("\n")
}

/// `HH:MM:SS,mmm` with a comma before the milliseconds, per the SubRip
/// convention. Seconds are split at millisecond precision.
fn srt_timestamp(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let h = total_ms / 3_600_000;
    let m = total_ms % 3_600_000 / 60_000;
    let s = total_ms % 60_000 / 1000;
    let ms = total_ms % 1000;
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}
