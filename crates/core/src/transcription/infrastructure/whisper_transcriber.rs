use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::error::ScribeError;
use crate::transcription::domain::segment::{Segment, TranscriptionResult};
use crate::transcription::domain::transcriber::Transcriber;

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// Consumes a normalized 16 kHz mono wav and produces the transcript
/// with segment-level timestamps.
#[derive(Debug)]
pub struct WhisperTranscriber {
    model_path: PathBuf,
    language: String,
}

impl WhisperTranscriber {
    pub fn new(model_path: &Path, language: &str) -> Result<Self, ScribeError> {
        if !model_path.exists() {
            return Err(ScribeError::ModelNotFound(model_path.to_path_buf()));
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
            language: language.to_string(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl Transcriber for WhisperTranscriber {
    fn transcribe(&self, wav: &Path) -> Result<TranscriptionResult, ScribeError> {
        let samples = read_wav_samples(wav)?;

        let ctx = WhisperContext::new_with_params(
            &self.model_path.to_string_lossy(),
            WhisperContextParameters::default(),
        )?;
        let mut state = ctx.create_state()?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some(&self.language));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state.full(params, &samples)?;

        let mut segments = Vec::new();
        let mut text = String::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };
            let seg_text = match segment.to_str() {
                Ok(t) => t,
                Err(_) => continue,
            };

            // Segment timestamps are in centiseconds (10ms units)
            let start = segment.start_timestamp() as f64 / 100.0;
            let end = segment.end_timestamp() as f64 / 100.0;

            text.push_str(seg_text);
            segments.push(Segment {
                start,
                end,
                text: seg_text.to_string(),
            });
        }

        Ok(TranscriptionResult { text, segments })
    }
}

/// Decode a 16-bit PCM wav into f32 samples in [-1, 1].
fn read_wav_samples(path: &Path) -> Result<Vec<f32>, ScribeError> {
    let wav_err = |source| ScribeError::WavRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = hound::WavReader::open(path).map_err(wav_err)?;
    reader
        .samples::<i16>()
        .map(|s| s.map(|v| v as f32 / i16::MAX as f32).map_err(wav_err))
        .collect()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
