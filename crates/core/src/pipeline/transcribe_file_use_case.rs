use std::fs;
use std::path::Path;

use crate::audio::domain::transcoder::AudioTranscoder;
use crate::error::ScribeError;
use crate::transcript::format::{format_plain_text, format_srt, OutputFormat};
use crate::transcription::domain::transcriber::Transcriber;

/// One transcription run: normalize, infer, serialize, write.
pub struct TranscribeFileUseCase {
    transcoder: Box<dyn AudioTranscoder>,
    transcriber: Box<dyn Transcriber>,
    format: OutputFormat,
}

impl TranscribeFileUseCase {
    pub fn new(
        transcoder: Box<dyn AudioTranscoder>,
        transcriber: Box<dyn Transcriber>,
        format: OutputFormat,
    ) -> Self {
        Self {
            transcoder,
            transcriber,
            format,
        }
    }

    pub fn execute(&self, input: &Path, output: &Path) -> Result<(), ScribeError> {
        log::info!("Converting audio to 16 kHz mono wav");
        let wav = self.transcoder.transcode(input)?;

        log::info!("Transcribing {}", input.display());
        let result = self.transcriber.transcribe(wav.path());
        // The recognizer is done with the wav either way
        drop(wav);
        let result = result?;

        let rendered = match self.format {
            OutputFormat::Text => format_plain_text(&result),
            OutputFormat::Srt => format_srt(&result.segments),
        };

        fs::write(output, rendered).map_err(|e| ScribeError::OutputWrite {
            path: output.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::normalized_wav::NormalizedWav;
    use crate::transcription::domain::segment::{Segment, TranscriptionResult};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    // ─── Stubs ───

    struct StubTranscoder {
        fail: bool,
        created: Arc<Mutex<Option<PathBuf>>>,
    }

    impl StubTranscoder {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                created: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl AudioTranscoder for StubTranscoder {
        fn transcode(&self, input: &Path) -> Result<NormalizedWav, ScribeError> {
            if self.fail {
                return Err(ScribeError::InputNotFound(input.to_path_buf()));
            }
            let temp = tempfile::Builder::new()
                .suffix(".wav")
                .tempfile()
                .unwrap()
                .into_temp_path();
            *self.created.lock().unwrap() = Some(temp.to_path_buf());
            Ok(NormalizedWav::new(temp))
        }
    }

    struct StubTranscriber {
        result: Option<TranscriptionResult>,
        seen_wav: Arc<Mutex<Option<PathBuf>>>,
    }

    impl StubTranscriber {
        fn ok(result: TranscriptionResult) -> Self {
            Self {
                result: Some(result),
                seen_wav: Arc::new(Mutex::new(None)),
            }
        }

        fn failing() -> Self {
            Self {
                result: None,
                seen_wav: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl Transcriber for StubTranscriber {
        fn transcribe(&self, wav: &Path) -> Result<TranscriptionResult, ScribeError> {
            *self.seen_wav.lock().unwrap() = Some(wav.to_path_buf());
            match &self.result {
                Some(r) => Ok(r.clone()),
                None => Err(ScribeError::ModelNotFound(PathBuf::from("stub"))),
            }
        }
    }

    fn sample_result() -> TranscriptionResult {
        TranscriptionResult {
            text: " hello world ".to_string(),
            segments: vec![Segment {
                start: 0.0,
                end: 1.5,
                text: " hello world ".to_string(),
            }],
        }
    }

    #[test]
    fn test_writes_trimmed_plain_text() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.txt");

        let use_case = TranscribeFileUseCase::new(
            Box::new(StubTranscoder::new(false)),
            Box::new(StubTranscriber::ok(sample_result())),
            OutputFormat::Text,
        );
        use_case.execute(Path::new("in.mp3"), &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "hello world");
    }

    #[test]
    fn test_writes_srt_blocks() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.srt");

        let use_case = TranscribeFileUseCase::new(
            Box::new(StubTranscoder::new(false)),
            Box::new(StubTranscriber::ok(sample_result())),
            OutputFormat::Srt,
        );
        use_case.execute(Path::new("in.mp3"), &output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "1\n00:00:00,000 --> 00:00:01,500\nhello world\n"
        );
    }

    #[test]
    fn test_transcriber_sees_transcoded_wav() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.txt");

        let transcoder = StubTranscoder::new(false);
        let created = transcoder.created.clone();
        let transcriber = StubTranscriber::ok(sample_result());
        let seen = transcriber.seen_wav.clone();

        let use_case = TranscribeFileUseCase::new(
            Box::new(transcoder),
            Box::new(transcriber),
            OutputFormat::Text,
        );
        use_case.execute(Path::new("in.mp3"), &output).unwrap();

        let created = created.lock().unwrap().clone().unwrap();
        let seen = seen.lock().unwrap().clone().unwrap();
        assert_eq!(created, seen);
    }

    #[test]
    fn test_temp_wav_removed_after_success() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.txt");

        let transcoder = StubTranscoder::new(false);
        let created = transcoder.created.clone();

        let use_case = TranscribeFileUseCase::new(
            Box::new(transcoder),
            Box::new(StubTranscriber::ok(sample_result())),
            OutputFormat::Text,
        );
        use_case.execute(Path::new("in.mp3"), &output).unwrap();

        assert!(!created.lock().unwrap().clone().unwrap().exists());
    }

    #[test]
    fn test_temp_wav_removed_after_inference_failure() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.txt");

        let transcoder = StubTranscoder::new(false);
        let created = transcoder.created.clone();

        let use_case = TranscribeFileUseCase::new(
            Box::new(transcoder),
            Box::new(StubTranscriber::failing()),
            OutputFormat::Text,
        );
        let result = use_case.execute(Path::new("in.mp3"), &output);

        assert!(result.is_err());
        assert!(!created.lock().unwrap().clone().unwrap().exists());
        assert!(!output.exists());
    }

    #[test]
    fn test_transcoder_failure_propagates() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.txt");

        let use_case = TranscribeFileUseCase::new(
            Box::new(StubTranscoder::new(true)),
            Box::new(StubTranscriber::ok(sample_result())),
            OutputFormat::Text,
        );
        let result = use_case.execute(Path::new("in.mp3"), &output);

        assert!(matches!(result, Err(ScribeError::InputNotFound(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_is_output_write_error() {
        let use_case = TranscribeFileUseCase::new(
            Box::new(StubTranscoder::new(false)),
            Box::new(StubTranscriber::ok(sample_result())),
            OutputFormat::Text,
        );
        let result = use_case.execute(Path::new("in.mp3"), Path::new("/nonexistent/dir/out.txt"));

        assert!(matches!(result, Err(ScribeError::OutputWrite { .. })));
    }
}
