use std::path::Path;

use super::segment::TranscriptionResult;
use crate::error::ScribeError;

/// Domain interface for speech-to-text inference.
///
/// Implementations consume a normalized 16 kHz mono wav file and return
/// the transcript with segment-level timestamps.
pub trait Transcriber: Send {
    fn transcribe(&self, wav: &Path) -> Result<TranscriptionResult, ScribeError>;
}
