use std::path::Path;

use super::normalized_wav::NormalizedWav;
use crate::error::ScribeError;

/// Domain interface for converting arbitrary audio input into the
/// single-channel 16 kHz wav the recognizer consumes.
pub trait AudioTranscoder: Send {
    fn transcode(&self, input: &Path) -> Result<NormalizedWav, ScribeError>;
}
