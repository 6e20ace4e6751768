use std::path::Path;

use tempfile::TempPath;

/// Handle to the temporary 16 kHz mono wav produced by normalization.
///
/// Exclusively owned by one transcription run. The underlying file is
/// removed when the handle is dropped, on every exit path, so a failed
/// inference call cannot leave the file behind.
#[derive(Debug)]
pub struct NormalizedWav {
    path: TempPath,
}

impl NormalizedWav {
    pub(crate) fn new(path: TempPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
