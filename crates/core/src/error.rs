use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::transcription::infrastructure::model_resolver::ModelResolveError;

/// Everything that can abort a transcription run.
///
/// One variant per failure class; the CLI prints the message and maps
/// any variant to exit status 1. Nothing is retried.
#[derive(Error, Debug)]
pub enum ScribeError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("failed to create temporary wav file: {0}")]
    TempWav(#[source] io::Error),
    #[error("failed to run {tool}: {source}")]
    ToolSpawn {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("audio conversion failed: ffmpeg exited with {status}")]
    ConversionFailed { status: ExitStatus },
    #[error("whisper model not found at {0}")]
    ModelNotFound(PathBuf),
    #[error(transparent)]
    Model(#[from] ModelResolveError),
    #[error("failed to read wav {path}: {source}")]
    WavRead {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("transcription failed: {0}")]
    Inference(#[from] whisper_rs::WhisperError),
    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
