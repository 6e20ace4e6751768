pub mod audio;
pub mod error;
pub mod pipeline;
pub mod shared;
pub mod transcript;
pub mod transcription;
