pub mod model_resolver;
pub mod whisper_transcriber;
