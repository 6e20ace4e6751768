pub mod ffmpeg_transcoder;
pub mod tool_resolver;
