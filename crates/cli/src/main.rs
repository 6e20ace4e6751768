use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use scribe_core::audio::infrastructure::ffmpeg_transcoder::FfmpegTranscoder;
use scribe_core::audio::infrastructure::tool_resolver;
use scribe_core::pipeline::transcribe_file_use_case::TranscribeFileUseCase;
use scribe_core::shared::constants::{DEFAULT_MODEL, LANGUAGE_HINT};
use scribe_core::transcript::format::{default_output_path, OutputFormat};
use scribe_core::transcription::infrastructure::model_resolver;
use scribe_core::transcription::infrastructure::whisper_transcriber::WhisperTranscriber;

/// Transcribe an audio file to text or SubRip subtitles.
#[derive(Parser)]
#[command(name = "scribe")]
struct Cli {
    /// Input audio file path.
    audio: PathBuf,

    /// Whisper model to use (e.g. tiny, base, small).
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Output file path (default: input path with the format's extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: txt or srt.
    #[arg(short, long, default_value = "txt")]
    format: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let format = parse_format(&cli.format)?;
    let started = Instant::now();

    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.audio, format));

    let ffmpeg = tool_resolver::resolve();
    log::info!("Using audio transcoder at {}", ffmpeg.display());

    log::info!("Resolving model: {}", cli.model);
    let model_path = model_resolver::resolve(&cli.model, None, Some(Box::new(download_progress)))?;
    eprintln!();

    let use_case = TranscribeFileUseCase::new(
        Box::new(FfmpegTranscoder::new(ffmpeg)),
        Box::new(WhisperTranscriber::new(&model_path, LANGUAGE_HINT)?),
        format,
    );
    use_case.execute(&cli.audio, &output)?;

    println!("Saved to: {}", output.display());
    println!("Duration: {:.2}s", started.elapsed().as_secs_f64());
    Ok(())
}

fn parse_format(format: &str) -> Result<OutputFormat, String> {
    match format {
        "txt" => Ok(OutputFormat::Text),
        "srt" => Ok(OutputFormat::Srt),
        other => Err(format!("Format must be 'txt' or 'srt', got '{other}'")),
    }
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading whisper model... {pct}%");
    } else {
        eprint!("\rDownloading whisper model... {downloaded} bytes");
    }
}
