//! CLI argument definitions using clap.

use crate::config::{Config, FileConfig};
use crate::console;
use crate::prompt::Prompt;
use clap::{Parser, ValueEnum};
use eyre::Result;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use ytgrab_dl::presets::{AudioCodec, VideoContainer};

#[derive(Debug, Parser)]
#[command(name = "ytgrab")]
#[command(about = "Download a video or extract its audio")]
#[command(version)]
pub struct Cli {
    /// Video URL (prompted for when omitted)
    pub url: Option<String>,

    /// Output directory (default: `downloads`)
    #[arg(short, long, env = "YTGRAB_OUTPUT")]
    pub output: Option<PathBuf>,

    /// What to download (skips the choice menu)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Codec for audio-only downloads (default: mp3)
    #[arg(long)]
    pub audio_codec: Option<AudioCodec>,

    /// Bitrate in kbps, or VBR level 0-10, for audio-only downloads (default: 192)
    #[arg(long)]
    pub audio_quality: Option<String>,

    /// Container for video downloads (default: mp4)
    #[arg(long)]
    pub video_container: Option<VideoContainer>,

    /// Config file (default: `<config dir>/ytgrab/config.toml` when present)
    #[arg(long, env = "YTGRAB_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Download kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Best video and audio merged into one file
    Video,
    /// Audio only, re-encoded with FFmpeg
    Audio,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => f.write_str("video"),
            Self::Audio => f.write_str("audio"),
        }
    }
}

/// Execute CLI command on the process stdin/stdout.
pub fn run_cli(cli: Cli) -> Result<()> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());

    run_with(cli, file, &mut prompt)
}

/// Execute CLI command - separated for testing.
pub fn run_with<R: BufRead, W: Write>(
    cli: Cli,
    file: FileConfig,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    tracing::debug!(?cli, ?file, "parsed arguments");

    console::banner(prompt.output())?;

    let config = Config::resolve(cli, file, prompt)?;

    crate::dl::execute(config)
}
