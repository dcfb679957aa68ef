//! Configuration types for resolved CLI arguments.
//!
//! Values are taken from the command line (or its environment variables),
//! then the TOML config file, then built-in defaults:
//!
//! ```toml
//! output_dir = "/home/me/Videos"
//!
//! [audio]
//! codec = "opus"
//! quality = "160"
//!
//! [video]
//! container = "mkv"
//! ```

use crate::cli::{Cli, Mode};
use crate::prompt::Prompt;
use eyre::{Context, Result, bail, ensure};
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use ytgrab_dl::dl::DownloadOptions;
use ytgrab_dl::presets::{AudioPreset, DEFAULT_AUDIO_QUALITY, DEFAULT_OUTPUT_DIR, VideoPreset};

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub output_dir: Option<PathBuf>,
    pub audio: AudioSection,
    pub video: VideoSection,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AudioSection {
    pub codec: Option<String>,
    pub quality: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct VideoSection {
    pub container: Option<String>,
}

impl FileConfig {
    /// `<config dir>/ytgrab/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ytgrab").join("config.toml"))
    }

    /// Load `explicit`, else the default path if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading config file");

        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config: {:?}", path.display()))?;

        Self::parse(&text).wrap_err_with(|| format!("invalid config: {:?}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Resolved configuration for a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub mode: Mode,
    pub output_dir: PathBuf,
    pub video: VideoPreset,
    pub audio: AudioPreset,
}

impl Config {
    /// Merge CLI and file values, prompting for the URL and mode when missing.
    pub fn resolve<R: BufRead, W: Write>(
        cli: Cli,
        file: FileConfig,
        prompt: &mut Prompt<R, W>,
    ) -> Result<Self> {
        let url = match cli.url {
            Some(url) => url.trim().to_string(),
            None => prompt.read_url()?,
        };

        if url.is_empty() {
            bail!("no URL provided");
        }

        let codec = match (cli.audio_codec, file.audio.codec) {
            (Some(codec), _) => codec,
            (None, Some(codec)) => codec.parse()?,
            (None, None) => Default::default(),
        };

        let quality = cli
            .audio_quality
            .or(file.audio.quality)
            .unwrap_or_else(|| DEFAULT_AUDIO_QUALITY.to_string());
        validate_quality(&quality)?;

        let container = match (cli.video_container, file.video.container) {
            (Some(container), _) => container,
            (None, Some(container)) => container.parse()?,
            (None, None) => Default::default(),
        };

        let output_dir = cli
            .output
            .or(file.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let audio = AudioPreset { codec, quality };
        let video = VideoPreset { container };

        let mode = match cli.mode {
            Some(mode) => mode,
            None => prompt.read_mode(audio.codec)?,
        };

        let config = Self {
            url,
            mode,
            output_dir,
            video,
            audio,
        };

        tracing::debug!(?config, "resolved configuration");

        Ok(config)
    }

    /// yt-dlp options for the selected mode.
    pub fn download_options(&self) -> DownloadOptions {
        match self.mode {
            Mode::Video => self.video.with_output_dir(&self.output_dir),
            Mode::Audio => self.audio.with_output_dir(&self.output_dir),
        }
    }
}

/// Accept a bitrate (`192`, `192k`) or a VBR level (`0`-`10`).
fn validate_quality(quality: &str) -> Result<()> {
    let digits = quality.strip_suffix(['k', 'K']).unwrap_or(quality);

    ensure!(
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        "invalid audio quality: {quality:?} (expected a bitrate like 192 or a VBR level 0-10)"
    );

    Ok(())
}
