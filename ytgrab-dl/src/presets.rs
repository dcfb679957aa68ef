//! Download presets: best-quality video, or audio extracted with FFmpeg.
//!
//! **Presets:** [`VideoPreset`] (merged video+audio, `mp4` by default),
//! [`AudioPreset`] (best audio re-encoded, `mp3` at 192 kbps by default)
//!
//! ```no_run
//! use ytgrab_dl::{dl::download, presets::AudioPreset};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = AudioPreset::default().with_output_dir("downloads".as_ref());
//! download("https://youtube.com/watch?v=example", opts, |_| {})?;
//! # Ok(())
//! # }
//! ```
//!
//! **Output:** `title.ext` under `paths.home` (`<output_dir>`)

use crate::dl::{DownloadOptions, OutputPaths, OutputTemplates, PostProcessor};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Filename template shared by every preset.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Default directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Default audio bitrate in kbps.
pub const DEFAULT_AUDIO_QUALITY: &str = "192";

/// `paths.home` set to `output_dir`, file names from [`OUTPUT_TEMPLATE`].
fn set_output_dir(opts: &mut DownloadOptions, output_dir: &Path) {
    opts.paths = Some(OutputPaths::default().with_home(output_dir));
    opts.outtmpl = Some(OutputTemplates::simple(OUTPUT_TEMPLATE.to_string()));
}

/// Container for merged video downloads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VideoContainer {
    #[default]
    Mp4,
    Webm,
    Mkv,
}

impl VideoContainer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Webm => "webm",
            Self::Mkv => "mkv",
        }
    }

    /// yt-dlp format selector preferring streams that merge without re-encoding.
    pub fn format_selector(self) -> String {
        match self {
            Self::Mp4 => "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best".to_string(),
            Self::Webm => {
                "bestvideo[ext=webm]+bestaudio[ext=webm]/best[ext=webm]/best".to_string()
            }
            // Matroska holds any codec pair
            Self::Mkv => "bestvideo+bestaudio/best".to_string(),
        }
    }
}

impl fmt::Display for VideoContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoContainer {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp4" => Ok(Self::Mp4),
            "webm" => Ok(Self::Webm),
            "mkv" => Ok(Self::Mkv),
            _ => Err(UnknownValue::new("video container", s)),
        }
    }
}

/// Codec accepted by yt-dlp's `FFmpegExtractAudio`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AudioCodec {
    #[default]
    Mp3,
    M4a,
    Aac,
    Opus,
    Vorbis,
    Flac,
    Wav,
    /// Keep the source codec when possible
    Best,
}

impl AudioCodec {
    pub const ALL: [Self; 8] = [
        Self::Mp3,
        Self::M4a,
        Self::Aac,
        Self::Opus,
        Self::Vorbis,
        Self::Flac,
        Self::Wav,
        Self::Best,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Aac => "aac",
            Self::Opus => "opus",
            Self::Vorbis => "vorbis",
            Self::Flac => "flac",
            Self::Wav => "wav",
            Self::Best => "best",
        }
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioCodec {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|codec| codec.as_str() == lower)
            .ok_or_else(|| UnknownValue::new("audio codec", s))
    }
}

/// Unrecognized preset value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownValue {}

/// Best video and audio merged into one container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoPreset {
    pub container: VideoContainer,
}

impl VideoPreset {
    /// Options writing to `<output_dir>/title.ext`.
    pub fn with_output_dir(&self, output_dir: &Path) -> DownloadOptions {
        let mut opts = DownloadOptions::from(self.clone());
        set_output_dir(&mut opts, output_dir);
        opts
    }
}

impl From<VideoPreset> for DownloadOptions {
    /// Video preset: container-matched streams merged without re-encoding
    fn from(preset: VideoPreset) -> Self {
        let mut opts = Self {
            format: Some(preset.container.format_selector()),
            merge_output_format: Some(preset.container.as_str().to_string()),
            quiet: Some(true),
            noprogress: Some(true),
            ..Default::default()
        };
        set_output_dir(&mut opts, Path::new(DEFAULT_OUTPUT_DIR));
        opts
    }
}

/// Best audio stream, re-encoded by FFmpeg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioPreset {
    pub codec: AudioCodec,
    /// Bitrate in kbps, or VBR level `0`-`10`
    pub quality: String,
}

impl Default for AudioPreset {
    fn default() -> Self {
        Self {
            codec: AudioCodec::default(),
            quality: DEFAULT_AUDIO_QUALITY.to_string(),
        }
    }
}

impl AudioPreset {
    /// Options writing to `<output_dir>/title.ext`.
    pub fn with_output_dir(&self, output_dir: &Path) -> DownloadOptions {
        let mut opts = DownloadOptions::from(self.clone());
        set_output_dir(&mut opts, output_dir);
        opts
    }
}

impl From<AudioPreset> for PostProcessor {
    fn from(preset: AudioPreset) -> Self {
        Self {
            key: "FFmpegExtractAudio".to_string(),
            preferredcodec: Some(preset.codec.as_str().to_string()),
            preferredquality: Some(preset.quality),
        }
    }
}

impl From<AudioPreset> for DownloadOptions {
    /// Audio preset: best audio → `FFmpegExtractAudio` with codec and quality
    fn from(preset: AudioPreset) -> Self {
        let mut opts = Self {
            format: Some("bestaudio/best".to_string()),
            postprocessors: Some(vec![preset.into()]),
            quiet: Some(true),
            noprogress: Some(true),
            ..Default::default()
        };
        set_output_dir(&mut opts, Path::new(DEFAULT_OUTPUT_DIR));
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home(opts: &DownloadOptions) -> &str {
        opts.paths
            .as_ref()
            .and_then(|p| p.0.as_ref())
            .and_then(|m| m.get("home"))
            .map(String::as_str)
            .expect("home path should be set")
    }

    fn default_template(opts: &DownloadOptions) -> &str {
        opts.outtmpl
            .as_ref()
            .and_then(|t| t.0.as_ref())
            .and_then(|m| m.get("default"))
            .map(String::as_str)
            .expect("default template should be set")
    }

    #[test]
    fn test_video_preset_to_dl_options() {
        let opts: DownloadOptions = VideoPreset::default().into();

        assert_eq!(
            opts.format.as_deref(),
            Some("bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best")
        );
        assert_eq!(opts.merge_output_format.as_deref(), Some("mp4"));
        assert!(opts.postprocessors.is_none());
        assert_eq!(home(&opts), "downloads");
        assert_eq!(default_template(&opts), "%(title)s.%(ext)s");
    }

    #[test]
    fn test_video_preset_mkv() {
        let opts: DownloadOptions = VideoPreset {
            container: VideoContainer::Mkv,
        }
        .into();

        assert_eq!(opts.format.as_deref(), Some("bestvideo+bestaudio/best"));
        assert_eq!(opts.merge_output_format.as_deref(), Some("mkv"));
    }

    #[test]
    fn test_video_preset_webm() {
        let opts: DownloadOptions = VideoPreset {
            container: VideoContainer::Webm,
        }
        .into();

        assert_eq!(
            opts.format.as_deref(),
            Some("bestvideo[ext=webm]+bestaudio[ext=webm]/best[ext=webm]/best")
        );
        assert_eq!(opts.merge_output_format.as_deref(), Some("webm"));
    }

    #[test]
    fn test_audio_preset_to_dl_options() {
        let opts: DownloadOptions = AudioPreset::default().into();

        assert_eq!(opts.format.as_deref(), Some("bestaudio/best"));
        assert!(opts.merge_output_format.is_none());

        let processors = opts.postprocessors.expect("postprocessors should be set");
        assert!(matches!(
            processors.as_slice(),
            [PostProcessor { key, preferredcodec: Some(codec), preferredquality: Some(quality) }]
            if key == "FFmpegExtractAudio" && codec == "mp3" && quality == "192"
        ));
    }

    #[test]
    fn test_with_output_dir() {
        let opts = AudioPreset::default().with_output_dir(Path::new("/media/music"));

        assert_eq!(home(&opts), "/media/music");
        assert_eq!(default_template(&opts), "%(title)s.%(ext)s");
        assert_eq!(opts.format.as_deref(), Some("bestaudio/best"));
    }

    #[test]
    fn test_audio_codec_from_str() {
        assert_eq!("FLAC".parse::<AudioCodec>(), Ok(AudioCodec::Flac));
        assert_eq!("best".parse::<AudioCodec>(), Ok(AudioCodec::Best));
        assert!("mp5".parse::<AudioCodec>().is_err());
    }

    #[test]
    fn test_video_container_from_str() {
        assert_eq!("webm".parse::<VideoContainer>(), Ok(VideoContainer::Webm));
        let err = "avi".parse::<VideoContainer>().unwrap_err();
        assert_eq!(err.to_string(), "unknown video container: \"avi\"");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(VideoPreset::default().container, VideoContainer::Mp4);
        assert_eq!(AudioPreset::default().codec, AudioCodec::Mp3);
        assert_eq!(AudioPreset::default().quality, "192");
    }
}
