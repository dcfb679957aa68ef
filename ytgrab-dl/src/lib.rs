//! Type-safe Rust bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers
//! - [`presets`] - Video and audio-only download presets
//! - [`progress`] - Progress hook payloads and formatting
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! **Video preset** (best quality, merged to mp4):
//! ```no_run
//! use ytgrab_dl::{dl::download, presets::VideoPreset};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = VideoPreset::default().with_output_dir("downloads".as_ref());
//! download("https://youtube.com/watch?v=example", opts, |update| {
//!     println!("{}", update.percent_display());
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use ytgrab_dl::dl::{download, DownloadOptions, OutputTemplates, PostProcessor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestaudio".to_string()),
//!     outtmpl: Some(OutputTemplates::simple("%(uploader)s/%(title)s.%(ext)s".to_string())),
//!     postprocessors: Some(vec![PostProcessor {
//!         key: "FFmpegExtractAudio".to_string(),
//!         preferredcodec: Some("opus".to_string()),
//!         preferredquality: None,
//!     }]),
//!     quiet: Some(true),
//!     ..Default::default()
//! };
//!
//! download("https://youtube.com/watch?v=example", opts, |_| {})?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod presets;
pub mod progress;

pub use error::{Error, Result};
