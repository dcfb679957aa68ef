//! User-facing output: banner, menu, progress line and result messages.
//!
//! Everything here goes to stdout. Diagnostics go through `tracing` to stderr.

use crate::cli::Mode;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use ytgrab_dl::presets::AudioCodec;
use ytgrab_dl::progress::{ProgressStatus, ProgressUpdate};

const TITLE: &str = "YouTube Video Downloader";
const RULE_WIDTH: usize = 50;

/// Progress lines are padded so a shorter line fully overwrites a longer one.
const PROGRESS_WIDTH: usize = 64;

pub fn banner<W: Write>(w: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(w, "{rule}")?;
    writeln!(w, "{TITLE}")?;
    writeln!(w, "{rule}")
}

pub fn menu<W: Write>(w: &mut W, audio_codec: AudioCodec) -> io::Result<()> {
    writeln!(w, "\nSelect download option:")?;
    writeln!(w, "1. Video (best quality)")?;
    writeln!(
        w,
        "2. Audio only ({})",
        audio_codec.as_str().to_ascii_uppercase()
    )
}

pub fn starting<W: Write>(w: &mut W, mode: Mode, url: &str) -> io::Result<()> {
    writeln!(w, "Downloading {mode} from: {url}")
}

/// Render one progress hook call.
pub fn progress<W: Write>(w: &mut W, update: &ProgressUpdate) -> io::Result<()> {
    match &update.status {
        ProgressStatus::Downloading => {
            let line = format!(
                "Progress: {} | Speed: {} | ETA: {}",
                update.percent_display(),
                update.speed_display(),
                update.eta_display()
            );
            write!(w, "\r{line:<PROGRESS_WIDTH$}")?;
            w.flush()
        }
        ProgressStatus::Finished => writeln!(w, "\n✓ Download complete, now processing..."),
        ProgressStatus::Error => {
            tracing::error!(filename = ?update.filename, "yt-dlp reported a download error");
            Ok(())
        }
        ProgressStatus::Other(status) => {
            tracing::debug!(status = status.as_str(), "unhandled progress status");
            Ok(())
        }
    }
}

pub fn success<W: Write>(w: &mut W, title: &str, path: Option<&Path>) -> io::Result<()> {
    writeln!(w, "\n✓ Successfully downloaded: {title}")?;
    if let Some(path) = path {
        writeln!(w, "  Saved to: {}", path.display())?;
    }
    Ok(())
}

pub fn failure<W: Write>(w: &mut W, mode: Mode, error: &dyn Display) -> io::Result<()> {
    writeln!(w, "\n✗ Error downloading {mode}: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn banner_layout() {
        let out = render(|w| banner(w));
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(50));
        assert_eq!(lines[1], "YouTube Video Downloader");
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn downloading_line() {
        let update = ProgressUpdate {
            status: ProgressStatus::Downloading,
            downloaded_bytes: Some(512.0),
            total_bytes: Some(1024.0),
            speed: Some(2048.0),
            eta: Some(75.0),
            ..Default::default()
        };

        let out = render(|w| progress(w, &update));

        assert!(out.starts_with('\r'));
        assert!(!out.contains('\n'));
        assert_eq!(
            out.trim_end(),
            "\rProgress: 50.0% | Speed: 2.00 KiB/s | ETA: 01:15"
        );
    }

    #[test]
    fn downloading_line_unknowns() {
        let update = ProgressUpdate::default();
        let out = render(|w| progress(w, &update));

        assert_eq!(out.trim_end(), "\rProgress: N/A | Speed: N/A | ETA: N/A");
    }

    #[test]
    fn downloading_line_is_padded() {
        let out = render(|w| progress(w, &ProgressUpdate::default()));

        assert_eq!(out.chars().count(), 1 + PROGRESS_WIDTH);
        assert!(out.ends_with(' '));
    }

    #[test]
    fn finished_line() {
        let update = ProgressUpdate {
            status: ProgressStatus::Finished,
            ..Default::default()
        };

        assert_eq!(
            render(|w| progress(w, &update)),
            "\n✓ Download complete, now processing...\n"
        );
    }

    #[test]
    fn error_status_prints_nothing() {
        let update = ProgressUpdate {
            status: ProgressStatus::Error,
            ..Default::default()
        };

        assert_eq!(render(|w| progress(w, &update)), "");
    }

    #[test]
    fn success_with_path() {
        let path = Path::new("downloads/Me at the zoo.mp4");
        let out = render(|w| success(w, "Me at the zoo", Some(path)));

        assert_eq!(
            out,
            "\n✓ Successfully downloaded: Me at the zoo\n\
             \x20 Saved to: downloads/Me at the zoo.mp4\n"
        );
    }

    #[test]
    fn failure_names_mode() {
        let out = render(|w| failure(w, Mode::Audio, &"ffmpeg not found"));

        assert_eq!(out, "\n✗ Error downloading audio: ffmpeg not found\n");
    }

    #[test]
    fn starting_line() {
        let out = render(|w| starting(w, Mode::Video, "https://youtu.be/x"));

        assert_eq!(out, "Downloading video from: https://youtu.be/x\n");
    }
}
