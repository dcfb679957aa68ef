//! Download command - fetch the video or its audio and report progress.

use crate::cli::Mode;
use crate::config::Config;
use crate::console;
use color_eyre::Section;
use eyre::{Report, Result};
use std::io;
use ytgrab_dl::Error;
use ytgrab_dl::dl::download;

pub fn execute(config: Config) -> Result<()> {
    let mut stdout = io::stdout();

    console::starting(&mut stdout, config.mode, &config.url)?;

    tracing::info!(
        url = config.url,
        mode = %config.mode,
        output_dir = %config.output_dir.display(),
        "downloading"
    );

    let opts = config.download_options();

    let result = download(&config.url, opts, |update| {
        if let Err(e) = console::progress(&mut io::stdout().lock(), update) {
            tracing::warn!(error = %e, "failed to write progress");
        }
    });

    match result {
        Ok(downloaded) => {
            tracing::info!(
                title = downloaded.info.title,
                path = ?downloaded.path,
                "download finished"
            );
            console::success(&mut stdout, &downloaded.info.title, downloaded.path.as_deref())?;
            Ok(())
        }
        Err(e) => {
            console::failure(&mut stdout, config.mode, &e)?;
            Err(into_report(e, config.mode))
        }
    }
}

const INSTALL_YT_DLP: &str =
    "install yt-dlp for the Python interpreter ytgrab links against: `pip install yt-dlp`";

/// Attach context and a hint for the failures users can fix themselves.
fn into_report(error: Error, mode: Mode) -> Report {
    let hint = match (&error, mode) {
        (Error::Load(_), _) => Some(INSTALL_YT_DLP),
        (Error::Download(_), Mode::Video) => {
            Some("merging video and audio requires ffmpeg on PATH")
        }
        (Error::Download(_), Mode::Audio) => Some("audio extraction requires ffmpeg on PATH"),
        _ => None,
    };

    let report = Report::new(error).wrap_err(format!("failed to download {mode}"));

    match hint {
        Some(hint) => report.suggestion(hint),
        None => report,
    }
}
