//! Error types for ytgrab-dl organized by download stage.

use pyo3::PyErr;
use thiserror::Error;

/// Download error variants organized by stage.
#[derive(Debug, Error)]
pub enum Error {
    /// yt-dlp could not be imported or the embedded helper failed to load
    #[error("failed to load yt-dlp: {0}")]
    Load(PyErr),

    /// Options could not be converted to yt-dlp parameters
    #[error("invalid download options: {0}")]
    Options(PyErr),

    /// yt-dlp raised while extracting or downloading
    #[error("{0}")]
    Download(PyErr),

    /// Result returned by yt-dlp did not have the expected shape
    #[error("unexpected yt-dlp result: {0}")]
    Info(PyErr),
}

pub type Result<T> = std::result::Result<T, Error>;
