//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters.
//!
//! ```no_run
//! use ytgrab_dl::{dl::download, presets::VideoPreset};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = VideoPreset::default().with_output_dir("downloads".as_ref());
//! let downloaded = download("https://youtube.com/watch?v=example", opts, |_| {})?;
//! println!("Downloaded: {}", downloaded.info.title);
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::progress::ProgressUpdate;
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyCFunction, PyDict, PyTuple};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }
}

/// Download directories: `home`, `temp`, optional type-specific paths.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputPaths(pub Option<HashMap<String, String>>);

impl OutputPaths {
    /// Set the directory finished files land in.
    pub fn with_home(self, home: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert("home".to_string(), home.to_string_lossy().to_string());
        Self(Some(inner))
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`), optional codec and quality.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    /// Bitrate in kbps (e.g. `"192"`) or VBR level `"0"`-`"10"`
    pub preferredquality: Option<String>,
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// `None` fields are dropped before reaching yt-dlp, leaving its defaults in place.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub paths: Option<OutputPaths>,
    pub outtmpl: Option<OutputTemplates>,
    /// Container used when video and audio streams are merged
    pub merge_output_format: Option<String>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub quiet: Option<bool>,
    /// Suppress yt-dlp's own progress bar; hooks still fire
    pub noprogress: Option<bool>,
}

/// Essential metadata from yt-dlp info dict.
///
/// Extracted via `FromPyObject` from the sanitized info dict returned by `extract_info`.
#[derive(Clone, Debug, FromPyObject)]
#[pyo3(from_item_all)]
pub struct DownloadInfo {
    /// Video identifier (required by yt-dlp)
    pub id: String,
    /// Video title (required by yt-dlp)
    pub title: String,
    /// Extractor name (e.g., "Youtube")
    pub extractor_key: Option<String>,
    /// Full name of the video uploader
    pub uploader: Option<String>,
    /// Nickname or ID of the video uploader
    pub uploader_id: Option<String>,
    /// Length of the video in seconds
    pub duration: Option<f64>,
    /// URL to the video webpage
    pub webpage_url: Option<String>,
    /// Extension of the selected format, before post-processing
    pub ext: Option<String>,
}

/// Result of a finished download.
#[derive(Clone, Debug)]
pub struct Downloaded {
    /// Final file after post-processing, as reported by yt-dlp `post_hooks`
    pub path: Option<PathBuf>,
    pub info: DownloadInfo,
}

/// Download a single URL and return the final path and info dict.
///
/// Uses `extract_info(url, download=True)` to download and get metadata in one request.
/// `on_progress` is registered as the only progress hook and runs on the calling thread.
pub fn download<F>(url: &str, opts: DownloadOptions, on_progress: F) -> Result<Downloaded>
where
    F: Fn(&ProgressUpdate) + Send + 'static,
{
    tracing::debug!(url, ?opts, "invoking yt-dlp");

    Python::attach(|py| {
        let module = helper_module(py).map_err(Error::Load)?;

        let py_params = opts
            .into_pyobject(py)
            .map_err(|e| Error::Options(e.into()))?;

        let hook = progress_hook(py, on_progress).map_err(Error::Options)?;

        let result = module
            .getattr("download")
            .map_err(Error::Load)?
            .call1((url, py_params, hook))
            .map_err(Error::Download)?;

        let (path, info) = result
            .extract::<(Option<PathBuf>, DownloadInfo)>()
            .map_err(Error::Info)?;

        tracing::debug!(?path, id = info.id, "yt-dlp finished");

        Ok(Downloaded { path, info })
    })
}

/// Load the embedded `dl.py`. yt-dlp itself is imported on the first download.
fn helper_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    PyModule::from_code(
        py,
        c_str!(include_str!("./dl.py")),
        c"dl.py",
        c"ytgrab_dl",
    )
}

/// Wrap `on_progress` as a Python callable taking the progress dict.
///
/// Malformed dicts are logged and skipped so they never abort the download.
fn progress_hook<'py, F>(py: Python<'py>, on_progress: F) -> PyResult<Bound<'py, PyCFunction>>
where
    F: Fn(&ProgressUpdate) + Send + 'static,
{
    PyCFunction::new_closure(
        py,
        Some(c"progress_hook"),
        None,
        move |args: &Bound<'_, PyTuple>, _kwargs: Option<&Bound<'_, PyDict>>| -> PyResult<()> {
            match args
                .get_item(0)
                .and_then(|dict| ProgressUpdate::from_py(&dict))
            {
                Ok(update) => on_progress(&update),
                Err(e) => tracing::warn!(error = %e, "skipping malformed progress update"),
            }
            Ok(())
        },
    )
}
