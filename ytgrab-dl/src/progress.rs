//! Progress hook payloads.
//!
//! yt-dlp calls every registered progress hook with a dict describing the
//! current download. [`ProgressUpdate`] keeps the fields worth showing and
//! formats them for a single status line:
//!
//! ```
//! use ytgrab_dl::progress::{ProgressStatus, ProgressUpdate};
//!
//! let update = ProgressUpdate {
//!     status: ProgressStatus::Downloading,
//!     downloaded_bytes: Some(512.0),
//!     total_bytes: Some(1024.0),
//!     ..Default::default()
//! };
//! assert_eq!(update.percent_display(), "50.0%");
//! ```

use indicatif::HumanBytes;
use pyo3::prelude::*;

const NOT_AVAILABLE: &str = "N/A";

/// Value of the `status` key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProgressStatus {
    #[default]
    Downloading,
    Finished,
    Error,
    /// Any status yt-dlp adds in the future
    Other(String),
}

impl From<&str> for ProgressStatus {
    fn from(status: &str) -> Self {
        match status {
            "downloading" => Self::Downloading,
            "finished" => Self::Finished,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Snapshot of a yt-dlp progress dict. Missing or `None` keys are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressUpdate {
    pub status: ProgressStatus,
    /// Destination file of the fragment being downloaded
    pub filename: Option<String>,
    pub downloaded_bytes: Option<f64>,
    pub total_bytes: Option<f64>,
    /// Used when the server does not report a size
    pub total_bytes_estimate: Option<f64>,
    /// Bytes per second
    pub speed: Option<f64>,
    /// Seconds remaining
    pub eta: Option<f64>,
    /// Preformatted `_percent_str` from yt-dlp
    pub percent_str: Option<String>,
    /// Preformatted `_speed_str` from yt-dlp
    pub speed_str: Option<String>,
    /// Preformatted `_eta_str` from yt-dlp
    pub eta_str: Option<String>,
}

impl ProgressUpdate {
    /// Read the fields from a progress dict (anything with a `get` method).
    pub fn from_py(obj: &Bound<'_, PyAny>) -> PyResult<Self> {
        let status = match get(obj, "status")? {
            Some(value) => ProgressStatus::from(value.extract::<String>()?.as_str()),
            None => ProgressStatus::default(),
        };

        Ok(Self {
            status,
            filename: get_string(obj, "filename")?,
            downloaded_bytes: get_f64(obj, "downloaded_bytes")?,
            total_bytes: get_f64(obj, "total_bytes")?,
            total_bytes_estimate: get_f64(obj, "total_bytes_estimate")?,
            speed: get_f64(obj, "speed")?,
            eta: get_f64(obj, "eta")?,
            percent_str: get_string(obj, "_percent_str")?,
            speed_str: get_string(obj, "_speed_str")?,
            eta_str: get_string(obj, "_eta_str")?,
        })
    }

    /// Completion in percent, from the exact total or the estimate.
    pub fn percent(&self) -> Option<f64> {
        let downloaded = self.downloaded_bytes?;
        let total = self
            .total_bytes
            .or(self.total_bytes_estimate)
            .filter(|total| *total > 0.0)?;

        Some((downloaded / total * 100.0).clamp(0.0, 100.0))
    }

    /// e.g. `42.0%`
    pub fn percent_display(&self) -> String {
        self.percent()
            .map(|percent| format!("{percent:.1}%"))
            .or_else(|| clean(self.percent_str.as_deref()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// e.g. `1.50 MiB/s`
    pub fn speed_display(&self) -> String {
        self.speed
            .filter(|speed| speed.is_finite() && *speed >= 0.0)
            .map(|speed| format!("{}/s", HumanBytes(speed as u64)))
            .or_else(|| clean(self.speed_str.as_deref()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// e.g. `01:05` or `1:02:03`
    pub fn eta_display(&self) -> String {
        self.eta
            .filter(|eta| eta.is_finite() && *eta >= 0.0)
            .map(format_eta)
            .or_else(|| clean(self.eta_str.as_deref()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// Format seconds as `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_eta(secs: f64) -> String {
    let total = secs.round() as u64;
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Remove ANSI escape sequences yt-dlp adds when it colors its own output.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        // CSI: ESC '[' params... final byte in '@'..='~'
        if chars.next() == Some('[') {
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
    }

    out
}

fn clean(s: Option<&str>) -> Option<String> {
    let s = strip_ansi(s?);
    let s = s.trim();
    (!s.is_empty() && s != "Unknown").then(|| s.to_string())
}

fn get<'py>(obj: &Bound<'py, PyAny>, key: &str) -> PyResult<Option<Bound<'py, PyAny>>> {
    let value = obj.call_method1("get", (key,))?;
    Ok((!value.is_none()).then_some(value))
}

fn get_string(obj: &Bound<'_, PyAny>, key: &str) -> PyResult<Option<String>> {
    get(obj, key)?
        .map(|value| value.extract::<String>().map_err(Into::into))
        .transpose()
}

fn get_f64(obj: &Bound<'_, PyAny>, key: &str) -> PyResult<Option<f64>> {
    get(obj, key)?
        .map(|value| value.extract::<f64>().map_err(Into::into))
        .transpose()
}
