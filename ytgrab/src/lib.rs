//! ytgrab: download a video or extract its audio from a video-hosting URL.
//!
//! ## Modules
//!
//! - [`cli`] - Argument parsing and command entry points
//! - [`config`] - Config file and resolved configuration
//! - [`prompt`] - Interactive URL and choice prompts
//! - [`console`] - Banner, progress and result output
//! - [`dl`] - Download command

pub mod cli;
pub mod config;
pub mod console;
pub mod dl;
pub mod prompt;
