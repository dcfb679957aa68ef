//! Integration tests for ytgrab CLI.

use clap::Parser;
use std::io::Cursor;
use ytgrab::cli::{Cli, run_with};
use ytgrab::config::FileConfig;
use ytgrab::prompt::Prompt;

const URL: &str = "https://youtu.be/jNQXAC9IVRw";

fn temp_dir(name: &str) -> std::path::PathBuf {
    let temp_dir = std::env::temp_dir().join(name);

    // Clean up previous test run
    if temp_dir.exists() {
        std::fs::remove_dir_all(&temp_dir).ok();
    }
    std::fs::create_dir_all(&temp_dir).expect("failed to create temp dir");

    temp_dir
}

#[test]
fn empty_url_fails_before_download() {
    let cli = Cli::parse_from(["ytgrab"]);
    let mut prompt = Prompt::new(Cursor::new("\n".to_string()), Vec::new());

    let err = run_with(cli, FileConfig::default(), &mut prompt).unwrap_err();
    assert_eq!(err.to_string(), "no URL provided");

    let out = String::from_utf8(prompt.into_output()).unwrap();
    assert!(out.starts_with(&"=".repeat(50)));
    assert!(out.contains("YouTube Video Downloader"));
    assert!(out.ends_with("Enter YouTube video URL: "));
}

#[test]
#[ignore = "network I/O and ffmpeg required"]
fn audio_choice_downloads_mp3() {
    let temp_dir = temp_dir("ytgrab-test-audio");

    let cli = Cli::parse_from(["ytgrab", URL, "-o", temp_dir.to_str().unwrap()]);
    let mut prompt = Prompt::new(Cursor::new("2\n".to_string()), Vec::new());

    run_with(cli, FileConfig::default(), &mut prompt).expect("failed to download audio");

    let mp3_path = temp_dir.join("Me at the zoo.mp3");

    assert!(
        mp3_path.exists(),
        "MP3 file not found: {:?}",
        mp3_path.display()
    );
}

#[test]
#[ignore = "network I/O and ffmpeg required"]
fn video_mode_downloads_mp4() {
    let temp_dir = temp_dir("ytgrab-test-video");

    let cli = Cli::parse_from(["ytgrab", URL, "-m", "video", "-o", temp_dir.to_str().unwrap()]);
    let mut prompt = Prompt::new(Cursor::new(String::new()), Vec::new());

    run_with(cli, FileConfig::default(), &mut prompt).expect("failed to download video");

    let mp4_path = temp_dir.join("Me at the zoo.mp4");

    assert!(
        mp4_path.exists(),
        "MP4 file not found: {:?}",
        mp4_path.display()
    );
}

#[test]
#[ignore = "network I/O"]
fn unsupported_url_fails() {
    let temp_dir = temp_dir("ytgrab-test-unsupported");

    let cli = Cli::parse_from([
        "ytgrab",
        "https://example.invalid/not-a-video",
        "-m",
        "video",
        "-o",
        temp_dir.to_str().unwrap(),
    ]);
    let mut prompt = Prompt::new(Cursor::new(String::new()), Vec::new());

    let err = run_with(cli, FileConfig::default(), &mut prompt).unwrap_err();
    assert_eq!(err.to_string(), "failed to download video");
}
