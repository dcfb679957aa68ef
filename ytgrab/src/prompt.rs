//! Interactive prompts for the URL and download choice.

use crate::cli::Mode;
use crate::console;
use std::io::{self, BufRead, Write};
use ytgrab_dl::presets::AudioCodec;

/// Line-oriented question/answer over any reader and writer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for the video URL. Returns the trimmed answer, possibly empty.
    pub fn read_url(&mut self) -> io::Result<String> {
        self.ask("\nEnter YouTube video URL: ")
    }

    /// Show the choice menu and map the answer to a [`Mode`].
    ///
    /// Anything other than `1` or `2` falls back to video with a notice.
    pub fn read_mode(&mut self, audio_codec: AudioCodec) -> io::Result<Mode> {
        console::menu(&mut self.output, audio_codec)?;

        let answer = self.ask("\nEnter choice (1 or 2): ")?;

        match parse_choice(&answer) {
            Some(mode) => Ok(mode),
            None => {
                writeln!(self.output, "Invalid choice. Defaulting to video download.")?;
                Ok(Mode::Video)
            }
        }
    }

    /// End of input reads as an empty answer.
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        Ok(line.trim().to_string())
    }
}

/// `1` → video, `2` → audio.
pub fn parse_choice(answer: &str) -> Option<Mode> {
    match answer.trim() {
        "1" => Some(Mode::Video),
        "2" => Some(Mode::Audio),
        _ => None,
    }
}
