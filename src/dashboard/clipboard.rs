use std::io::{self, Write};

use base64::{prelude::BASE64_STANDARD, Engine};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Sets the system clipboard through the terminal emulator with an OSC 52 sequence.
#[derive(Debug, Default)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "\x1b]52;c;{}\x07", BASE64_STANDARD.encode(text))?;
        stdout.flush()
    }
}

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.content = Some(text.to_owned());
        Ok(())
    }
}
