//! Async readline input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` and maps Ctrl+D / Ctrl+C to events.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

#[derive(Debug, PartialEq)]
pub enum InputEvent {
    /// A submitted line, exactly as typed.
    ///
    /// Not trimmed here: the conversation rejects blank input itself and
    /// stores accepted text verbatim, so the transcript shows what the
    /// visitor actually entered.
    Line(String),
    Eof,
    Interrupted,
}

impl From<ReadlineEvent> for InputEvent {
    fn from(event: ReadlineEvent) -> Self {
        match event {
            ReadlineEvent::Line(line) => InputEvent::Line(line),
            ReadlineEvent::Eof => InputEvent::Eof,
            ReadlineEvent::Interrupted => InputEvent::Interrupted,
        }
    }
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler and the writer for output printed while a
    /// prompt is active.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Swap the prompt, e.g. when the panel is minimized or closed.
    pub fn update_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }

    /// Next line or control key. A terminal error ends the session like EOF.
    pub async fn read_line(&mut self) -> InputEvent {
        self.rl
            .readline()
            .await
            .map_or(InputEvent::Eof, InputEvent::from)
    }

    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
