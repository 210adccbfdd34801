use super::schedule::Timer;
use std::rc::Rc;

pub const TYPING_TEXT: &str = "Smart Data. Smarter World.";
pub const TYPING_INTERVAL_MS: u32 = 80;

/// Cursor over a fixed message, revealing one character per step.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    // byte offset of the first unrevealed char
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    /// Reveal the next character, or `None` once the message is complete.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.text[self.cursor..].chars().next()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    pub fn shown(&self) -> &str {
        &self.text[..self.cursor]
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }
}

/// Type `text` into `sink`, one character every `interval_ms`.
///
/// The first character lands after one interval, so after N intervals the
/// sink has seen exactly the first N characters. The chain stops by itself
/// when the message is exhausted.
pub fn start_typing<T, F>(timer: Rc<T>, text: &str, interval_ms: u32, sink: F)
where
    T: Timer + 'static,
    F: FnMut(char) + 'static,
{
    schedule_next(timer, Typewriter::new(text), interval_ms, sink);
}

fn schedule_next<T, F>(timer: Rc<T>, mut writer: Typewriter, interval_ms: u32, mut sink: F)
where
    T: Timer + 'static,
    F: FnMut(char) + 'static,
{
    if writer.is_done() {
        return;
    }
    let next_timer = timer.clone();
    timer.after(
        interval_ms,
        Box::new(move || {
            if let Some(c) = writer.advance() {
                sink(c);
            }
            schedule_next(next_timer, writer, interval_ms, sink);
        }),
    );
}
