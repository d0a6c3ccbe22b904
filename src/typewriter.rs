// Headline that types out a phrase, holds it, deletes it and moves on to the next one.

use crate::animation::{ScheduledTask, Tick};
use crate::config::TypewriterConfig;
use crate::error::Result;
use web_sys::{Document, Element, Window};

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: i32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrase: usize,
    // Shown prefix length, in chars
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    // `None` when there is nothing to type.
    pub fn new(config: TypewriterConfig) -> Option<Typewriter> {
        if config.phrases.is_empty() {
            return None;
        }
        Some(Typewriter {
            config,
            phrase: 0,
            shown: 0,
            deleting: false,
        })
    }

    pub fn start_delay_ms(&self) -> i32 {
        self.config.start_delay_ms
    }

    pub fn tick(&mut self) -> Frame {
        let phrase = &self.config.phrases[self.phrase];
        let len = phrase.chars().count();

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(len);
        }
        let text: String = phrase.chars().take(self.shown).collect();

        let delay_ms = if !self.deleting && self.shown == len {
            self.deleting = true;
            self.config.hold_delay_ms
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.config.phrases.len();
            self.config.next_phrase_delay_ms
        } else if self.deleting {
            self.config.delete_delay_ms
        } else {
            self.config.type_delay_ms
        };

        Frame { text, delay_ms }
    }
}

// Runs a `Typewriter` against the first element matching the configured selector.
// `Ok(None)` when the element is missing or there are no phrases.
pub fn mount(
    window: &Window,
    document: &Document,
    config: TypewriterConfig,
) -> Result<Option<ScheduledTask>> {
    let target: Element = match document.query_selector(config.selector)? {
        Some(el) => el,
        None => return Ok(None),
    };
    let mut typewriter = match Typewriter::new(config) {
        Some(t) => t,
        None => return Ok(None),
    };
    let first = Tick::After(typewriter.start_delay_ms());
    let task = ScheduledTask::spawn(window, first, move || {
        let frame = typewriter.tick();
        target.set_text_content(Some(&frame.text));
        Tick::After(frame.delay_ms)
    })?;
    Ok(Some(task))
}
