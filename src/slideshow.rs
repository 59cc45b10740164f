// SPDX-License-Identifier: MPL-2.0
//! Hero slideshow with auto-advance and hover pause.

use crate::config::SlideshowConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    /// Auto-advance timer fired.
    Tick,
    Next,
    Previous,
    /// A navigation dot was pressed.
    GoTo(usize),
    PointerEntered,
    PointerLeft,
}

#[derive(Debug, Clone)]
pub struct State {
    current: usize,
    total: usize,
    paused: bool,
    pause_on_hover: bool,
    interval: Duration,
}

impl State {
    #[must_use]
    pub fn new(total: usize, config: &SlideshowConfig) -> Self {
        Self {
            current: 0,
            total,
            paused: false,
            pause_on_hover: config.pause_on_hover.unwrap_or(true),
            interval: Duration::from_secs(u64::from(config.interval_secs())),
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Tick => {
                if !self.paused {
                    self.next();
                }
            }
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::GoTo(index) => self.go_to(index),
            Message::PointerEntered => {
                if self.pause_on_hover {
                    self.paused = true;
                }
            }
            Message::PointerLeft => self.paused = false,
        }
    }

    fn next(&mut self) {
        if self.total > 0 {
            self.current = (self.current + 1) % self.total;
        }
    }

    fn previous(&mut self) {
        if self.total > 0 {
            self.current = (self.current + self.total - 1) % self.total;
        }
    }

    fn go_to(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time between automatic advances.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the auto-advance timer should be running.
    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        self.total > 1 && !self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slideshow(total: usize) -> State {
        State::new(total, &SlideshowConfig::default())
    }

    #[test]
    fn tick_advances_and_wraps() {
        let mut state = slideshow(3);
        state.handle(Message::Tick);
        state.handle(Message::Tick);
        assert_eq!(state.current(), 2);
        state.handle(Message::Tick);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut state = slideshow(4);
        state.handle(Message::Previous);
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn hover_pauses_auto_advance_only() {
        let mut state = slideshow(3);
        state.handle(Message::PointerEntered);
        assert!(state.is_paused());
        assert!(!state.wants_ticks());
        state.handle(Message::Tick);
        assert_eq!(state.current(), 0);

        state.handle(Message::Next);
        assert_eq!(state.current(), 1);

        state.handle(Message::PointerLeft);
        state.handle(Message::Tick);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn hover_pause_can_be_disabled() {
        let config = SlideshowConfig {
            interval_secs: Some(4),
            pause_on_hover: Some(false),
        };
        let mut state = State::new(2, &config);
        state.handle(Message::PointerEntered);
        assert!(!state.is_paused());
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut state = slideshow(3);
        state.handle(Message::GoTo(2));
        assert_eq!(state.current(), 2);
        state.handle(Message::GoTo(3));
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn empty_slideshow_never_moves() {
        let mut state = slideshow(0);
        state.handle(Message::Next);
        state.handle(Message::Previous);
        state.handle(Message::Tick);
        assert_eq!(state.current(), 0);
        assert!(!state.wants_ticks());
    }

    #[test]
    fn interval_follows_config() {
        assert_eq!(slideshow(2).interval(), Duration::from_secs(4));
    }
}
