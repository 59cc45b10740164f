// SPDX-License-Identifier: MPL-2.0
//! Lightbox gallery controller.
//!
//! The controller is either closed or showing one image of a gallery group.
//! It never loads anything itself: showing an image returns
//! [`Effect::LoadImage`], the host performs the load (see
//! [`loader::perform`](super::loader::perform)) and feeds the outcome back
//! through [`Message::ImageLoaded`].
//!
//! While a load is pending the loading indicator is visible and the image is
//! fully transparent. Only the outcome of the most recent request is applied.

use super::group::{ImageRef, TriggerId, TriggerRegistry};
use super::loader::{LoadOutcome, LoadRequest, LoadToken, LoadedImage};
use super::session::Session;
use super::swipe::{SwipeDirection, SwipeTracker};
use crate::config::{CloseActivation, LOADING_TIMEOUT_SECS};
use crate::error::Error;
use std::time::{Duration, Instant};

const LOADING_TIMEOUT: Duration = Duration::from_secs(LOADING_TIMEOUT_SECS);

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(TriggerId),
    Show(usize),
    Next,
    Previous,
    Close,
    Key(Key),
    TouchStart(f32),
    TouchEnd(f32),
    /// Press on the dimmed area around the image.
    BackgroundPressed,
    /// Press on the close control.
    ClosePressed,
    /// Press on the image or caption.
    ContentPressed,
    ImageLoaded(LoadOutcome),
    /// Periodic check for loads that never complete.
    Tick(Instant),
}

/// Work the host must carry out after a message was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    LoadImage(LoadRequest),
    Closed,
}

#[derive(Debug, Clone, Copy)]
struct PendingLoad {
    token: LoadToken,
    started_at: Instant,
}

/// Image currently swapped into the overlay.
#[derive(Debug, Clone)]
pub struct Displayed {
    pub index: usize,
    pub image: LoadedImage,
    pub alt: String,
}

#[derive(Debug, Default)]
pub struct State {
    session: Option<Session>,
    close_activation: CloseActivation,
    last_token: LoadToken,
    pending: Option<PendingLoad>,
    displayed: Option<Displayed>,
    load_error: Option<Error>,
    swipe: SwipeTracker,
    /// A press landed on a closing area while a finger was down; it only
    /// closes if the lift turns out to be a tap.
    pending_close: bool,
}

impl State {
    #[must_use]
    pub fn new(close_activation: CloseActivation) -> Self {
        Self {
            close_activation,
            ..Self::default()
        }
    }

    pub fn handle(&mut self, message: Message, registry: &TriggerRegistry) -> Effect {
        match message {
            Message::Open(trigger) => self.open(registry, trigger),
            Message::Show(index) => self.show(index),
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::Close | Message::ClosePressed => self.close(),
            Message::BackgroundPressed => self.press_close(),
            Message::ContentPressed => match self.close_activation {
                CloseActivation::AnyClick => self.press_close(),
                CloseActivation::BackgroundOnly => Effect::None,
            },
            Message::Key(key) => self.handle_key(key),
            Message::TouchStart(x) => {
                if self.is_active() {
                    self.swipe.press(x);
                    self.pending_close = false;
                }
                Effect::None
            }
            Message::TouchEnd(x) => {
                let pending_close = std::mem::take(&mut self.pending_close);
                match self.swipe.lift(x) {
                    Some(SwipeDirection::Next) => self.next(),
                    Some(SwipeDirection::Previous) => self.previous(),
                    None if pending_close => self.close(),
                    None => Effect::None,
                }
            }
            Message::ImageLoaded(outcome) => {
                self.apply_outcome(outcome);
                Effect::None
            }
            Message::Tick(now) => {
                self.check_timeout(now);
                Effect::None
            }
        }
    }

    /// Opens the lightbox on `trigger`'s image within its gallery group.
    ///
    /// Unknown triggers leave the controller untouched.
    pub fn open(&mut self, registry: &TriggerRegistry, trigger: TriggerId) -> Effect {
        let Some(session) = Session::start(registry, trigger) else {
            tracing::debug!(?trigger, "ignoring open request for unknown trigger");
            return Effect::None;
        };
        let index = session.current();
        tracing::debug!(group = %session.group(), index, len = session.len(), "lightbox opened");
        self.session = Some(session);
        self.displayed = None;
        self.show(index)
    }

    /// Shows the image at `index`. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) -> Effect {
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };
        if !session.select(index) {
            return Effect::None;
        }
        let image = session.current_image().clone();
        self.last_token = self.last_token.next();
        self.pending = Some(PendingLoad {
            token: self.last_token,
            started_at: Instant::now(),
        });
        self.load_error = None;
        Effect::LoadImage(LoadRequest {
            token: self.last_token,
            index,
            image,
        })
    }

    pub fn next(&mut self) -> Effect {
        match self.session.as_ref().map(Session::next_index) {
            Some(index) => self.show(index),
            None => Effect::None,
        }
    }

    pub fn previous(&mut self) -> Effect {
        match self.session.as_ref().map(Session::previous_index) {
            Some(index) => self.show(index),
            None => Effect::None,
        }
    }

    /// Navigates according to a swipe from `start_x` to `end_x`.
    pub fn handle_swipe(&mut self, start_x: f32, end_x: f32) -> Effect {
        match super::swipe::classify(start_x, end_x) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Previous) => self.previous(),
            None => Effect::None,
        }
    }

    /// Closes on a mouse press right away. A touch press waits for the
    /// finger to lift, so a swipe that starts on the backdrop navigates.
    fn press_close(&mut self) -> Effect {
        if self.swipe.is_tracking() {
            self.pending_close = self.is_active();
            Effect::None
        } else {
            self.close()
        }
    }

    pub fn close(&mut self) -> Effect {
        self.pending_close = false;
        if self.session.take().is_none() {
            return Effect::None;
        }
        self.pending = None;
        self.displayed = None;
        self.load_error = None;
        self.swipe.cancel();
        tracing::debug!("lightbox closed");
        Effect::Closed
    }

    fn handle_key(&mut self, key: Key) -> Effect {
        if !self.is_active() {
            return Effect::None;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
        }
    }

    fn apply_outcome(&mut self, outcome: LoadOutcome) {
        let is_current = self
            .pending
            .is_some_and(|pending| pending.token == outcome.token);
        if !is_current {
            tracing::debug!(token = outcome.token.value(), "discarding stale image load");
            return;
        }
        self.pending = None;
        match outcome.result {
            Ok(image) => {
                let alt = self
                    .session
                    .as_ref()
                    .and_then(|session| session.image(outcome.index))
                    .map(|image| image.caption().to_string())
                    .unwrap_or_default();
                self.displayed = Some(Displayed {
                    index: outcome.index,
                    image,
                    alt,
                });
                self.load_error = None;
            }
            Err(err) => {
                self.load_error = Some(err);
            }
        }
    }

    fn check_timeout(&mut self, now: Instant) {
        if let Some(pending) = self.pending {
            if now.saturating_duration_since(pending.started_at) > LOADING_TIMEOUT {
                tracing::warn!(token = pending.token.value(), "image load timed out");
                self.pending = None;
                self.load_error = Some(Error::Io("image load timed out".to_string()));
            }
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the page behind the overlay must stay still.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_active()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Opacity of the displayed image: hidden while a load is pending.
    #[must_use]
    pub fn image_opacity(&self) -> f32 {
        if self.is_loading() {
            0.0
        } else {
            1.0
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(Session::current)
    }

    /// One-based position and group size for the counter.
    #[must_use]
    pub fn counter(&self) -> Option<(usize, usize)> {
        self.session
            .as_ref()
            .map(|session| (session.current() + 1, session.len()))
    }

    /// Caption of the selected image, updated as soon as navigation happens.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.current_image().caption())
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.session.as_ref().map(Session::current_image)
    }

    #[must_use]
    pub fn displayed(&self) -> Option<&Displayed> {
        self.displayed.as_ref()
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&Error> {
        self.load_error.as_ref()
    }
}
