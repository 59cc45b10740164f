// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Keyboard events are always listened to; [`super::App::update`] decides
//! whether the lightbox or the slideshow consumes them. Touch events reach
//! the lightbox through its overlay widget instead.

use super::Message;
use crate::gallery::lightbox;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

const LOADING_TICK: Duration = Duration::from_millis(100);
const REVEAL_TICK: Duration = Duration::from_millis(25);
const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Escape and arrow keys not captured by a focused widget.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };
        let key = match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => lightbox::Key::Escape,
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => lightbox::Key::ArrowLeft,
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => lightbox::Key::ArrowRight,
            _ => return None,
        };
        Some(Message::KeyPressed(key))
    })
}

/// Periodic tick for the lightbox loading timeout.
pub fn create_loading_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(LOADING_TICK).map(Message::LoadingTick)
    } else {
        Subscription::none()
    }
}

/// Auto-advance timer for the slideshow.
pub fn create_slideshow_subscription(enabled: bool, interval: Duration) -> Subscription<Message> {
    if enabled {
        time::every(interval).map(|_| Message::Slideshow(crate::slideshow::Message::Tick))
    } else {
        Subscription::none()
    }
}

/// Frames for the staggered product reveal, until every product is shown.
pub fn create_reveal_subscription(revealing: bool) -> Subscription<Message> {
    if revealing {
        time::every(REVEAL_TICK).map(Message::RevealTick)
    } else {
        Subscription::none()
    }
}

/// One-second refresh of the date/time text.
pub fn create_clock_subscription(enabled: bool) -> Subscription<Message> {
    if enabled {
        time::every(CLOCK_TICK).map(|_| Message::ClockTick)
    } else {
        Subscription::none()
    }
}
