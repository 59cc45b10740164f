// SPDX-License-Identifier: MPL-2.0
//! Lightbox gallery: trigger registration, session navigation, swipe
//! detection and token-guarded image loading.

pub mod group;
pub mod lightbox;
pub mod loader;
pub mod session;
pub mod swipe;

pub use group::{GroupName, ImageRef, TriggerId, TriggerRegistry, DEFAULT_GROUP};
pub use lightbox::{Effect, Key, Message, State};
pub use loader::{LoadOutcome, LoadRequest, LoadToken, LoadedImage};
pub use session::Session;
pub use swipe::{SwipeDirection, SwipeTracker};
