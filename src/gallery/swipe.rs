// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for touch navigation.

use crate::config::SWIPE_THRESHOLD_PX;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved leftward: show the next image.
    Next,
    /// Finger moved rightward: show the previous image.
    Previous,
}

/// Classifies a swipe from its start and end x-coordinates.
///
/// Returns `None` when the horizontal distance does not exceed
/// [`SWIPE_THRESHOLD_PX`].
#[must_use]
pub fn classify(start_x: f32, end_x: f32) -> Option<SwipeDirection> {
    let distance = start_x - end_x;
    if distance.abs() > SWIPE_THRESHOLD_PX {
        if distance > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    } else {
        None
    }
}

/// Pairs touch-start and touch-end positions.
///
/// A lift without a preceding press is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn press(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn lift(&mut self, x: f32) -> Option<SwipeDirection> {
        self.start_x.take().and_then(|start| classify(start, x))
    }

    /// Whether a finger is down.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_swipe_beyond_threshold_is_next() {
        assert_eq!(classify(100.0, 40.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn rightward_swipe_beyond_threshold_is_previous() {
        assert_eq!(classify(40.0, 100.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn short_swipe_is_ignored() {
        assert_eq!(classify(50.0, 30.0), None);
    }

    #[test]
    fn swipe_of_exactly_threshold_is_ignored() {
        assert_eq!(classify(100.0, 100.0 - SWIPE_THRESHOLD_PX), None);
    }

    #[test]
    fn tracker_pairs_press_and_lift_once() {
        let mut tracker = SwipeTracker::default();
        tracker.press(200.0);
        assert_eq!(tracker.lift(20.0), Some(SwipeDirection::Next));
        assert_eq!(tracker.lift(20.0), None);
    }

    #[test]
    fn cancel_discards_pending_press() {
        let mut tracker = SwipeTracker::default();
        tracker.press(200.0);
        assert!(tracker.is_tracking());
        tracker.cancel();
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.lift(20.0), None);
    }
}
