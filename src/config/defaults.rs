// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slideshow**: Auto-advance interval bounds
//! - **Lightbox**: Swipe threshold and load timeout
//! - **Catalog**: Reveal stagger
//! - **Enquiry**: Simulated submission delays and pricing

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default auto-advance interval for the hero slideshow (in seconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u32 = 4;

/// Minimum slideshow interval (in seconds).
pub const MIN_SLIDESHOW_INTERVAL_SECS: u32 = 1;

/// Maximum slideshow interval (in seconds).
pub const MAX_SLIDESHOW_INTERVAL_SECS: u32 = 60;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Horizontal distance a touch must travel to count as a swipe (logical pixels).
///
/// Distances equal to the threshold do not navigate.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Time after which a pending image load is reported as failed (in seconds).
pub const LOADING_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Delay added per visible product when revealing filter results (in milliseconds).
pub const REVEAL_STAGGER_MS: u64 = 50;

// ==========================================================================
// Enquiry Defaults
// ==========================================================================

/// Simulated processing time for an enquiry submission (in milliseconds).
pub const ENQUIRY_SUBMIT_DELAY_MS: u64 = 2000;

/// Simulated processing time for a contact submission (in milliseconds).
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 1500;

/// Flat delivery fee in rand.
pub const DELIVERY_FEE_RAND: f64 = 50.0;

/// Smallest order quantity accepted (in kilograms).
pub const MIN_ORDER_QUANTITY_KG: f64 = 0.5;

/// Address contact messages are composed for.
pub const CONTACT_EMAIL: &str = "info@meatmasters.co.za";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SLIDESHOW_INTERVAL_SECS <= DEFAULT_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS <= MAX_SLIDESHOW_INTERVAL_SECS);
    assert!(SWIPE_THRESHOLD_PX > 0.0);
    assert!(LOADING_TIMEOUT_SECS > 0);
};
