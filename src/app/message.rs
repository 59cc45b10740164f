// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Section;
use crate::catalog::CategoryFilter;
use crate::enquiry;
use crate::gallery::lightbox;
use crate::slideshow;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    Slideshow(slideshow::Message),
    Enquiry(enquiry::Message),
    Contact(enquiry::Message),
    CategorySelected(CategoryFilter),
    SearchChanged(String),
    ShowSection(Section),
    ToggleMenu,
    /// Escape or an arrow key, routed to the lightbox when it is open and
    /// to the slideshow otherwise.
    KeyPressed(lightbox::Key),
    /// Loading-timeout check while an image load is pending.
    LoadingTick(Instant),
    /// Drives the staggered product reveal.
    RevealTick(Instant),
    ClockTick,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Directory holding `site.toml` and the images. Defaults to the
    /// current directory.
    pub site_dir: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_STOREFRONT_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Initial product category, as a `#hash` anchor or bare name.
    pub category: Option<String>,
}
