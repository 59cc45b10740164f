// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image loading for the lightbox.
//!
//! Every request carries a [`LoadToken`]. The controller only applies the
//! outcome whose token matches the last one it issued, so a slow load that
//! finishes after the user has moved on is dropped instead of replacing the
//! newer image.

use super::group::ImageRef;
use crate::error::{Error, Result};
use iced::widget::image;
use std::path::Path;

/// Generation number tagging one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LoadToken(u64);

impl LoadToken {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Work handed to the host: load `image`, then report back with `token`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub token: LoadToken,
    pub index: usize,
    pub image: ImageRef,
}

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Result of a [`LoadRequest`], fed back to the controller.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub token: LoadToken,
    pub index: usize,
    pub result: Result<LoadedImage>,
}

/// Decodes the image at `path` into RGBA pixels.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<LoadedImage> {
    let path = path.as_ref();
    let decoded = image_rs::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(Error::from)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        handle: image::Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

/// Performs `request` off the update loop.
pub async fn perform(request: LoadRequest) -> LoadOutcome {
    let LoadRequest {
        token,
        index,
        image,
    } = request;
    let path = image.source().to_path_buf();
    let result = tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .unwrap_or_else(|join_err| Err(Error::Image(join_err.to_string())));
    if let Err(err) = &result {
        tracing::warn!(source = %image.source().display(), %err, "image load failed");
    }
    LoadOutcome {
        token,
        index,
        result,
    }
}
