// SPDX-License-Identifier: MPL-2.0
//! Builds gallery entries from a plain directory of images.
//!
//! Images at the root join the default group. Each subdirectory becomes a
//! group named after it. Files and subdirectories are visited alphabetically.

use super::manifest::GalleryEntry;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Scans `root` one level deep. Returned paths are relative to `root`.
pub fn scan_directory(root: &Path) -> Result<Vec<GalleryEntry>> {
    let (files, dirs) = list_sorted(root)?;
    let mut entries = files
        .into_iter()
        .map(|file| entry(file, None))
        .collect::<Vec<_>>();

    for dir in dirs {
        let Some(group) = dir.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            continue;
        };
        let (files, _) = list_sorted(&root.join(&dir))?;
        entries.extend(
            files
                .into_iter()
                .map(|file| entry(dir.join(file), Some(group.clone()))),
        );
    }
    Ok(entries)
}

/// Supported image files and subdirectories of `dir`, as names relative to it.
fn list_sorted(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        let name = PathBuf::from(dir_entry.file_name());
        if path.is_dir() {
            if !is_hidden(&name) {
                dirs.push(name);
            }
        } else if path.is_file() && is_supported_image(&path) {
            files.push(name);
        }
    }
    files.sort();
    dirs.sort();
    Ok((files, dirs))
}

fn entry(image: PathBuf, group: Option<String>) -> GalleryEntry {
    let title = image
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string);
    GalleryEntry {
        image,
        alt: None,
        title,
        group,
    }
}

fn is_hidden(name: &Path) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
