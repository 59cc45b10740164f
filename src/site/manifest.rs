// SPDX-License-Identifier: MPL-2.0
//! `site.toml` schema.

use crate::catalog::Category;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "site.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SiteManifest {
    #[serde(default)]
    pub name: Option<String>,

    /// Category preselected in the product filter, as a `#hash` anchor or
    /// bare name.
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub slides: Vec<SlideEntry>,

    #[serde(default)]
    pub products: Vec<ProductEntry>,

    #[serde(default)]
    pub gallery: Vec<GalleryEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlideEntry {
    pub image: PathBuf,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub image: PathBuf,
    /// Lightbox group of the product photo.
    #[serde(default)]
    pub gallery: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryEntry {
    pub image: PathBuf,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

impl SiteManifest {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Manifest(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sections() {
        let manifest = SiteManifest::parse(
            r##"
name = "MeatMasters"
category = "#lamb"

[[slides]]
image = "slides/hero.jpg"
caption = "Fresh every day"

[[products]]
name = "Lamb Chops"
description = "Karoo lamb"
category = "lamb"
image = "products/chops.jpg"
gallery = "products"

[[gallery]]
image = "gallery/shop.jpg"
alt = "Our shop"
group = "store"
"##,
        )
        .expect("manifest should parse");

        assert_eq!(manifest.name.as_deref(), Some("MeatMasters"));
        assert_eq!(manifest.slides[0].caption, "Fresh every day");
        assert_eq!(manifest.products[0].category, Category::Lamb);
        assert_eq!(manifest.products[0].gallery.as_deref(), Some("products"));
        assert_eq!(manifest.gallery[0].title, None);
    }

    #[test]
    fn empty_manifest_is_valid() {
        assert_eq!(SiteManifest::parse("").unwrap(), SiteManifest::default());
    }

    #[test]
    fn unknown_category_is_a_manifest_error() {
        let err = SiteManifest::parse(
            r#"
[[products]]
name = "Venison"
category = "venison"
image = "v.jpg"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }
}
