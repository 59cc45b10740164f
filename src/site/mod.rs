// SPDX-License-Identifier: MPL-2.0
//! Site content: slides, products and gallery images loaded from a site
//! directory.
//!
//! A `site.toml` manifest in the directory describes the content. Without
//! one, the directory is scanned for images (see [`scanner`]). Every product
//! photo and gallery image is registered as a lightbox trigger, products
//! first, in manifest order.

pub mod manifest;
pub mod scanner;

pub use manifest::{GalleryEntry, ProductEntry, SiteManifest, SlideEntry, MANIFEST_FILE};

use crate::catalog::{CategoryFilter, ProductInfo};
use crate::error::Result;
use crate::gallery::{ImageRef, TriggerId, TriggerRegistry};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image: PathBuf,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub info: ProductInfo,
    pub image: PathBuf,
    pub trigger: TriggerId,
}

#[derive(Debug, Clone, Default)]
pub struct Site {
    pub name: Option<String>,
    pub slides: Vec<Slide>,
    pub products: Vec<Product>,
    /// Gallery section triggers, in display order.
    pub gallery: Vec<TriggerId>,
    pub registry: TriggerRegistry,
    pub initial_category: Option<CategoryFilter>,
}

impl Site {
    /// Loads `root/site.toml`, or scans `root` when there is no manifest.
    pub fn load(root: &Path) -> Result<Self> {
        let manifest_path = root.join(MANIFEST_FILE);
        let manifest = if manifest_path.is_file() {
            tracing::info!(path = %manifest_path.display(), "loading site manifest");
            SiteManifest::load_from_path(&manifest_path)?
        } else {
            tracing::info!(dir = %root.display(), "no site manifest, scanning directory");
            SiteManifest {
                gallery: scanner::scan_directory(root)?,
                ..SiteManifest::default()
            }
        };
        Ok(Self::from_manifest(root, manifest))
    }

    /// Builds the site with image paths resolved against `root`.
    #[must_use]
    pub fn from_manifest(root: &Path, manifest: SiteManifest) -> Self {
        let mut registry = TriggerRegistry::new();

        let slides = manifest
            .slides
            .into_iter()
            .map(|slide| Slide {
                image: root.join(slide.image),
                caption: slide.caption,
            })
            .collect();

        let products = manifest
            .products
            .into_iter()
            .map(|product| {
                let image = root.join(&product.image);
                let trigger = registry.register(
                    ImageRef::new(image.clone()).with_alt(product.name.clone()),
                    product.gallery.as_deref(),
                );
                Product {
                    info: ProductInfo {
                        name: product.name,
                        description: product.description,
                        category: product.category,
                    },
                    image,
                    trigger,
                }
            })
            .collect();

        let gallery = manifest
            .gallery
            .into_iter()
            .map(|entry| {
                let mut image = ImageRef::new(root.join(entry.image));
                if let Some(alt) = entry.alt {
                    image = image.with_alt(alt);
                }
                if let Some(title) = entry.title {
                    image = image.with_title(title);
                }
                registry.register(image, entry.group.as_deref())
            })
            .collect();

        let initial_category = manifest.category.as_deref().and_then(|anchor| {
            let parsed = CategoryFilter::from_anchor(anchor);
            if parsed.is_none() {
                tracing::warn!(anchor, "ignoring unknown category in site manifest");
            }
            parsed
        });

        Self {
            name: manifest.name,
            slides,
            products,
            gallery,
            registry,
            initial_category,
        }
    }

    /// Product details in display order, for the filter.
    pub fn product_infos(&self) -> impl Iterator<Item = &ProductInfo> {
        self.products.iter().map(|p| &p.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::gallery::GroupName;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn manifest_registers_products_then_gallery() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(MANIFEST_FILE),
            r##"
name = "MeatMasters"
category = "#pork"

[[slides]]
image = "hero.jpg"

[[products]]
name = "Pork Ribs"
category = "pork"
image = "ribs.jpg"
gallery = "products"

[[products]]
name = "T-Bone"
category = "beef"
image = "tbone.jpg"
gallery = "products"

[[gallery]]
image = "shop.jpg"
title = "Shop front"
"##,
        )
        .expect("failed to write manifest");

        let site = Site::load(temp_dir.path()).expect("site should load");
        assert_eq!(site.name.as_deref(), Some("MeatMasters"));
        assert_eq!(site.slides[0].image, temp_dir.path().join("hero.jpg"));
        assert_eq!(
            site.initial_category,
            Some(CategoryFilter::Only(Category::Pork))
        );

        let products = GroupName::from_attribute(Some("products"));
        assert_eq!(
            site.registry.members(&products),
            vec![site.products[0].trigger, site.products[1].trigger]
        );

        let shop = site.registry.image(site.gallery[0]).expect("registered");
        assert_eq!(shop.caption(), "Shop front");
        assert_eq!(
            site.registry.group_of(site.gallery[0]).map(GroupName::as_str),
            Some("default")
        );
    }

    #[test]
    fn directory_without_manifest_is_scanned() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("lamb")).expect("failed to create dir");
        fs::write(temp_dir.path().join("lamb/leg.jpg"), b"x").expect("write");
        fs::write(temp_dir.path().join("front.png"), b"x").expect("write");

        let site = Site::load(temp_dir.path()).expect("site should load");
        assert!(site.products.is_empty());
        assert_eq!(site.gallery.len(), 2);
        let groups: Vec<_> = site.registry.groups().iter().map(|g| g.as_str().to_string()).collect();
        assert_eq!(groups, vec!["default", "lamb"]);
    }

    #[test]
    fn invalid_manifest_is_reported() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(MANIFEST_FILE), "slides = 3").expect("write");
        assert!(matches!(
            Site::load(temp_dir.path()),
            Err(crate::error::Error::Manifest(_))
        ));
    }

    #[test]
    fn unknown_manifest_category_is_ignored() {
        let manifest = SiteManifest {
            category: Some("#venison".to_string()),
            ..SiteManifest::default()
        };
        let site = Site::from_manifest(Path::new("/site"), manifest);
        assert_eq!(site.initial_category, None);
    }
}
