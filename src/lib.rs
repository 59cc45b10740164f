// SPDX-License-Identifier: MPL-2.0
//! `iced_storefront` is a butchery storefront built with the Iced GUI framework.
//!
//! It shows a hero slideshow, a filterable product catalog, a photo gallery
//! with a lightbox viewer, and enquiry/contact forms that produce a quote or
//! a ready-to-send email link. Text is localized with Fluent.

pub mod app;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod enquiry;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod site;
pub mod slideshow;
pub mod ui;
