// SPDX-License-Identifier: MPL-2.0
//! Storefront views and their shared styling.
//!
//! Each view takes a `ViewContext` borrowing the state it renders and
//! returns an `Element` in the message type of the component it drives.

pub mod catalog;
pub mod design_tokens;
pub mod forms;
pub mod gallery;
pub mod header;
pub mod lightbox;
pub mod slideshow;
pub mod styles;
pub mod widgets;
