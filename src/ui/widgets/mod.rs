// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod input_guard;

pub use input_guard::{input_guard, InputGuard};
