// SPDX-License-Identifier: MPL-2.0
//! Localization built on Fluent.
//!
//! Locale bundles are embedded at compile time; `es` is the primary
//! locale and `en-US` carries the English translations.

pub mod fluent;

pub use fluent::I18n;
