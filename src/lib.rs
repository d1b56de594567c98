// SPDX-License-Identifier: MPL-2.0
//! `agroscan` is the desktop client of a crop-leaf disease-analysis
//! pipeline, built with the Iced GUI framework.
//!
//! It mediates image intake (drag-and-drop or native picker), enforces the
//! acceptance policy, previews the selection, hands validated images over
//! to the analysis pipeline, and displays the rendered result cards in a
//! decorated gallery with a lightbox. Localization uses Fluent, with
//! Spanish as the primary locale.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
