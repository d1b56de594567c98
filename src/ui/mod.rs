// SPDX-License-Identifier: MPL-2.0
//! UI components and shared presentation infrastructure.
//!
//! The two page components — [`intake`] and [`gallery`] — follow the same
//! shape: a `State` with a `handle(Message) -> Effect` update function and
//! free `view` functions, so their behavior is testable without a running
//! event loop.

pub mod design_tokens;
pub mod gallery;
pub mod intake;
pub mod notifications;
pub mod styles;
pub mod theming;
