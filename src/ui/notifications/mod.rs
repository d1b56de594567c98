// SPDX-License-Identifier: MPL-2.0
//! Banner notification system for user feedback.
//!
//! Validation rejections, read failures, and submission outcomes surface as
//! transient banners in a fixed alert area. Banners auto-expire after five
//! seconds and can be dismissed manually; several may coexist, each expiring
//! independently.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity kinds
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Banner widget for rendering notifications

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
