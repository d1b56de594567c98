// SPDX-License-Identifier: MPL-2.0
//! Lightbox modal for viewing a result image full size.
//!
//! Opens on a card-image click; closes on the explicit control, Escape, or
//! a backdrop click. Clicks inside the content area are swallowed so they
//! never reach the backdrop handler.

use std::path::PathBuf;

/// What the lightbox currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub image: PathBuf,
    pub caption: String,
}

/// Messages for the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the given image with its caption.
    Open { image: PathBuf, caption: String },
    /// Explicit close control.
    Close,
    /// Escape key pressed while the modal is open.
    EscapePressed,
    /// Click landed on the dimmed backdrop.
    BackdropClicked,
    /// Click landed inside the content area; swallowed on purpose.
    ContentClicked,
}

/// Lightbox state: hidden, or a visible image with caption.
#[derive(Debug, Default)]
pub struct State {
    view: Option<ModalView>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a lightbox message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Open { image, caption } => {
                self.view = Some(ModalView { image, caption });
            }
            Message::Close | Message::EscapePressed | Message::BackdropClicked => {
                self.view = None;
            }
            Message::ContentClicked => {
                // Propagation guard: keeps content clicks away from the
                // backdrop close handler.
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }
}
