// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window events (file drag-and-drop, resize, Escape) to the
//! component that owns them on the current screen, and gates the periodic
//! ticks so timers only run while they have work: banner expiry and gallery
//! animation share the fast tick, the simulated progress has its own
//! 300 ms tick.

use super::{App, Message, Screen};
use crate::ui::gallery::{self, modal};
use crate::ui::intake::{self, progress};
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Interval of the shared banner/animation tick. Matches the gallery's
/// animation step so the pulse phase math stays honest.
const FAST_TICK: Duration = gallery::ANIMATION_TICK;

pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([
        create_event_subscription(app.screen),
        create_tick_subscription(app),
        create_progress_subscription(app),
    ])
}

/// Creates the appropriate event subscription based on the current screen.
///
/// - Intake: file drag/drop events feed the drop zone.
/// - Results: Escape closes the lightbox.
/// - Resize events are tracked on both screens for the viewport math.
fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Intake => event::listen_with(|event, _status, _window_id| match &event {
            event::Event::Window(window::Event::FileHovered(_)) => {
                Some(Message::Intake(intake::Message::DragEntered))
            }
            event::Event::Window(window::Event::FilesHoveredLeft) => {
                Some(Message::Intake(intake::Message::DragLeft))
            }
            event::Event::Window(window::Event::FileDropped(path)) => Some(Message::Intake(
                intake::Message::FilesDropped(vec![path.clone()]),
            )),
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(*size))
            }
            _ => None,
        }),
        Screen::Results => event::listen_with(|event, status, _window_id| match &event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(*size))
            }
            // Escape reaches the lightbox regardless of focus; it is a
            // no-op while the modal is closed.
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
                if matches!(status, event::Status::Ignored)
                    && *key == keyboard::Key::Named(keyboard::key::Named::Escape) =>
            {
                Some(Message::Gallery(gallery::Message::Modal(
                    modal::Message::EscapePressed,
                )))
            }
            _ => None,
        }),
    }
}

/// Periodic tick for banner expiry and gallery animation, active only
/// while either has work.
fn create_tick_subscription(app: &App) -> Subscription<Message> {
    let gallery_animating = app.screen == Screen::Results && app.gallery.has_animation_work();

    if app.notifications.has_notifications() || gallery_animating {
        time::every(FAST_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// The simulated progress tick, active only while the animation runs. It
/// self-cancels once the simulated value crosses the ceiling.
fn create_progress_subscription(app: &App) -> Subscription<Message> {
    if app.intake.progress_running() {
        time::every(progress::TICK_INTERVAL)
            .map(|_| Message::Intake(intake::Message::ProgressTick))
    } else {
        Subscription::none()
    }
}
