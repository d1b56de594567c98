// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::media::{image, results};
use crate::ui::gallery;
use crate::ui::intake;
use crate::ui::notifications::Notification;
use iced::Task;
use std::path::PathBuf;

/// The single update entrypoint.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Intake(msg) => {
            let effect = app.intake.handle(msg);
            perform_intake_effect(app, effect)
        }
        Message::Gallery(msg) => {
            match app.gallery.handle(msg) {
                gallery::Effect::BackToIntake => {
                    app.screen = Screen::Intake;
                }
                gallery::Effect::None => {}
            }
            Task::none()
        }
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            if app.screen == Screen::Results {
                app.gallery.handle(gallery::Message::AnimationTick);
            }
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_height = size.height;
            Task::none()
        }
        Message::SubmissionFinished(Ok(set)) => {
            // The handover owns completion: the overlay comes down and the
            // dashboard navigates to the results.
            app.intake.reset();
            app.gallery.load(&set, app.window_height);
            app.screen = Screen::Results;
            Task::none()
        }
        Message::SubmissionFinished(Err(_)) => {
            app.intake.abort_submission();
            app.notifications
                .push(Notification::error("alert-submit-failed"));
            Task::none()
        }
    }
}

/// Translates an intake effect into application side effects.
pub(crate) fn perform_intake_effect(app: &mut App, effect: intake::Effect) -> Task<Message> {
    match effect {
        intake::Effect::None => Task::none(),
        intake::Effect::Notify(notification) => {
            app.notifications.push(notification);
            Task::none()
        }
        intake::Effect::LoadPreview(path) => Task::perform(image::load_preview(path), |result| {
            Message::Intake(intake::Message::PreviewLoaded(result))
        }),
        intake::Effect::OpenPicker { camera_roll } => {
            Task::perform(open_picker(camera_roll), |result| {
                Message::Intake(intake::Message::FilePicked(result))
            })
        }
        intake::Effect::Submit(path) => match app.results_dir.clone() {
            Some(results_dir) => Task::perform(
                results::submit_for_analysis(path, results_dir),
                Message::SubmissionFinished,
            ),
            None => {
                // No resolvable results directory counts as a failed
                // handover: revert and notify.
                app.intake.abort_submission();
                app.notifications
                    .push(Notification::error("alert-submit-failed"));
                Task::none()
            }
        },
    }
}

/// Opens the native picker filtered to the accepted image types. On
/// camera-roll platforms the dialog starts in the system picture
/// directory.
async fn open_picker(camera_roll: bool) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .add_filter("JPEG/PNG", &crate::media::SUPPORTED_IMAGE_EXTENSIONS);

    if camera_roll {
        if let Some(pictures) = dirs::picture_dir() {
            dialog = dialog.set_directory(pictures);
        }
    }

    dialog
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ResultSet;

    #[test]
    fn submission_success_switches_to_the_results_screen() {
        let mut app = App::default();
        assert_eq!(app.screen, Screen::Intake);

        let _ = update(&mut app, Message::SubmissionFinished(Ok(ResultSet::default())));

        assert_eq!(app.screen, Screen::Results);
        assert!(!app.intake.is_submitting());
        assert!(!app.intake.submit_enabled());
    }

    #[test]
    fn submission_failure_notifies_and_stays_on_intake() {
        let mut app = App::default();

        let _ = update(
            &mut app,
            Message::SubmissionFinished(Err(crate::error::Error::Io("disk full".into()))),
        );

        assert_eq!(app.screen, Screen::Intake);
        assert_eq!(app.notifications.visible_count(), 1);
        assert!(!app.intake.is_submitting());
    }

    #[test]
    fn gallery_back_effect_returns_to_intake() {
        let mut app = App::default();
        let _ = update(&mut app, Message::SubmissionFinished(Ok(ResultSet::default())));
        assert_eq!(app.screen, Screen::Results);

        let _ = update(
            &mut app,
            Message::Gallery(crate::ui::gallery::Message::BackRequested),
        );
        assert_eq!(app.screen, Screen::Intake);
    }

    #[test]
    fn window_resize_updates_the_tracked_height() {
        let mut app = App::default();
        let _ = update(
            &mut app,
            Message::WindowResized(iced::Size::new(1024.0, 900.0)),
        );
        assert_eq!(app.window_height, 900.0);
    }

    #[test]
    fn empty_submission_never_raises_the_overlay() {
        let mut app = App::default();

        let _ = update(
            &mut app,
            Message::Intake(intake::Message::SubmitRequested),
        );

        assert!(!app.intake.is_submitting());
        assert_eq!(app.notifications.visible_count(), 1);
    }
}
