// SPDX-License-Identifier: MPL-2.0
//! Upload-intake component: file selection, validation, preview, and
//! submission gating.
//!
//! The component mediates drag-and-drop and the native picker, enforces
//! the acceptance policy, renders a local preview with file metadata, and
//! arms the Analyze control only while a validated selection with a decoded
//! preview is present. Submission shows the loading overlay and starts the
//! cosmetic progress animation; the handover itself is the application's
//! job and reported back via [`Message::PreviewLoaded`]-style results.

pub mod progress;
pub mod selection;
mod view;

pub use selection::{SelectedFile, MAX_UPLOAD_BYTES};
pub use view::{loading_overlay, view};

use crate::error::{Error, SelectionError};
use crate::media::PreviewData;
use crate::ui::notifications::Notification;
use std::path::{Path, PathBuf};

/// Where the picker should start, decided once at initialization.
///
/// On mobile-class platforms the picker is pointed at the camera roll,
/// the desktop translation of hinting a camera capture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    FileSystem,
    CameraRoll,
}

impl CaptureSource {
    /// Detects the capture hint for the running platform.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_platform(std::env::consts::OS)
    }

    /// Classifies a platform identifier string.
    #[must_use]
    pub fn from_platform(os: &str) -> Self {
        match os {
            "android" | "ios" => CaptureSource::CameraRoll,
            _ => CaptureSource::FileSystem,
        }
    }
}

/// Messages consumed by the intake component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A file is being dragged over the window.
    DragEntered,
    /// The dragged file left the window.
    DragLeft,
    /// Files were dropped on the window.
    FilesDropped(Vec<PathBuf>),
    /// The drop zone was clicked; open the native picker.
    BrowseRequested,
    /// Result from the native picker.
    FilePicked(Option<PathBuf>),
    /// Result from the asynchronous preview read.
    PreviewLoaded(Result<PreviewData, Error>),
    /// The remove-preview control was pressed.
    RemoveRequested,
    /// The Analyze control was pressed.
    SubmitRequested,
    /// Simulated progress tick.
    ProgressTick,
}

/// Effects the orchestrator asks the application to perform.
#[derive(Debug)]
pub enum Effect {
    /// No effect.
    None,
    /// Surface a banner.
    Notify(Notification),
    /// Spawn the asynchronous preview read for the given path.
    LoadPreview(PathBuf),
    /// Open the native file picker.
    OpenPicker { camera_roll: bool },
    /// Hand the validated image over to the analysis pipeline.
    Submit(PathBuf),
}

/// Upload-intake state.
#[derive(Debug, Default)]
pub struct State {
    selection: Option<SelectedFile>,
    preview: Option<PreviewData>,
    drag_hover: bool,
    /// True while the asynchronous preview read is in flight.
    reading: bool,
    /// True from submission until the handover task reports back.
    submitting: bool,
    progress: progress::State,
    capture: CaptureSource,
}

impl Default for CaptureSource {
    fn default() -> Self {
        CaptureSource::detect()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an intake message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DragEntered => {
                self.drag_hover = true;
                Effect::None
            }
            Message::DragLeft => {
                self.drag_hover = false;
                Effect::None
            }
            Message::FilesDropped(paths) => {
                self.drag_hover = false;
                if self.submitting || self.reading {
                    // A drop burst only admits its first file; later drops
                    // land here while the first preview read is in flight.
                    return Effect::None;
                }
                match paths.into_iter().next() {
                    Some(path) => self.select(&path),
                    None => Effect::None,
                }
            }
            Message::BrowseRequested => {
                if self.submitting {
                    Effect::None
                } else {
                    Effect::OpenPicker {
                        camera_roll: self.capture == CaptureSource::CameraRoll,
                    }
                }
            }
            Message::FilePicked(Some(path)) => self.select(&path),
            Message::FilePicked(None) => Effect::None,
            Message::PreviewLoaded(result) => {
                self.reading = false;
                match result {
                    Ok(data) if self.selection.is_some() => {
                        self.preview = Some(data);
                        Effect::Notify(Notification::success("alert-load-success"))
                    }
                    // Selection was removed while the read was in flight.
                    Ok(_) => Effect::None,
                    Err(_) => {
                        self.clear_selection();
                        Effect::Notify(Notification::error(
                            SelectionError::Unreadable.i18n_key(),
                        ))
                    }
                }
            }
            Message::RemoveRequested => {
                self.clear_selection();
                Effect::None
            }
            Message::SubmitRequested => {
                if !self.submit_enabled() {
                    return Effect::Notify(Notification::error(
                        SelectionError::EmptySubmission.i18n_key(),
                    ));
                }

                let path = self.selection.as_ref().map(|f| f.path.clone());
                match path {
                    Some(path) => {
                        self.submitting = true;
                        self.progress.start();
                        Effect::Submit(path)
                    }
                    None => Effect::None,
                }
            }
            Message::ProgressTick => {
                self.progress.tick();
                Effect::None
            }
        }
    }

    /// Assigns a candidate as the active selection, validating it first.
    fn select(&mut self, path: &Path) -> Effect {
        match SelectedFile::inspect(path) {
            Ok(file) => {
                let preview_path = file.path.clone();
                self.selection = Some(file);
                self.preview = None;
                self.reading = true;
                Effect::LoadPreview(preview_path)
            }
            Err(rejection) => {
                self.clear_selection();
                Effect::Notify(Notification::error(rejection.i18n_key()))
            }
        }
    }

    /// Resets to the initial empty state: no selection, hidden preview,
    /// default drop-zone label, disarmed submit.
    fn clear_selection(&mut self) {
        self.selection = None;
        self.preview = None;
    }

    /// Full reset after a successful handover.
    pub fn reset(&mut self) {
        self.clear_selection();
        self.drag_hover = false;
        self.reading = false;
        self.submitting = false;
        self.progress.stop();
    }

    /// Reverts a failed handover: overlay down, selection kept, submit
    /// re-armed so the user can retry.
    pub fn abort_submission(&mut self) {
        self.submitting = false;
        self.progress.stop();
    }

    /// Submit is armed iff a validated selection has a decoded preview and
    /// no submission is in flight.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.selection.is_some() && self.preview.is_some() && !self.submitting
    }

    /// Whether the loading overlay is visible.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the progress tick subscription should run.
    #[must_use]
    pub fn progress_running(&self) -> bool {
        self.progress.is_running()
    }

    #[must_use]
    pub fn drag_hover(&self) -> bool {
        self.drag_hover
    }

    /// Drop zone shows the armed state once the preview is up.
    #[must_use]
    pub fn has_file(&self) -> bool {
        self.selection.is_some() && self.preview.is_some()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&PreviewData> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> &progress::State {
        &self.progress
    }

    #[must_use]
    pub fn capture_source(&self) -> CaptureSource {
        self.capture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use image_rs::{Rgba, RgbaImage};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(2, 2, Rgba([0, 128, 0, 255]))
            .save(&path)
            .expect("failed to write png");
        path
    }

    fn loaded_preview(state: &mut State, path: &Path) {
        let data = crate::media::image::load_preview_sync(path).expect("decode");
        state.handle(Message::PreviewLoaded(Ok(data)));
    }

    #[test]
    fn drag_hover_tracks_enter_and_leave() {
        let mut state = State::new();
        state.handle(Message::DragEntered);
        assert!(state.drag_hover());
        state.handle(Message::DragLeft);
        assert!(!state.drag_hover());
    }

    #[test]
    fn dropping_zero_files_changes_nothing() {
        let mut state = State::new();
        let effect = state.handle(Message::FilesDropped(vec![]));
        assert!(matches!(effect, Effect::None));
        assert!(state.selection().is_none());
        assert!(!state.submit_enabled());
    }

    #[test]
    fn valid_drop_requests_preview_load() {
        let temp_dir = tempdir().expect("tempdir");
        let path = write_png(temp_dir.path(), "leaf.png");

        let mut state = State::new();
        let effect = state.handle(Message::FilesDropped(vec![path.clone()]));

        assert!(matches!(effect, Effect::LoadPreview(p) if p == path));
        assert!(state.selection().is_some());
        // Not armed until the preview resolves.
        assert!(!state.submit_enabled());
    }

    #[test]
    fn unsupported_drop_notifies_and_clears() {
        let temp_dir = tempdir().expect("tempdir");
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "hello").expect("write");

        let mut state = State::new();
        let effect = state.handle(Message::FilesDropped(vec![path]));

        match effect {
            Effect::Notify(n) => {
                assert_eq!(n.severity(), Severity::Error);
                assert_eq!(n.message_key(), "alert-invalid-type");
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(state.selection().is_none());
        assert!(!state.submit_enabled());
    }

    #[test]
    fn oversized_drop_notifies_and_clears() {
        let temp_dir = tempdir().expect("tempdir");
        let path = temp_dir.path().join("big.jpeg");
        let file = std::fs::File::create(&path).expect("create");
        file.set_len(12 * 1024 * 1024).expect("set_len");

        let mut state = State::new();
        let effect = state.handle(Message::FilesDropped(vec![path]));

        match effect {
            Effect::Notify(n) => assert_eq!(n.message_key(), "alert-too-large"),
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(!state.submit_enabled());
    }

    #[test]
    fn preview_success_arms_submit_and_notifies() {
        let temp_dir = tempdir().expect("tempdir");
        let path = write_png(temp_dir.path(), "leaf.png");

        let mut state = State::new();
        state.handle(Message::FilesDropped(vec![path.clone()]));
        let data = crate::media::image::load_preview_sync(&path).expect("decode");
        let effect = state.handle(Message::PreviewLoaded(Ok(data)));

        match effect {
            Effect::Notify(n) => {
                assert_eq!(n.severity(), Severity::Success);
                assert_eq!(n.message_key(), "alert-load-success");
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(state.submit_enabled());
        assert!(state.has_file());
    }

    #[test]
    fn preview_failure_reverts_to_empty_state() {
        let temp_dir = tempdir().expect("tempdir");
        let path = write_png(temp_dir.path(), "leaf.png");

        let mut state = State::new();
        state.handle(Message::FilesDropped(vec![path]));
        let effect = state.handle(Message::PreviewLoaded(Err(crate::error::Error::Io(
            "unreadable".into(),
        ))));

        match effect {
            Effect::Notify(n) => assert_eq!(n.message_key(), "alert-read-error"),
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(state.selection().is_none());
        assert!(!state.submit_enabled());
    }

    #[test]
    fn select_remove_reselect_round_trip() {
        let temp_dir = tempdir().expect("tempdir");
        let path = write_png(temp_dir.path(), "leaf.png");

        let mut state = State::new();
        state.handle(Message::FilesDropped(vec![path.clone()]));
        loaded_preview(&mut state, &path);
        assert!(state.submit_enabled());

        state.handle(Message::RemoveRequested);
        assert!(!state.submit_enabled());
        assert!(state.selection().is_none());

        state.handle(Message::FilesDropped(vec![path.clone()]));
        loaded_preview(&mut state, &path);
        assert!(state.submit_enabled());
    }

    #[test]
    fn empty_submission_notifies_without_overlay() {
        let mut state = State::new();
        let effect = state.handle(Message::SubmitRequested);

        match effect {
            Effect::Notify(n) => {
                assert_eq!(n.severity(), Severity::Error);
                assert_eq!(n.message_key(), "alert-no-file");
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert!(!state.is_submitting());
        assert!(!state.progress_running());
    }

    #[test]
    fn valid_submission_shows_overlay_and_starts_progress() {
        let temp_dir = tempdir().expect("tempdir");
        let path = write_png(temp_dir.path(), "leaf.png");

        let mut state = State::new();
        state.handle(Message::FilesDropped(vec![path.clone()]));
        loaded_preview(&mut state, &path);

        let effect = state.handle(Message::SubmitRequested);
        assert!(matches!(effect, Effect::Submit(p) if p == path));
        assert!(state.is_submitting());
        assert!(state.progress_running());
        // Submit disarms while the handover is in flight.
        assert!(!state.submit_enabled());
    }

    #[test]
    fn abort_submission_rearms_submit() {
        let temp_dir = tempdir().expect("tempdir");
        let path = write_png(temp_dir.path(), "leaf.png");

        let mut state = State::new();
        state.handle(Message::FilesDropped(vec![path.clone()]));
        loaded_preview(&mut state, &path);
        state.handle(Message::SubmitRequested);

        state.abort_submission();
        assert!(!state.is_submitting());
        assert!(state.submit_enabled());
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let temp_dir = tempdir().expect("tempdir");
        let path = write_png(temp_dir.path(), "leaf.png");

        let mut state = State::new();
        state.handle(Message::FilesDropped(vec![path.clone()]));
        loaded_preview(&mut state, &path);
        state.handle(Message::SubmitRequested);

        state.reset();
        assert!(!state.is_submitting());
        assert!(!state.submit_enabled());
        assert!(state.selection().is_none());
        assert!(state.preview().is_none());
    }

    #[test]
    fn drops_are_ignored_while_a_read_is_in_flight() {
        let temp_dir = tempdir().expect("tempdir");
        let first = write_png(temp_dir.path(), "first.png");
        let second = write_png(temp_dir.path(), "second.png");

        let mut state = State::new();
        state.handle(Message::FilesDropped(vec![first.clone()]));
        let effect = state.handle(Message::FilesDropped(vec![second]));

        assert!(matches!(effect, Effect::None));
        assert_eq!(state.selection().unwrap().name, "first.png");
    }

    #[test]
    fn browse_is_inert_while_submitting() {
        let temp_dir = tempdir().expect("tempdir");
        let path = write_png(temp_dir.path(), "leaf.png");

        let mut state = State::new();
        state.handle(Message::FilesDropped(vec![path.clone()]));
        loaded_preview(&mut state, &path);
        state.handle(Message::SubmitRequested);

        let effect = state.handle(Message::BrowseRequested);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn capture_source_prefers_camera_on_mobile_platforms() {
        assert_eq!(
            CaptureSource::from_platform("android"),
            CaptureSource::CameraRoll
        );
        assert_eq!(CaptureSource::from_platform("ios"), CaptureSource::CameraRoll);
        assert_eq!(
            CaptureSource::from_platform("linux"),
            CaptureSource::FileSystem
        );
        assert_eq!(
            CaptureSource::from_platform("windows"),
            CaptureSource::FileSystem
        );
    }
}
