// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, routing each message
//! to a focused handler method in the `handlers` submodules. After every
//! message the resulting view state is published to the rendering layer.

use crate::app::state::Message;
use crate::app::CameraScreen;
use tracing::info;

impl CameraScreen {
    /// Main message handler - routes messages to appropriate handler methods.
    ///
    /// Messages arrive on a single queue and are handled to completion one
    /// at a time, which is what makes the session safe to mutate without
    /// locks.
    pub fn update(&mut self, message: Message) {
        match message {
            // ===== User actions =====
            Message::ShowCamera => self.handle_show_camera(),
            Message::SelectResolution(tier) => self.handle_select_resolution(tier),
            Message::CapturePhoto => self.handle_capture_photo(),
            Message::StartRecording => self.handle_start_recording(),
            Message::StopRecording => self.handle_stop_recording(),
            Message::Retake => self.handle_retake(),
            Message::AcceptMedia => self.handle_accept_media(),
            Message::Close => {
                info!("Capture screen close requested");
                self.closed = true;
            }

            // ===== Backend completions =====
            Message::PermissionResolved(status) => self.handle_permission_resolved(status),
            Message::PhotoCaptured(result) => self.handle_photo_captured(result),
            Message::RecordingFinished(video) => self.handle_recording_finished(video),
            Message::RecordingFailed(error) => self.handle_recording_failed(error),
        }

        self.publish_view();
    }
}
