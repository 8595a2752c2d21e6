// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Handles still photo capture and the video recording lifecycle. Leaving
//! the Recording state always waits for the backend's finished or error
//! completion; the stop call itself never transitions.

use crate::app::state::{Notification, ViewMode};
use crate::app::CameraScreen;
use crate::backends::{Photo, PhotoOptions, RecordingOptions, Video};
use crate::constants::{VIDEO_BITRATE_BPS, VIDEO_CODEC};
use crate::errors::{PhotoError, RecordingError};
use crate::estimate::estimate_video_size;
use tracing::{debug, error, info, warn};

impl CameraScreen {
    // =========================================================================
    // Capture Operations Handlers
    // =========================================================================

    pub(crate) fn handle_capture_photo(&mut self) {
        if self.session.mode != ViewMode::LivePreview {
            warn!(mode = ?self.session.mode, "Photo capture ignored outside live preview");
            return;
        }

        let tier = self.session.selected_resolution;
        let options = PhotoOptions {
            quality: self.photo_quality.clamp(0.0, 1.0),
            width: tier.width(),
            height: tier.height(),
        };
        info!(
            tier = %tier,
            quality = options.quality,
            "Capturing photo"
        );
        // Mode stays LivePreview until the capture settles
        self.backend.take_photo(options, self.completions.clone());
    }

    pub(crate) fn handle_photo_captured(&mut self, result: Result<Photo, PhotoError>) {
        match result {
            Ok(photo) => {
                if self.session.mode != ViewMode::LivePreview {
                    warn!(path = %photo.path, "Late photo completion ignored");
                    return;
                }
                info!(path = %photo.path, "Photo saved");
                self.session.mode = ViewMode::Review;
                self.session.last_media_path = Some(photo.path);
            }
            // A failed attempt leaves the mode unchanged
            Err(err) => error!(error = %err, "Photo capture failed"),
        }
    }

    pub(crate) fn handle_start_recording(&mut self) {
        if self.session.mode != ViewMode::LivePreview {
            warn!(mode = ?self.session.mode, "Start recording ignored outside live preview");
            return;
        }

        info!(
            codec = VIDEO_CODEC,
            tier = %self.session.selected_resolution,
            "Starting recording"
        );
        self.session.mode = ViewMode::Recording;
        self.backend.start_recording(
            RecordingOptions {
                video_codec: VIDEO_CODEC.to_string(),
            },
            self.completions.clone(),
        );
    }

    /// Signal the backend to stop. A no-op when nothing is recording, so a
    /// stop arriving before a start was acknowledged is harmless.
    pub(crate) fn handle_stop_recording(&mut self) {
        if !self.session.mode.is_recording() {
            debug!(mode = ?self.session.mode, "Stop requested with no active recording");
            return;
        }
        info!("Stopping recording");
        self.backend.stop_recording();
    }

    pub(crate) fn handle_recording_finished(&mut self, video: Video) {
        if !self.session.mode.is_recording() {
            warn!(path = %video.path, "Late recording completion ignored");
            return;
        }

        // The estimate uses the tier selected right now, not the one active
        // when the recording began; the last selection wins.
        let tier = self.session.selected_resolution;
        match estimate_video_size(tier.label(), VIDEO_BITRATE_BPS, video.duration_secs) {
            Ok(estimate) => {
                info!(
                    path = %video.path,
                    duration_secs = video.duration_secs,
                    tier = %tier,
                    megabytes = estimate.display_megabytes(),
                    "Recording finished"
                );
                let _ = self.notify_tx.send(Notification::SizeEstimateReady {
                    megabytes: estimate.display_megabytes(),
                });
            }
            Err(err) => {
                error!(error = %err, duration_secs = video.duration_secs, "Size estimate failed");
            }
        }

        self.session.mode = ViewMode::Review;
        self.session.last_media_path = Some(video.path);
    }

    /// A recording error returns to review without a size estimate; the
    /// screen never stays stuck in Recording.
    pub(crate) fn handle_recording_failed(&mut self, err: RecordingError) {
        error!(error = %err, "Recording failed");
        if self.session.mode.is_recording() {
            self.session.mode = ViewMode::Review;
        }
    }
}
