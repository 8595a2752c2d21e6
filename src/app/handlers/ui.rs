// SPDX-License-Identifier: GPL-3.0-only

//! View navigation handlers
//!
//! Handles opening the live preview, retake/accept from the review state,
//! and the permission result.

use crate::app::state::{Notification, ViewMode};
use crate::app::CameraScreen;
use crate::backends::PermissionStatus;
use tracing::{debug, info, warn};

impl CameraScreen {
    // =========================================================================
    // View Navigation Handlers
    // =========================================================================

    pub(crate) fn handle_show_camera(&mut self) {
        if self.session.mode.preview_active() {
            debug!(mode = ?self.session.mode, "Preview already active");
            return;
        }

        // New cycle: any reviewed media is discarded here
        self.session = self.session.next_cycle(ViewMode::LivePreview);
        info!(
            resolution = %self.session.selected_resolution,
            "Live preview opened"
        );
    }

    pub(crate) fn handle_retake(&mut self) {
        match self.session.mode {
            ViewMode::Review | ViewMode::Idle => {
                self.session = self.session.next_cycle(ViewMode::LivePreview);
                info!("Retake: back to live preview");
            }
            // Repeated retakes stay in the preview without compounding state
            ViewMode::LivePreview => debug!("Retake with preview already live"),
            ViewMode::Recording => warn!("Retake ignored while recording"),
        }
    }

    pub(crate) fn handle_accept_media(&mut self) {
        if self.session.mode != ViewMode::Review {
            warn!(mode = ?self.session.mode, "Accept ignored outside review");
            return;
        }
        let Some(path) = self.session.last_media_path.clone() else {
            warn!("Accept ignored: no media to hand over");
            return;
        };

        info!(path = %path, "Media accepted");
        let _ = self.notify_tx.send(Notification::MediaAccepted { path });
    }

    pub(crate) fn handle_permission_resolved(&mut self, status: PermissionStatus) {
        self.permission = Some(status);
        match status {
            PermissionStatus::Granted => info!("Camera permission granted"),
            // Not a gate: the screen degrades and later capture calls fail
            PermissionStatus::Denied => warn!("Camera permission denied"),
        }
    }
}
