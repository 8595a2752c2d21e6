// SPDX-License-Identifier: GPL-3.0-only

//! Capture screen state types

use crate::backends::{PermissionStatus, Photo, Video};
use crate::constants::ResolutionTier;
use crate::errors::{PhotoError, RecordingError};

/// Camera view modes
///
/// The allowed transitions form a small cycle:
/// Idle/Review → LivePreview → Recording → Review. Recording is only ever
/// entered from LivePreview, and leaving it always waits for the backend's
/// finished/error completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// No preview active, nothing captured yet (initial state)
    #[default]
    Idle,
    /// Hardware preview is live
    LivePreview,
    /// Backend is actively encoding video
    Recording,
    /// Showing the last capture with retake/accept actions
    Review,
}

impl ViewMode {
    /// Check if the backend is currently encoding
    pub fn is_recording(&self) -> bool {
        matches!(self, ViewMode::Recording)
    }

    /// Check if the hardware preview is visible (live or recording)
    pub fn preview_active(&self) -> bool {
        matches!(self, ViewMode::LivePreview | ViewMode::Recording)
    }
}

/// One capture cycle
///
/// Owned exclusively by the controller and recreated for each cycle rather
/// than mutated across them. `last_media_path` is `Some` only in Review.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaptureSession {
    /// Current view mode
    pub mode: ViewMode,
    /// Selected resolution tier, always a catalog member
    pub selected_resolution: ResolutionTier,
    /// Path of the last captured media, present only while reviewing
    pub last_media_path: Option<String>,
}

impl CaptureSession {
    /// Fresh session for the next cycle, keeping the resolution choice
    pub fn next_cycle(&self, mode: ViewMode) -> Self {
        Self {
            mode,
            selected_resolution: self.selected_resolution,
            last_media_path: None,
        }
    }
}

/// Snapshot published to the rendering layer after every transition
///
/// The renderer subscribes to these; it never owns or mutates the state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Current view mode
    pub mode: ViewMode,
    /// Selected resolution tier
    pub selected_resolution: ResolutionTier,
    /// Path of the last captured media, if reviewing one
    pub last_media_path: Option<String>,
    /// Permission outcome once resolved; `None` while the request is pending
    pub permission: Option<PermissionStatus>,
}

/// User-facing notifications emitted by the capture screen
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A recording finished; estimated file size, rounded for the dialog
    SizeEstimateReady {
        /// Estimated size in megabytes, two decimal places
        megabytes: f64,
    },
    /// The user accepted the last capture
    MediaAccepted {
        /// Path of the accepted media file
        path: String,
    },
}

/// Messages driving the capture screen
///
/// User actions and backend completions share one queue so transitions are
/// always processed sequentially, in arrival order.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== User actions =====
    /// Open the live camera preview
    ShowCamera,
    /// Select a resolution tier; takes effect on the next capture call
    SelectResolution(ResolutionTier),
    /// Capture a still photo
    CapturePhoto,
    /// Start video recording
    StartRecording,
    /// Stop video recording (no-op when none is active)
    StopRecording,
    /// Discard the reviewed capture and return to the live preview
    Retake,
    /// Accept the reviewed capture and hand its path outward
    AcceptMedia,
    /// Dismiss the capture screen (hardware back button)
    Close,

    // ===== Backend completions =====
    /// Camera permission request resolved
    PermissionResolved(PermissionStatus),
    /// Still photo capture settled
    PhotoCaptured(Result<Photo, PhotoError>),
    /// Recording finished cleanly with the realized duration
    RecordingFinished(Video),
    /// Recording ended with an error
    RecordingFailed(RecordingError),
}
