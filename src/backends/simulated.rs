// SPDX-License-Identifier: GPL-3.0-only

//! Hardware-free capture backend
//!
//! Fulfills the [`CaptureBackend`] contract without any camera device:
//! photos and recordings get deterministic synthetic paths and completions
//! are delivered immediately through the event queue. Used by the
//! integration tests and useful for developing a rendering layer against
//! the screen without hardware.

use crate::app::Message;
use crate::backends::{
    CaptureBackend, CompletionSender, PermissionStatus, Photo, PhotoOptions, RecordingOptions,
    Video,
};
use crate::errors::{PhotoError, RecordingError};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;
use tracing::debug;

/// Simulated capture backend with a scriptable permission outcome
pub struct SimulatedBackend {
    permission: PermissionStatus,
    /// When set, every recording reports this duration instead of wall time
    fixed_duration_secs: Option<f64>,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    active: Option<ActiveRecording>,
    capture_count: u32,
}

struct ActiveRecording {
    started: Instant,
    codec: String,
    path: String,
    completions: CompletionSender,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            fixed_duration_secs: None,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Script the permission outcome delivered on request
    pub fn with_permission(mut self, permission: PermissionStatus) -> Self {
        self.permission = permission;
        self
    }

    /// Report a fixed duration for every recording (deterministic clock)
    pub fn with_fixed_duration(mut self, secs: f64) -> Self {
        self.fixed_duration_secs = Some(secs);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureBackend for SimulatedBackend {
    fn request_permission(&self, completions: CompletionSender) {
        debug!(status = ?self.permission, "Simulated permission request");
        let _ = completions.send(Message::PermissionResolved(self.permission));
    }

    fn take_photo(&self, options: PhotoOptions, completions: CompletionSender) {
        if self.permission == PermissionStatus::Denied {
            let _ = completions.send(Message::PhotoCaptured(Err(PhotoError::CaptureFailed(
                "camera permission denied".to_string(),
            ))));
            return;
        }

        let mut inner = self.lock();
        inner.capture_count += 1;
        let path = format!(
            "sim/photo_{:04}_{}x{}.jpg",
            inner.capture_count, options.width, options.height
        );
        debug!(path = %path, quality = options.quality, "Simulated photo capture");
        let _ = completions.send(Message::PhotoCaptured(Ok(Photo { path })));
    }

    fn start_recording(&self, options: RecordingOptions, completions: CompletionSender) {
        if self.permission == PermissionStatus::Denied {
            let _ = completions.send(Message::RecordingFailed(RecordingError::StartFailed(
                "camera permission denied".to_string(),
            )));
            return;
        }

        let mut inner = self.lock();
        if inner.active.is_some() {
            let _ = completions.send(Message::RecordingFailed(RecordingError::StartFailed(
                "recording already in progress".to_string(),
            )));
            return;
        }

        inner.capture_count += 1;
        let path = format!("sim/video_{:04}.mp4", inner.capture_count);
        debug!(path = %path, codec = %options.video_codec, "Simulated recording started");
        inner.active = Some(ActiveRecording {
            started: Instant::now(),
            codec: options.video_codec,
            path,
            completions,
        });
    }

    fn stop_recording(&self) {
        let mut inner = self.lock();
        let Some(active) = inner.active.take() else {
            debug!("Stop requested with no active simulated recording");
            return;
        };

        let duration_secs = self
            .fixed_duration_secs
            .unwrap_or_else(|| active.started.elapsed().as_secs_f64());
        debug!(
            path = %active.path,
            codec = %active.codec,
            duration_secs,
            "Simulated recording finished"
        );
        let _ = active.completions.send(Message::RecordingFinished(Video {
            path: active.path,
            duration_secs,
        }));
    }
}
