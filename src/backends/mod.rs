// SPDX-License-Identifier: GPL-3.0-only

//! Capture backend abstraction
//!
//! The capture screen never touches camera hardware directly. Everything it
//! needs — permission, still photos, video recording — goes through the
//! [`CaptureBackend`] trait, and every outcome comes back asynchronously as
//! a [`Message`] on the screen's single event queue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │   CameraScreen      │  ← State machine, single event queue
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ CaptureBackend Trait│  ← Common interface
//! └──────────┬──────────┘
//!            │
//!            ▼
//!      ┌───────────┐
//!      │ Simulated │  ← Hardware-free implementation
//!      └───────────┘
//! ```

pub mod simulated;

pub use simulated::SimulatedBackend;

use crate::app::Message;

/// Channel used by backends to deliver asynchronous completions back into
/// the controller's event queue.
pub type CompletionSender = tokio::sync::mpsc::UnboundedSender<Message>;

/// Result of a camera permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Camera access granted
    Granted,
    /// Camera access denied; later capture calls are expected to fail
    Denied,
}

/// A captured still photo as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Path of the saved photo file
    pub path: String,
}

/// Options for a still photo capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoOptions {
    /// Compression factor in 0.0 - 1.0
    pub quality: f64,
    /// Requested frame width in pixels
    pub width: u32,
    /// Requested frame height in pixels
    pub height: u32,
}

/// A finished video recording as reported by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    /// Path of the saved video file
    pub path: String,
    /// Realized recording duration in seconds
    pub duration_secs: f64,
}

/// Options for starting a video recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingOptions {
    /// Codec identifier handed to the encoder (e.g. "h265")
    pub video_codec: String,
}

/// Capture capability consumed by the capture screen
///
/// All operations are asynchronous from the controller's perspective: calls
/// return immediately and outcomes are delivered as [`Message`]s through the
/// provided [`CompletionSender`]. Completions may arrive after further user
/// actions; the controller tolerates that.
pub trait CaptureBackend: Send + Sync {
    /// Ask the platform for camera permission.
    ///
    /// Delivers [`Message::PermissionResolved`]. The result is observed, not
    /// awaited: the screen keeps working and later capture calls simply fail
    /// if permission was denied.
    fn request_permission(&self, completions: CompletionSender);

    /// Capture a still photo with the given options.
    ///
    /// Delivers [`Message::PhotoCaptured`] with the saved photo path or the
    /// capture failure.
    fn take_photo(&self, options: PhotoOptions, completions: CompletionSender);

    /// Begin encoding video.
    ///
    /// The recording runs until [`CaptureBackend::stop_recording`];
    /// [`Message::RecordingFinished`] or [`Message::RecordingFailed`] is
    /// delivered once the encode settles.
    fn start_recording(&self, options: RecordingOptions, completions: CompletionSender);

    /// Stop an active recording. Must be a no-op when none is active.
    fn stop_recording(&self);
}
