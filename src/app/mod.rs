// SPDX-License-Identifier: GPL-3.0-only

//! Capture screen controller
//!
//! This module contains the capture screen state machine, its message
//! handling, and the channels connecting it to the rendering layer and the
//! capture backend.
//!
//! # Architecture
//!
//! - `state`: State types (CaptureSession, ViewMode, Message, Notification)
//! - `update`: Message dispatcher
//! - `handlers::ui`: Show-camera, retake, accept, permission handling
//! - `handlers::format`: Resolution selection
//! - `handlers::capture`: Photo capture and the recording lifecycle
//!
//! # Main Types
//!
//! - [`CameraScreen`]: The screen model; owns the session exclusively
//! - [`ScreenHandle`]: Presentation-side handle (actions in, state out)
//! - [`Message`]: All user actions and backend completions

mod handlers;
mod state;
mod update;

pub use state::{CaptureSession, Message, Notification, ViewMode, ViewState};

use crate::backends::{CaptureBackend, PermissionStatus};
use crate::config::Config;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::info;

/// The capture screen model
///
/// Holds the current capture session and mediates every transition, whether
/// triggered by a user action or by an asynchronous backend completion. All
/// messages are processed sequentially on one logical event queue; the
/// session is never shared, so no locking is involved.
pub struct CameraScreen {
    /// Current capture cycle, recreated per cycle
    pub(crate) session: CaptureSession,
    /// Permission outcome, once the platform has answered
    pub(crate) permission: Option<PermissionStatus>,
    /// Compression factor for still photos
    pub(crate) photo_quality: f64,
    /// Capture capability
    pub(crate) backend: Arc<dyn CaptureBackend>,
    /// Sender handed to the backend for async completions
    pub(crate) completions: mpsc::UnboundedSender<Message>,
    /// Single event queue: user actions and backend completions
    pub(crate) inbox: mpsc::UnboundedReceiver<Message>,
    /// Publishes the view state to the rendering layer
    pub(crate) view_tx: watch::Sender<ViewState>,
    /// User-facing notifications (size estimate dialog, accepted media)
    pub(crate) notify_tx: mpsc::UnboundedSender<Notification>,
    /// Set by [`Message::Close`]; ends the event loop
    pub(crate) closed: bool,
}

/// Presentation-side handle for a [`CameraScreen`]
///
/// The rendering layer sends user actions through `messages`, watches
/// `view` for state changes, and drains `notifications` for dialogs.
pub struct ScreenHandle {
    /// Sends user actions into the event queue
    pub messages: mpsc::UnboundedSender<Message>,
    /// Watches the published view state
    pub view: watch::Receiver<ViewState>,
    /// Receives user-facing notifications
    pub notifications: mpsc::UnboundedReceiver<Notification>,
}

impl CameraScreen {
    /// Build a capture screen and its presentation handle.
    ///
    /// The camera permission request goes out immediately; its result is
    /// observed and logged but does not gate any transition.
    pub fn new(backend: Arc<dyn CaptureBackend>, config: &Config) -> (Self, ScreenHandle) {
        let (messages, inbox) = mpsc::unbounded_channel();
        let (notify_tx, notifications) = mpsc::unbounded_channel();

        let session = CaptureSession {
            mode: ViewMode::Idle,
            selected_resolution: config.default_resolution,
            last_media_path: None,
        };
        let (view_tx, view) = watch::channel(ViewState {
            mode: session.mode,
            selected_resolution: session.selected_resolution,
            last_media_path: None,
            permission: None,
        });

        info!(
            resolution = %session.selected_resolution,
            "Requesting camera permission"
        );
        backend.request_permission(messages.clone());

        let screen = Self {
            session,
            permission: None,
            photo_quality: config.photo_quality,
            backend,
            completions: messages.clone(),
            inbox,
            view_tx,
            notify_tx,
            closed: false,
        };
        let handle = ScreenHandle {
            messages,
            view,
            notifications,
        };
        (screen, handle)
    }

    /// Drive the screen until [`Message::Close`] arrives or every sender
    /// is dropped.
    pub async fn run(mut self) {
        while !self.closed {
            let Some(message) = self.inbox.recv().await else {
                break;
            };
            self.update(message);
        }
        info!("Capture screen event loop finished");
    }

    /// Process every message already queued, without waiting.
    ///
    /// For embedders that poll from their own event loop instead of running
    /// [`CameraScreen::run`]. Completions triggered while draining are
    /// handled in the same pass.
    pub fn pump(&mut self) {
        while let Ok(message) = self.inbox.try_recv() {
            self.update(message);
        }
    }

    /// Publish the current session to the rendering layer.
    ///
    /// Ignored messages leave the state untouched; subscribers are only
    /// woken when something actually changed.
    pub(crate) fn publish_view(&self) {
        let next = ViewState {
            mode: self.session.mode,
            selected_resolution: self.session.selected_resolution,
            last_media_path: self.session.last_media_path.clone(),
            permission: self.permission,
        };
        self.view_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}
