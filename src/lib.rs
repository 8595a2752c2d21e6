// SPDX-License-Identifier: GPL-3.0-only

//! Camera capture screen controller
//!
//! This library drives a device camera behind an opaque capture capability:
//! it requests permission, tracks the view mode (idle, live preview,
//! recording, review), records video or captures stills at a selected
//! resolution tier, and estimates the file size of a finished recording for
//! a user-facing dialog.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: The capture screen state machine and its message handling
//! - [`backends`]: Capture capability abstraction (trait boundary)
//! - [`estimate`]: Recording size estimation
//! - [`config`]: User configuration handling
//! - [`constants`]: Resolution catalog and codec constants
//!
//! Rendering, dialog presentation, and the camera hardware itself live
//! outside this crate: the renderer subscribes to published view state, and
//! hardware is injected as a [`backends::CaptureBackend`].

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod estimate;

// Re-export commonly used types
pub use app::{CameraScreen, Message, Notification, ScreenHandle, ViewMode, ViewState};
pub use backends::{CaptureBackend, PermissionStatus, SimulatedBackend};
pub use config::Config;
pub use constants::ResolutionTier;
pub use estimate::{SizeEstimate, estimate_video_size};
