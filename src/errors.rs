// SPDX-License-Identifier: GPL-3.0-only
// Top-level error type prepared for future unified error handling
#![allow(dead_code)]

//! Error types for the capture screen

use std::fmt;

/// Result type alias using CaptureError
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Main capture screen error type
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureError {
    /// Camera permission was denied; the view degrades, it never crashes
    PermissionDenied,
    /// Video recording errors
    Recording(RecordingError),
    /// Still photo capture errors
    Photo(PhotoError),
    /// Size estimation errors
    Estimate(EstimateError),
}

/// Video recording errors, surfaced through the backend's error completion
#[derive(Debug, Clone, PartialEq)]
pub enum RecordingError {
    /// Failed to start recording
    StartFailed(String),
    /// Encoder failed while a recording was active
    EncodingFailed(String),
}

/// Still photo capture errors
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoError {
    /// Capture failed; the view mode is left unchanged
    CaptureFailed(String),
}

/// Size estimation errors
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// Resolution label outside the fixed catalog. Unreachable from the
    /// controller, which selects tiers by construction.
    InvalidTier(String),
    /// Negative or non-finite recording duration
    InvalidDuration(f64),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied => write!(f, "Camera permission denied"),
            CaptureError::Recording(e) => write!(f, "Recording error: {}", e),
            CaptureError::Photo(e) => write!(f, "Photo error: {}", e),
            CaptureError::Estimate(e) => write!(f, "Estimate error: {}", e),
        }
    }
}

impl fmt::Display for RecordingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingError::StartFailed(msg) => write!(f, "Failed to start recording: {}", msg),
            RecordingError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::InvalidTier(label) => {
                write!(f, "Unknown resolution tier: {:?}", label)
            }
            EstimateError::InvalidDuration(secs) => {
                write!(f, "Invalid recording duration: {}", secs)
            }
        }
    }
}

impl std::error::Error for CaptureError {}
impl std::error::Error for RecordingError {}
impl std::error::Error for PhotoError {}
impl std::error::Error for EstimateError {}

// Conversions from sub-errors to CaptureError
impl From<RecordingError> for CaptureError {
    fn from(err: RecordingError) -> Self {
        CaptureError::Recording(err)
    }
}

impl From<PhotoError> for CaptureError {
    fn from(err: PhotoError) -> Self {
        CaptureError::Photo(err)
    }
}

impl From<EstimateError> for CaptureError {
    fn from(err: EstimateError) -> Self {
        CaptureError::Estimate(err)
    }
}
