// SPDX-License-Identifier: GPL-3.0-only

//! Message handler modules
//!
//! Handlers are grouped by functional domain, keeping related transitions
//! together.

pub mod capture;
pub mod format;
pub mod ui;
