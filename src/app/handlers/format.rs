// SPDX-License-Identifier: GPL-3.0-only

//! Format selection handlers

use crate::app::CameraScreen;
use crate::constants::ResolutionTier;
use tracing::{debug, info};

impl CameraScreen {
    // =========================================================================
    // Format Selection Handlers
    // =========================================================================

    /// Select a resolution tier. Never changes the view mode; the choice
    /// applies to the next photo or recording call. A selection made while
    /// recording does not touch the running encode, but it is the value the
    /// size estimate uses when that recording finishes.
    pub(crate) fn handle_select_resolution(&mut self, tier: ResolutionTier) {
        if self.session.mode.is_recording() {
            debug!(tier = %tier, "Resolution changed mid-recording, affects the size estimate only");
        }
        self.session.selected_resolution = tier;
        info!(
            tier = %tier,
            width = tier.width(),
            height = tier.height(),
            "Resolution selected"
        );
    }
}
