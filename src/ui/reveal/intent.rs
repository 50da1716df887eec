use crate::ui::mvi::Intent;

use super::state::RegionId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealIntent {
    /// Viewport notification for one subscribed region.
    Intersected { region: RegionId, fraction: f32 },
}

impl Intent for RevealIntent {}
