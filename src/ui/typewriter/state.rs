use std::time::Duration;

use crate::ui::mvi::UiState;

use super::role_cycle::TypewriterTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypewriterPhase {
    #[default]
    Typing,
    /// Full role is on screen; waiting out the dwell before deleting.
    Holding,
    Deleting,
}

/// Typewriter state for one mounted hero.
///
/// `displayed_text` is always a prefix of the active role, measured in chars.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypewriterState {
    pub current_index: usize,
    pub displayed_text: String,
    pub phase: TypewriterPhase,
}

impl UiState for TypewriterState {}

impl TypewriterState {
    pub fn is_deleting(&self) -> bool {
        self.phase == TypewriterPhase::Deleting
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed_text.chars().count()
    }

    /// Delay before the next tick should fire.
    pub fn next_delay(&self, timing: &TypewriterTiming) -> Duration {
        match self.phase {
            TypewriterPhase::Typing => timing.type_speed,
            TypewriterPhase::Holding => timing.dwell,
            TypewriterPhase::Deleting => timing.delete_speed,
        }
    }
}
