//! Reducer for the typewriter state machine.

use crate::ui::mvi::Reducer;

use super::intent::TypewriterIntent;
use super::state::{TypewriterPhase, TypewriterState};

pub struct TypewriterReducer;

impl Reducer for TypewriterReducer {
    type State = TypewriterState;
    type Intent = TypewriterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TypewriterIntent::Tick { roles } => {
                let TypewriterState {
                    current_index,
                    mut displayed_text,
                    phase,
                } = state;
                let role = roles.role(current_index);

                match phase {
                    TypewriterPhase::Typing => {
                        let shown = displayed_text.chars().count();
                        if let Some(next) = role.chars().nth(shown) {
                            displayed_text.push(next);
                        }
                        let phase = if displayed_text.chars().count() >= role.chars().count() {
                            TypewriterPhase::Holding
                        } else {
                            TypewriterPhase::Typing
                        };
                        TypewriterState {
                            current_index,
                            displayed_text,
                            phase,
                        }
                    }
                    TypewriterPhase::Holding => TypewriterState {
                        current_index,
                        displayed_text,
                        phase: TypewriterPhase::Deleting,
                    },
                    TypewriterPhase::Deleting => {
                        displayed_text.pop();
                        if displayed_text.is_empty() {
                            TypewriterState {
                                current_index: roles.next_index(current_index),
                                displayed_text,
                                phase: TypewriterPhase::Typing,
                            }
                        } else {
                            TypewriterState {
                                current_index,
                                displayed_text,
                                phase: TypewriterPhase::Deleting,
                            }
                        }
                    }
                }
            }
        }
    }
}
