//! Route menu state. Lives next to the mounted page but outlives it.

use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::pages::Page;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub menu_open: bool,
    /// Highlighted entry while the menu is open.
    pub selection: Page,
}

impl UiState for NavState {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Open the menu on `current`, or close it if open.
    ToggleMenu { current: Page },
    CloseMenu,
    SelectNext,
    SelectPrev,
}

impl Intent for NavIntent {}

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::ToggleMenu { current } => {
                if state.menu_open {
                    NavState {
                        menu_open: false,
                        ..state
                    }
                } else {
                    NavState {
                        menu_open: true,
                        selection: current,
                    }
                }
            }
            NavIntent::CloseMenu => NavState {
                menu_open: false,
                ..state
            },
            NavIntent::SelectNext if state.menu_open => NavState {
                selection: state.selection.next(),
                ..state
            },
            NavIntent::SelectPrev if state.menu_open => NavState {
                selection: state.selection.prev(),
                ..state
            },
            NavIntent::SelectNext | NavIntent::SelectPrev => state,
        }
    }
}
