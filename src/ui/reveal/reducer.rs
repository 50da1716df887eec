use crate::ui::mvi::Reducer;

use super::intent::RevealIntent;
use super::state::RevealSet;

pub struct RevealReducer;

impl Reducer for RevealReducer {
    type State = RevealSet;
    type Intent = RevealIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RevealIntent::Intersected { region, fraction } => {
                if fraction >= state.threshold() && !state.is_revealed(region) {
                    tracing::debug!(region = region.0, fraction, "region revealed");
                    state.latch(region)
                } else {
                    state
                }
            }
        }
    }
}
