use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::axis::FilterAxis;
use super::intent::FilterIntent;
use super::state::{Filterable, FilterState};

pub struct FilterReducer<T>(PhantomData<T>);

impl<T: Filterable> Reducer for FilterReducer<T> {
    type State = FilterState<T>;
    type Intent = FilterIntent<T::Category, T::Status>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            FilterIntent::NextCategory => state.category = state.category.next(),
            FilterIntent::PrevCategory => state.category = state.category.prev(),
            FilterIntent::NextStatus => state.status = state.status.next(),
            FilterIntent::SetCategory(axis) => state.category = axis,
            FilterIntent::SetStatus(axis) => state.status = axis,
            FilterIntent::Reset => {
                state.category = FilterAxis::All;
                state.status = FilterAxis::All;
                state.selected = 0;
            }
            FilterIntent::SelectNext => {
                let len = state.visible().len();
                if len > 0 {
                    state.selected = (state.selected + 1) % len;
                }
            }
            FilterIntent::SelectPrev => {
                let len = state.visible().len();
                if len > 0 {
                    state.selected = if state.selected == 0 {
                        len - 1
                    } else {
                        state.selected - 1
                    };
                }
            }
        }
        let len = state.visible().len();
        state.selected = state.selected.min(len.saturating_sub(1));
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Project, ProjectCategory, Status, PROJECTS};
    use crate::ui::mvi::dispatch;

    type Intent = FilterIntent<ProjectCategory, Status>;

    fn projects() -> FilterState<Project> {
        FilterState::new(PROJECTS)
    }

    #[test]
    fn category_and_status_combine() {
        let mut state = projects();
        dispatch::<FilterReducer<Project>>(
            &mut state,
            Intent::SetCategory(FilterAxis::Only(ProjectCategory::Ai)),
        );
        assert_eq!(state.visible().len(), 2);
        dispatch::<FilterReducer<Project>>(
            &mut state,
            Intent::SetStatus(FilterAxis::Only(Status::InProgress)),
        );
        let titles: Vec<_> = state.visible().iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["ChatBot with Generative AI"]);
    }

    #[test]
    fn selection_wraps_and_is_clamped_after_filtering() {
        let mut state = projects();
        dispatch::<FilterReducer<Project>>(&mut state, Intent::SelectPrev);
        assert_eq!(state.selected, PROJECTS.len() - 1);

        dispatch::<FilterReducer<Project>>(
            &mut state,
            Intent::SetCategory(FilterAxis::Only(ProjectCategory::Devops)),
        );
        assert_eq!(state.selected, 0);
        assert_eq!(
            state.selected_item().map(|p| p.title),
            Some("AWS Infrastructure Automation")
        );
    }

    #[test]
    fn empty_result_has_no_selection() {
        let mut state = projects();
        dispatch::<FilterReducer<Project>>(
            &mut state,
            Intent::SetCategory(FilterAxis::Only(ProjectCategory::Web)),
        );
        dispatch::<FilterReducer<Project>>(
            &mut state,
            Intent::SetStatus(FilterAxis::Only(Status::Planned)),
        );
        assert!(state.visible().is_empty());
        dispatch::<FilterReducer<Project>>(&mut state, Intent::SelectNext);
        assert_eq!(state.selected, 0);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn reset_restores_everything() {
        let mut state = projects();
        dispatch::<FilterReducer<Project>>(&mut state, Intent::NextCategory);
        dispatch::<FilterReducer<Project>>(&mut state, Intent::NextStatus);
        dispatch::<FilterReducer<Project>>(&mut state, Intent::Reset);
        assert_eq!(state, projects());
    }
}
