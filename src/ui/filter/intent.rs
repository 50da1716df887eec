use crate::ui::mvi::Intent;

use super::axis::{Choice, FilterAxis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterIntent<C: Choice, S: Choice> {
    NextCategory,
    PrevCategory,
    NextStatus,
    SetCategory(FilterAxis<C>),
    SetStatus(FilterAxis<S>),
    Reset,
    SelectNext,
    SelectPrev,
}

impl<C: Choice, S: Choice> Intent for FilterIntent<C, S> {}
