use std::fmt;

use crate::ui::mvi::UiState;

use super::axis::{Choice, FilterAxis};

/// An item that can be narrowed by category and status.
pub trait Filterable: fmt::Debug + Clone + PartialEq + Sync + 'static {
    type Category: Choice;
    type Status: Choice;

    fn category(&self) -> Self::Category;
    fn status(&self) -> Self::Status;
}

/// Items matching both axes, in their original order.
///
/// Pure: the source list is untouched and equal inputs give equal outputs.
pub fn filter_items<T: Filterable>(
    items: &[T],
    category: FilterAxis<T::Category>,
    status: FilterAxis<T::Status>,
) -> Vec<&T> {
    items
        .iter()
        .filter(|item| category.matches(item.category()) && status.matches(item.status()))
        .collect()
}

/// Filter and selection state over a fixed list.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<T: Filterable> {
    pub items: &'static [T],
    pub category: FilterAxis<T::Category>,
    pub status: FilterAxis<T::Status>,
    /// Index into the filtered list; stands in for the hovered card.
    pub selected: usize,
}

impl<T: Filterable> Default for FilterState<T> {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl<T: Filterable> UiState for FilterState<T> {}

impl<T: Filterable> FilterState<T> {
    pub fn new(items: &'static [T]) -> Self {
        Self {
            items,
            category: FilterAxis::All,
            status: FilterAxis::All,
            selected: 0,
        }
    }

    pub fn visible(&self) -> Vec<&'static T> {
        filter_items(self.items, self.category, self.status)
    }

    pub fn selected_item(&self) -> Option<&'static T> {
        self.visible().get(self.selected).copied()
    }
}
