use std::fmt;

/// A closed set of values a list can be narrowed by.
pub trait Choice: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// One filter dimension: either the `All` wildcard or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterAxis<T> {
    #[default]
    All,
    Only(T),
}

impl<T: Choice> FilterAxis<T> {
    pub fn matches(self, value: T) -> bool {
        match self {
            FilterAxis::All => true,
            FilterAxis::Only(wanted) => wanted == value,
        }
    }

    /// `All`, then every variant in order, then back to `All`.
    pub fn next(self) -> Self {
        match self {
            FilterAxis::All => T::ALL.first().copied().map_or(FilterAxis::All, FilterAxis::Only),
            FilterAxis::Only(current) => {
                let position = T::ALL.iter().position(|value| *value == current);
                match position.and_then(|index| T::ALL.get(index + 1)) {
                    Some(next) => FilterAxis::Only(*next),
                    None => FilterAxis::All,
                }
            }
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FilterAxis::All => T::ALL.last().copied().map_or(FilterAxis::All, FilterAxis::Only),
            FilterAxis::Only(current) => match T::ALL.iter().position(|value| *value == current) {
                Some(0) | None => FilterAxis::All,
                Some(index) => FilterAxis::Only(T::ALL[index - 1]),
            },
        }
    }

    pub fn label(self, all_label: &'static str) -> &'static str {
        match self {
            FilterAxis::All => all_label,
            FilterAxis::Only(value) => value.label(),
        }
    }
}
