//! Transient, non-blocking notices (submission results, clipboard copies).

use std::time::{Duration, Instant};

use crate::ui::mvi::{self, Intent, Reducer, UiState};
use crate::ui::schedule::{Scheduler, TimerId, TimerTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoticeState {
    #[default]
    Hidden,
    Visible {
        kind: NoticeKind,
        text: String,
    },
}

impl UiState for NoticeState {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeIntent {
    Show { kind: NoticeKind, text: String },
    Dismiss,
}

impl Intent for NoticeIntent {}

pub struct NoticeReducer;

impl Reducer for NoticeReducer {
    type State = NoticeState;
    type Intent = NoticeIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NoticeIntent::Show { kind, text } => NoticeState::Visible { kind, text },
            NoticeIntent::Dismiss => NoticeState::Hidden,
        }
    }
}

/// The single notice slot and its dismissal timer.
#[derive(Debug)]
pub struct NoticeBoard {
    state: NoticeState,
    timer: Option<TimerId>,
    duration: Duration,
}

impl NoticeBoard {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: NoticeState::Hidden,
            timer: None,
            duration,
        }
    }

    pub fn state(&self) -> &NoticeState {
        &self.state
    }

    /// Show `text`, replacing any visible notice and its pending dismissal.
    pub fn show(
        &mut self,
        kind: NoticeKind,
        text: impl Into<String>,
        scheduler: &mut Scheduler,
        now: Instant,
    ) {
        if let Some(timer) = self.timer.take() {
            scheduler.cancel(timer);
        }
        let text = text.into();
        tracing::debug!(?kind, text = %text, "notice shown");
        mvi::dispatch::<NoticeReducer>(&mut self.state, NoticeIntent::Show { kind, text });
        self.timer = Some(scheduler.schedule_after(now, self.duration, TimerTarget::DismissNotice));
    }

    pub fn on_timer(&mut self) {
        self.timer = None;
        mvi::dispatch::<NoticeReducer>(&mut self.state, NoticeIntent::Dismiss);
    }
}
