use std::time::Instant;

use crate::ui::mvi;
use crate::ui::schedule::{Scheduler, TimerId, TimerTarget, ViewId};

use super::intent::TypewriterIntent;
use super::reducer::TypewriterReducer;
use super::role_cycle::{RoleCycle, TypewriterTiming};
use super::state::TypewriterState;

/// Owns the typewriter state of one mounted hero and its pending timer.
///
/// Exactly one timer is pending while mounted; none after `unmount`.
#[derive(Debug)]
pub struct TypewriterDriver {
    view: ViewId,
    roles: RoleCycle,
    timing: TypewriterTiming,
    state: TypewriterState,
    timer: Option<TimerId>,
}

impl TypewriterDriver {
    pub fn mount(
        view: ViewId,
        roles: RoleCycle,
        timing: TypewriterTiming,
        scheduler: &mut Scheduler,
        now: Instant,
    ) -> Self {
        let mut driver = Self {
            view,
            roles,
            timing,
            state: TypewriterState::default(),
            timer: None,
        };
        driver.arm(scheduler, now);
        driver
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Handle the firing of this driver's timer and arm the next one.
    pub fn on_timer(&mut self, scheduler: &mut Scheduler, now: Instant) {
        self.timer = None;
        mvi::dispatch::<TypewriterReducer>(
            &mut self.state,
            TypewriterIntent::Tick {
                roles: self.roles.clone(),
            },
        );
        self.arm(scheduler, now);
    }

    pub fn unmount(&mut self, scheduler: &mut Scheduler) {
        if let Some(timer) = self.timer.take() {
            scheduler.cancel(timer);
            tracing::debug!(view = self.view.0, "typewriter timer cancelled");
        }
    }

    fn arm(&mut self, scheduler: &mut Scheduler, now: Instant) {
        let delay = self.state.next_delay(&self.timing);
        self.timer = Some(scheduler.schedule_after(
            now,
            delay,
            TimerTarget::Typewriter { view: self.view },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn mount_arms_first_tick_at_type_speed() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        let roles = RoleCycle::new(["hi"]).unwrap();
        let driver = TypewriterDriver::mount(
            ViewId(1),
            roles,
            TypewriterTiming::default(),
            &mut scheduler,
            now,
        );
        assert!(driver.is_armed());
        assert_eq!(scheduler.next_deadline(), Some(now + Duration::from_millis(100)));
    }

    #[test]
    fn unmount_cancels_pending_tick() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        let roles = RoleCycle::new(["hi"]).unwrap();
        let mut driver = TypewriterDriver::mount(
            ViewId(1),
            roles,
            TypewriterTiming::default(),
            &mut scheduler,
            now,
        );
        driver.unmount(&mut scheduler);
        assert!(!driver.is_armed());
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.take_due(now + Duration::from_secs(60)).is_empty());
    }
}
