use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::debug;
use yew::prelude::*;

use crate::config::LandingConfig;
use crate::selector::{Applied, FeatureSelector, Outcome};
use crate::timers::GuardTimers;

#[derive(Clone)]
pub struct FeatureSelectorHandle {
    pub active: usize,
    pub select: Callback<usize>,
    pub wheel: Callback<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardTiming {
    pub scroll_ms: u32,
    pub lock_ms: u32,
}

impl From<&LandingConfig> for GuardTiming {
    fn from(config: &LandingConfig) -> Self {
        Self {
            scroll_ms: config.scroll_debounce_ms,
            lock_ms: config.transition_ms(),
        }
    }
}

/// What the component does in response to one selector operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub scroll_timer_ms: Option<u32>,
    pub transition_timer_ms: Option<u32>,
    pub set_active: Option<usize>,
}

pub fn plan(applied: &Applied, timing: GuardTiming) -> Plan {
    Plan {
        scroll_timer_ms: applied.arm_scroll_debounce.then_some(timing.scroll_ms),
        transition_timer_ms: applied.arm_transition_lock.then_some(timing.lock_ms),
        set_active: match applied.outcome {
            Outcome::Moved { to, .. } => Some(to),
            Outcome::Unchanged | Outcome::Ignored(_) => None,
        },
    }
}

struct Driver {
    selector: Rc<RefCell<FeatureSelector>>,
    timers: Rc<RefCell<GuardTimers>>,
    active: UseStateSetter<usize>,
    timing: GuardTiming,
}

impl Driver {
    fn run(&self, op: impl FnOnce(&mut FeatureSelector) -> Applied) {
        let applied = op(&mut self.selector.borrow_mut());
        let plan = plan(&applied, self.timing);

        if let Some(ms) = plan.scroll_timer_ms {
            let selector = self.selector.clone();
            self.timers.borrow_mut().arm_scroll(ms, move || {
                selector.borrow_mut().release_scroll();
            });
        }
        if let Some(ms) = plan.transition_timer_ms {
            let selector = self.selector.clone();
            self.timers.borrow_mut().arm_transition(ms, move || {
                selector.borrow_mut().release_transition();
            });
        }

        match applied.outcome {
            Outcome::Moved { from, to } => debug!(format!("verify: feature {from} -> {to}")),
            Outcome::Ignored(reason) => {
                let s = self.selector.borrow();
                debug!(format!(
                    "verify: selection dropped ({reason:?}; scroll lock {}, transition lock {})",
                    s.is_scroll_locked(),
                    s.is_transition_locked()
                ));
            }
            Outcome::Unchanged => {}
        }
        if let Some(to) = plan.set_active {
            self.active.set(to);
        }
    }
}

/// Active feature index for a list of `len` cards, with click and wheel
/// entry points guarded per `config`.
///
/// The callbacks keep their identity until the guard timing changes. A new
/// card count or transition style re-clamps the index and clears both guards.
/// Pending timers are cancelled on either change and on unmount; a timing
/// change also releases both guards.
#[hook]
pub fn use_feature_selector(len: usize, config: &LandingConfig) -> FeatureSelectorHandle {
    let guard = config.transition.guard();
    let timing = GuardTiming::from(config);
    let selector = use_mut_ref(|| FeatureSelector::new(len, guard));
    let timers = use_mut_ref(GuardTimers::default);
    let active = use_state_eq(|| 0usize);

    {
        let selector = selector.clone();
        let timers = timers.clone();
        let active = active.setter();
        use_effect_with((len, guard), move |&(len, guard)| {
            let mut s = selector.borrow_mut();
            if s.reconfigure(len, guard) {
                timers.borrow_mut().cancel_all();
                active.set(s.active());
            }
            debug!(format!("verify: selector ready ({len} features, {guard:?})"));
            || ()
        });
    }

    {
        let selector = selector.clone();
        let timers = timers.clone();
        use_effect_with(timing, move |_| {
            move || {
                timers.borrow_mut().cancel_all();
                let mut s = selector.borrow_mut();
                s.release_scroll();
                s.release_transition();
            }
        });
    }

    let callbacks = {
        let active = active.setter();
        use_memo(timing, move |&timing| {
            let driver = Rc::new(Driver {
                selector,
                timers,
                active,
                timing,
            });
            let select = {
                let driver = driver.clone();
                Callback::from(move |index: usize| driver.run(|s| s.select(index)))
            };
            let wheel = Callback::from(move |delta_y: f64| driver.run(|s| s.wheel(delta_y)));
            (select, wheel)
        })
    };

    FeatureSelectorHandle {
        active: *active,
        select: callbacks.0.clone(),
        wheel: callbacks.1.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{IgnoreReason, SelectionGuard};
    use crate::transition::TransitionStyle;

    const TIMING: GuardTiming = GuardTiming {
        scroll_ms: 500,
        lock_ms: 400,
    };

    #[test]
    fn timing_follows_config() {
        let classic = LandingConfig {
            transition: TransitionStyle::Classic,
            scroll_debounce_ms: 750,
            ..LandingConfig::default()
        };
        assert_eq!(
            GuardTiming::from(&classic),
            GuardTiming {
                scroll_ms: 750,
                lock_ms: 300
            }
        );
        assert_eq!(GuardTiming::from(&LandingConfig::default()), TIMING);
    }

    #[test]
    fn accepted_wheel_under_lock_arms_both_timers_and_moves() {
        let mut s = FeatureSelector::new(3, SelectionGuard::TransitionLock);
        let p = plan(&s.wheel(1.0), TIMING);
        assert_eq!(
            p,
            Plan {
                scroll_timer_ms: Some(500),
                transition_timer_ms: Some(400),
                set_active: Some(1),
            }
        );
    }

    #[test]
    fn debounced_wheel_arms_nothing() {
        let mut s = FeatureSelector::new(3, SelectionGuard::Unguarded);
        let _ = s.wheel(1.0);
        let applied = s.wheel(1.0);
        assert_eq!(
            applied.outcome,
            Outcome::Ignored(IgnoreReason::ScrollDebounce)
        );
        assert_eq!(
            plan(&applied, TIMING),
            Plan {
                scroll_timer_ms: None,
                transition_timer_ms: None,
                set_active: None,
            }
        );
    }

    #[test]
    fn wheel_at_bound_only_rearms_debounce() {
        let mut s = FeatureSelector::new(3, SelectionGuard::TransitionLock);
        let p = plan(&s.wheel(-1.0), TIMING);
        assert_eq!(p.scroll_timer_ms, Some(500));
        assert_eq!(p.transition_timer_ms, None);
        assert_eq!(p.set_active, None);
    }

    #[test]
    fn classic_click_sets_active_without_timers() {
        let mut s = FeatureSelector::new(3, SelectionGuard::Unguarded);
        let p = plan(&s.select(2), TIMING);
        assert_eq!(p.set_active, Some(2));
        assert_eq!(p.scroll_timer_ms, None);
        assert_eq!(p.transition_timer_ms, None);
    }

    #[test]
    fn released_timers_reopen_the_selector() {
        // Run the plan's timers by hand: what the timeout callbacks do.
        let mut s = FeatureSelector::new(3, SelectionGuard::TransitionLock);
        let p = plan(&s.wheel(1.0), TIMING);
        assert_eq!(
            s.wheel(1.0).outcome,
            Outcome::Ignored(IgnoreReason::ScrollDebounce)
        );

        if p.scroll_timer_ms.is_some() {
            s.release_scroll();
        }
        assert_eq!(
            s.wheel(1.0).outcome,
            Outcome::Ignored(IgnoreReason::TransitionLocked)
        );

        s.release_scroll();
        if p.transition_timer_ms.is_some() {
            s.release_transition();
        }
        assert_eq!(s.wheel(1.0).outcome, Outcome::Moved { from: 1, to: 2 });
    }
}
