//! Active-feature selection.
//!
//! `FeatureSelector` owns the active index and the two guard flags. It never
//! touches timers or the DOM: every operation returns an [`Applied`] report and
//! the caller arms the matching timeouts, which later call
//! [`FeatureSelector::release_scroll`] / [`FeatureSelector::release_transition`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionGuard {
    /// Every selection is applied immediately.
    Unguarded,
    /// A selection engages a lock; requests while locked are dropped.
    TransitionLock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    ScrollDebounce,
    TransitionLocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: usize, to: usize },
    Unchanged,
    Ignored(IgnoreReason),
}

/// Result of one operation plus the timers the caller must (re)arm.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub outcome: Outcome,
    pub arm_scroll_debounce: bool,
    pub arm_transition_lock: bool,
}

impl Applied {
    fn outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            arm_scroll_debounce: false,
            arm_transition_lock: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    /// Positive vertical delta scrolls down to the next feature; anything
    /// else (including zero) steps back.
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Step::Next
        } else {
            Step::Previous
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSelector {
    len: usize,
    active: usize,
    guard: SelectionGuard,
    scrolling: bool,
    transitioning: bool,
}

impl FeatureSelector {
    pub fn new(len: usize, guard: SelectionGuard) -> Self {
        Self {
            len: len.max(1),
            active: 0,
            guard,
            scrolling: false,
            transitioning: false,
        }
    }

    /// Applies a new card count or guard. Returns `true` when anything
    /// changed; both guard flags are then cleared and the index re-clamped,
    /// so the caller must drop any pending release timers.
    pub fn reconfigure(&mut self, len: usize, guard: SelectionGuard) -> bool {
        let len = len.max(1);
        if len == self.len && guard == self.guard {
            return false;
        }
        self.len = len;
        self.guard = guard;
        self.active = self.clamp(self.active);
        self.scrolling = false;
        self.transitioning = false;
        true
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scrolling
    }

    pub fn is_transition_locked(&self) -> bool {
        self.transitioning
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.len - 1)
    }

    fn target(&self, step: Step) -> usize {
        match step {
            Step::Next => self.clamp(self.active + 1),
            Step::Previous => self.active.saturating_sub(1),
        }
    }

    pub fn select(&mut self, index: usize) -> Applied {
        if self.guard == SelectionGuard::TransitionLock && self.transitioning {
            return Applied::outcome(Outcome::Ignored(IgnoreReason::TransitionLocked));
        }

        let to = self.clamp(index);
        if to == self.active {
            return Applied::outcome(Outcome::Unchanged);
        }

        let from = self.active;
        self.active = to;

        let lock = self.guard == SelectionGuard::TransitionLock;
        if lock {
            self.transitioning = true;
        }
        Applied {
            outcome: Outcome::Moved { from, to },
            arm_scroll_debounce: false,
            arm_transition_lock: lock,
        }
    }

    /// One wheel event over the feature list.
    ///
    /// The debounce window starts on every accepted event, including one that
    /// hits a bound or is dropped by the transition lock.
    pub fn wheel(&mut self, delta_y: f64) -> Applied {
        if self.scrolling {
            return Applied::outcome(Outcome::Ignored(IgnoreReason::ScrollDebounce));
        }
        self.scrolling = true;

        let target = self.target(Step::from_delta(delta_y));
        Applied {
            arm_scroll_debounce: true,
            ..self.select(target)
        }
    }

    pub fn release_scroll(&mut self) {
        self.scrolling = false;
    }

    pub fn release_transition(&mut self) {
        self.transitioning = false;
    }
}
