use gloo::timers::callback::Timeout;

/// Pending guard timeouts for one mounted hero.
///
/// Dropping a `Timeout` clears it, so re-arming replaces (and cancels) the
/// previous handle and `cancel_all` leaves nothing to fire after unmount.
#[derive(Default)]
pub struct GuardTimers {
    scroll: Option<Timeout>,
    transition: Option<Timeout>,
}

impl GuardTimers {
    pub fn arm_scroll<F>(&mut self, millis: u32, on_expire: F)
    where
        F: FnOnce() + 'static,
    {
        self.scroll = Some(Timeout::new(millis, on_expire));
    }

    pub fn arm_transition<F>(&mut self, millis: u32, on_expire: F)
    where
        F: FnOnce() + 'static,
    {
        self.transition = Some(Timeout::new(millis, on_expire));
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.scroll.is_none() && self.transition.is_none()
    }

    pub fn cancel_all(&mut self) {
        drop(self.scroll.take());
        drop(self.transition.take());
    }
}
