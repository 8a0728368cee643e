//! Exit transition of the homepage intro block
//!
//! The intro moves `Shown → Leaving → Removed`. `Leaving` lasts a fixed
//! duration, after which the scheduler reports the ticket back and the block
//! is dropped from the render tree. Showing the intro again is instantaneous
//! and cancels any pending removal.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::view_state::DisplayMode;
use crate::traits::TransitionScheduler;
use crate::types::{TimerHandle, TransitionTicket};

/// How long the intro keeps its leaving class before removal
pub const EXIT_TRANSITION: Duration = Duration::from_millis(2000);

/// Class applied to the intro while it is leaving
pub const LEAVE_CLASS: &str = "slide-up";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroPresence {
    Shown,
    Leaving,
    Removed,
}

impl IntroPresence {
    /// Presence at mount: nothing to animate when results show from the start
    pub fn at_mount(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Intro => IntroPresence::Shown,
            DisplayMode::Results => IntroPresence::Removed,
        }
    }
}

#[derive(Debug)]
struct PendingRemoval {
    ticket: TransitionTicket,
    _timer: TimerHandle,
}

/// Presence state machine for the intro block
#[derive(Debug)]
pub struct IntroTransition {
    presence: IntroPresence,
    duration: Duration,
    pending: Option<PendingRemoval>,
    next_ticket: u64,
}

impl IntroTransition {
    /// Start `Shown` for the intro layout and `Removed` for the results layout
    pub fn new(mode: DisplayMode, duration: Duration) -> Self {
        Self {
            presence: IntroPresence::at_mount(mode),
            duration,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn presence(&self) -> IntroPresence {
        self.presence
    }

    /// Follow the display mode. Returns whether the presence changed.
    pub fn sync(&mut self, mode: DisplayMode, scheduler: &dyn TransitionScheduler) -> bool {
        match mode {
            DisplayMode::Intro => self.show(),
            DisplayMode::Results => self.leave(scheduler),
        }
    }

    /// `Shown → Leaving`, scheduling the removal
    pub fn leave(&mut self, scheduler: &dyn TransitionScheduler) -> bool {
        if self.presence != IntroPresence::Shown {
            return false;
        }
        self.next_ticket += 1;
        let ticket = TransitionTicket(self.next_ticket);
        let timer = scheduler.schedule(self.duration, ticket);

        self.presence = IntroPresence::Leaving;
        self.pending = Some(PendingRemoval { ticket, _timer: timer });
        true
    }

    /// Back to `Shown` from any state, dropping a pending removal
    pub fn show(&mut self) -> bool {
        self.pending = None;
        if self.presence == IntroPresence::Shown {
            return false;
        }
        self.presence = IntroPresence::Shown;
        true
    }

    /// `Leaving → Removed` when `ticket` is the pending one
    pub fn complete(&mut self, ticket: TransitionTicket) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                self.presence = IntroPresence::Removed;
                true
            }
            _ => false,
        }
    }
}
