//! Refresh state machine: decides *when* a fetch cycle starts.
//!
//! Three triggers exist — the manual button, the auto-refresh toggle, and a
//! single repeating 30-second timer. The controller owns no I/O; it hands out
//! monotonically increasing cycle ids and the UI loop starts the actual
//! fetches. A completed cycle only counts if its id is still the latest
//! started one, which makes a response that arrives after a newer cycle has
//! begun harmlessly stale instead of a data race.

use std::time::{Duration, Instant};

/// Cadence of the auto-refresh timer.
pub const AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Monotonically increasing identifier for one fetch cycle.
pub type CycleId = u64;

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// A cycle is in flight.
    Fetching,
    /// Idle with auto-refresh on (a timer may be pending).
    AutoArmed,
    /// Idle with auto-refresh off.
    AutoDisarmed,
}

/// What the status label currently shows. Exactly one of these at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Idle,
    Communicating,
    Trouble,
}

impl ServerStatus {
    pub fn text(self) -> &'static str {
        match self {
            ServerStatus::Idle => "",
            ServerStatus::Communicating => "Communicating with server...",
            ServerStatus::Trouble => "Trouble connecting with server...",
        }
    }
}

pub struct RefreshController {
    auto_enabled: bool,
    next_cycle: CycleId,
    in_flight: Option<CycleId>,
    /// At most one pending timer, by construction.
    deadline: Option<Instant>,
}

impl RefreshController {
    /// Start in auto mode with an immediately-due timer, so the first
    /// [`poll_timer`](Self::poll_timer) call kicks off the startup fetch.
    pub fn new(now: Instant) -> Self {
        Self {
            auto_enabled: true,
            next_cycle: 0,
            in_flight: None,
            deadline: Some(now),
        }
    }

    fn start_cycle(&mut self) -> CycleId {
        // Starting any cycle cancels the pending timer first.
        self.deadline = None;
        let id = self.next_cycle;
        self.next_cycle += 1;
        self.in_flight = Some(id);
        id
    }

    /// Manual refresh: turns auto mode off and starts a fresh cycle,
    /// superseding any cycle already in flight.
    pub fn manual_trigger(&mut self) -> CycleId {
        self.auto_enabled = false;
        self.start_cycle()
    }

    /// Flip auto mode. Turning it on always starts an immediate cycle
    /// (returned); turning it off clears the pending timer but leaves an
    /// in-flight cycle to finish on its own.
    pub fn toggle_auto(&mut self) -> Option<CycleId> {
        self.auto_enabled = !self.auto_enabled;
        if self.auto_enabled {
            Some(self.start_cycle())
        } else {
            self.deadline = None;
            None
        }
    }

    /// Start a cycle if the pending timer has expired.
    pub fn poll_timer(&mut self, now: Instant) -> Option<CycleId> {
        match self.deadline {
            Some(due) if due <= now => Some(self.start_cycle()),
            _ => None,
        }
    }

    /// Record that cycle `id` finished (regardless of success or failure).
    ///
    /// Returns `true` if `id` is the latest started cycle, i.e. the caller
    /// should apply its result. Stale ids are ignored entirely: they neither
    /// touch the timer nor end the newer in-flight cycle.
    pub fn cycle_complete(&mut self, id: CycleId, now: Instant) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }
        self.in_flight = None;
        self.deadline = if self.auto_enabled {
            Some(now + AUTO_REFRESH_INTERVAL)
        } else {
            None
        };
        true
    }

    pub fn auto_enabled(&self) -> bool {
        self.auto_enabled
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Pending timer deadline, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn state(&self) -> RefreshState {
        if self.in_flight.is_some() {
            RefreshState::Fetching
        } else if self.auto_enabled {
            RefreshState::AutoArmed
        } else {
            RefreshState::AutoDisarmed
        }
    }
}
