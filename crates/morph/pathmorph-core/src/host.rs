//! Host animation clock contract and a reference timer.
//!
//! The host owns scheduling: it decides when a run starts, hands out absolute
//! normalized times and reports when a run stops. The engine only reacts to
//! those events and asks the host to unschedule before it mutates state.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::curve::EasingCurve;

/// Normalized time at the start of a run.
pub const NORMALIZED_MIN: u32 = 0;
/// Normalized time at the end of a run.
pub const NORMALIZED_MAX: u32 = 65535;

/// Lifecycle and frame notifications produced by a host on each advance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// The delay elapsed and the run began.
    Started,
    /// A frame at the given normalized time.
    Update(u32),
    /// The run ended; `finished` is false when it was cut short.
    Stopped { finished: bool },
}

/// Interface a host animation primitive exposes to the engine.
pub trait HostAnimation {
    fn schedule(&mut self);
    /// Remove from scheduling. Returns whether it was scheduled.
    fn unschedule(&mut self) -> bool;
    fn is_scheduled(&self) -> bool;
    fn curve(&self) -> EasingCurve;
    fn set_curve(&mut self, curve: EasingCurve);
    fn set_duration(&mut self, duration_ms: u32);
    fn set_delay(&mut self, delay_ms: u32);
    /// Advance the clock by `dt_ms` and report what happened, in order.
    fn advance(&mut self, dt_ms: u32) -> Vec<HostEvent>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TimerState {
    Idle,
    Scheduled { elapsed_ms: u64, started: bool },
}

/// Delay-then-duration clock delivering linear normalized time.
///
/// The curve is stored for the engine to read; the timer itself never warps
/// time.
#[derive(Clone, Debug)]
pub struct Timer {
    duration_ms: u32,
    delay_ms: u32,
    curve: EasingCurve,
    state: TimerState,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Timer {
    pub fn new(cfg: &Config) -> Self {
        Self {
            duration_ms: cfg.duration_ms,
            delay_ms: cfg.delay_ms,
            curve: cfg.curve,
            state: TimerState::Idle,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    fn normalized(&self, run_ms: u64) -> u32 {
        if self.duration_ms == 0 {
            return NORMALIZED_MAX;
        }
        let span = u64::from(NORMALIZED_MAX - NORMALIZED_MIN);
        let t = run_ms.saturating_mul(span) / u64::from(self.duration_ms);
        NORMALIZED_MIN + t.min(span) as u32
    }
}

impl HostAnimation for Timer {
    fn schedule(&mut self) {
        self.state = TimerState::Scheduled {
            elapsed_ms: 0,
            started: false,
        };
    }

    fn unschedule(&mut self) -> bool {
        let was = self.is_scheduled();
        self.state = TimerState::Idle;
        was
    }

    fn is_scheduled(&self) -> bool {
        matches!(self.state, TimerState::Scheduled { .. })
    }

    fn curve(&self) -> EasingCurve {
        self.curve
    }

    fn set_curve(&mut self, curve: EasingCurve) {
        self.curve = curve;
    }

    fn set_duration(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    fn set_delay(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
    }

    fn advance(&mut self, dt_ms: u32) -> Vec<HostEvent> {
        let TimerState::Scheduled {
            elapsed_ms,
            started,
        } = self.state
        else {
            return Vec::new();
        };

        let mut events = Vec::with_capacity(3);
        let elapsed_ms = elapsed_ms + u64::from(dt_ms);
        let delay = u64::from(self.delay_ms);
        if elapsed_ms < delay {
            self.state = TimerState::Scheduled {
                elapsed_ms,
                started,
            };
            return events;
        }
        if !started {
            events.push(HostEvent::Started);
        }

        let t = self.normalized(elapsed_ms - delay);
        events.push(HostEvent::Update(t));
        if t == NORMALIZED_MAX {
            self.state = TimerState::Idle;
            events.push(HostEvent::Stopped { finished: true });
        } else {
            self.state = TimerState::Scheduled {
                elapsed_ms,
                started: true,
            };
        }
        events
    }
}
