// SPDX-License-Identifier: MPL-2.0
//! Scroll session state machine.
//!
//! A session starts on a middle-button press and drives the document pan
//! until one of three stop triggers fires: a long-press release, an explicit
//! middle re-press while in toggle mode, or any other click while in toggle
//! mode. A release quicker than the toggle threshold promotes the session to
//! toggle mode, where scrolling continues without the button held.

use iced::{mouse, Point, Vector};
use std::time::{Duration, Instant};

/// Scaling applied to the pointer displacement to obtain the per-frame
/// scroll delta. Larger drags scroll proportionally faster; there is no
/// upper bound on the resulting speed.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Presses released faster than this count as a quick click and enter
/// toggle mode instead of ending the session.
pub const DEFAULT_TOGGLE_THRESHOLD: Duration = Duration::from_millis(200);

const MIN_SENSITIVITY: f32 = 0.01;
const MAX_SENSITIVITY: f32 = 1.0;
const MAX_TOGGLE_THRESHOLD: Duration = Duration::from_millis(1000);

/// Runtime tuning for the session, clamped to sane ranges so launcher flags
/// cannot request nonsensical values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    sensitivity: f32,
    toggle_threshold: Duration,
}

impl Tuning {
    /// Creates a tuning value, clamping both knobs to their supported range.
    #[must_use]
    pub fn new(sensitivity: f32, toggle_threshold: Duration) -> Self {
        Self {
            sensitivity: sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY),
            toggle_threshold: toggle_threshold.min(MAX_TOGGLE_THRESHOLD),
        }
    }

    /// Displacement-to-velocity scaling factor.
    #[must_use]
    pub fn sensitivity(self) -> f32 {
        self.sensitivity
    }

    /// Maximum press duration that still counts as a quick click.
    #[must_use]
    pub fn toggle_threshold(self) -> Duration {
        self.toggle_threshold
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            toggle_threshold: DEFAULT_TOGGLE_THRESHOLD,
        }
    }
}

/// Outcome of a middle-button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    /// A session started (or restarted in place) at the press location.
    Started,
    /// The press acted as an explicit stop for a toggle-mode session.
    Stopped,
}

/// Outcome of a middle-button release during an active, non-toggle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAction {
    /// Quick click: the session continues in toggle mode.
    Promoted,
    /// Long press: the session ended.
    Stopped,
}

/// Middle-click scroll session.
///
/// All handlers are total over the state machine: event sequences that do
/// not apply in the current state are no-ops rather than errors.
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    active: bool,
    toggle_mode: bool,
    origin: Option<Point>,
    velocity: Vector,
    started_at: Option<Instant>,
}

impl Session {
    /// Creates an idle session with the given tuning.
    #[must_use]
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            active: false,
            toggle_mode: false,
            origin: None,
            velocity: Vector::new(0.0, 0.0),
            started_at: None,
        }
    }

    /// Handles a button press at the given pointer position.
    ///
    /// Only the middle button participates; any other button returns `None`
    /// and leaves the state untouched. A middle press while in toggle mode
    /// acts as an explicit stop; otherwise it (re)starts the session at the
    /// press location.
    pub fn on_press(
        &mut self,
        button: mouse::Button,
        position: Point,
        now: Instant,
    ) -> Option<PressAction> {
        if button != mouse::Button::Middle {
            return None;
        }

        if self.active && self.toggle_mode {
            self.end();
            return Some(PressAction::Stopped);
        }

        // A press while already holding a non-toggle session restarts it in
        // place: new origin and timestamp, velocity retained until the next
        // move.
        self.active = true;
        self.toggle_mode = false;
        self.origin = Some(position);
        self.started_at = Some(now);
        Some(PressAction::Started)
    }

    /// Handles a pointer move, returning the new velocity while a session is
    /// active. No-op otherwise.
    pub fn on_move(&mut self, position: Point) -> Option<Vector> {
        if !self.active {
            return None;
        }
        let origin = self.origin?;

        let k = self.tuning.sensitivity;
        self.velocity = Vector::new((position.x - origin.x) * k, (position.y - origin.y) * k);
        Some(self.velocity)
    }

    /// Handles a button release.
    ///
    /// Only meaningful for the middle button while a session is active and
    /// not already in toggle mode: a release within the toggle threshold
    /// promotes the session to toggle mode, a later one ends it.
    pub fn on_release(&mut self, button: mouse::Button, now: Instant) -> Option<ReleaseAction> {
        if button != mouse::Button::Middle || !self.active || self.toggle_mode {
            return None;
        }
        let started_at = self.started_at?;

        if now.duration_since(started_at) < self.tuning.toggle_threshold {
            self.toggle_mode = true;
            Some(ReleaseAction::Promoted)
        } else {
            self.end();
            Some(ReleaseAction::Stopped)
        }
    }

    /// Handles the synthetic click fired after a full press+release cycle.
    ///
    /// Any non-middle click while in toggle mode consumes the click and ends
    /// the session; returns whether that happened.
    pub fn on_click(&mut self, button: mouse::Button) -> bool {
        if self.toggle_mode && button != mouse::Button::Middle {
            self.end();
            return true;
        }
        false
    }

    /// Whether the secondary-button context sequence should be withheld from
    /// the content underneath.
    #[must_use]
    pub fn on_context_menu(&self) -> bool {
        self.active
    }

    /// Ends the session. Idempotent; every exit path runs through here so
    /// velocity, flags, and timestamps are always cleared together.
    pub fn end(&mut self) {
        self.active = false;
        self.toggle_mode = false;
        self.origin = None;
        self.velocity = Vector::new(0.0, 0.0);
        self.started_at = None;
    }

    /// Whether a scroll session is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the session persists without the button held.
    #[must_use]
    pub fn is_toggle_mode(&self) -> bool {
        self.toggle_mode
    }

    /// Pointer position at session start, while active.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Current per-frame scroll delta.
    #[must_use]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// The tuning this session was created with.
    #[must_use]
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
