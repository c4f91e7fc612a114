// SPDX-License-Identifier: MPL-2.0
//! Autoscroll component encapsulating state and update logic.
//!
//! Translates raw runtime events into session operations, owns the session
//! marker, and turns animation ticks into scroll tasks on the document
//! scrollable. Iced delivers button presses without coordinates, so the
//! component tracks the cursor from move events and anchors sessions to the
//! last known position; a press before any movement is ignored.

use crate::ui::autoscroll::indicator::Indicator;
use crate::ui::autoscroll::session::{PressAction, ReleaseAction, Session, Tuning};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{event, mouse, window, Point, Subscription, Task, Vector};
use std::time::{Duration, Instant};

/// Identifier used for the document scrollable widget.
pub const SCROLLABLE_ID: &str = "drift-document-scrollable";

/// Animation tick interval, the display-refresh analog.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages consumed by the autoscroll component.
#[derive(Debug, Clone)]
pub enum Message {
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Tick,
}

/// Session transitions the application may want to observe after handling a
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SessionStarted,
    SessionPromoted,
    SessionEnded,
}

/// Complete autoscroll component state.
pub struct State {
    session: Session,
    cursor_position: Option<Point>,
    indicator: Option<Indicator>,
}

impl State {
    #[must_use]
    pub fn new(tuning: Tuning) -> Self {
        Self {
            session: Session::new(tuning),
            cursor_position: None,
            indicator: None,
        }
    }

    /// Whether a scroll session is in progress.
    #[must_use]
    pub fn is_session_active(&self) -> bool {
        self.session.is_active()
    }

    /// The underlying session state machine.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the capture area should withhold pointer events from the
    /// content underneath, including the secondary-button context sequence.
    #[must_use]
    pub fn withholds_content_events(&self) -> bool {
        self.session.on_context_menu()
    }

    /// The session marker, present exactly while a session is active.
    #[must_use]
    pub fn indicator(&self) -> Option<&Indicator> {
        self.indicator.as_ref()
    }

    /// The scroll offset to apply on the next animation tick, while a
    /// session is active.
    #[must_use]
    pub fn scroll_step(&self) -> Option<Vector> {
        self.session.is_active().then(|| self.session.velocity())
    }

    /// The frame tick subscription driving the scroll animation.
    ///
    /// Exists only while a session is active; dropping it when the session
    /// ends is the cancel path, and the tick handler itself no-ops once the
    /// session is gone.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.session.is_active() {
            iced::time::every(FRAME_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(event, Instant::now()),
            Message::Tick => match self.scroll_step() {
                Some(velocity) => (
                    Effect::None,
                    operation::scroll_by(
                        Id::new(SCROLLABLE_ID),
                        AbsoluteOffset {
                            x: velocity.x,
                            y: velocity.y,
                        },
                    ),
                ),
                None => (Effect::None, Task::none()),
            },
        }
    }

    /// Processes a raw runtime event, using `now` to classify click
    /// duration.
    pub fn handle_raw_event(
        &mut self,
        event: event::Event,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        match event {
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::ButtonPressed(button) => {
                    let Some(position) = self.cursor_position else {
                        return (Effect::None, Task::none());
                    };
                    self.handle_button_pressed(button, position, now)
                }
                mouse::Event::ButtonReleased(button) => self.handle_button_released(button, now),
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);

                    if let Some(velocity) = self.session.on_move(position) {
                        if let Some(indicator) = &mut self.indicator {
                            indicator.update_direction(velocity);
                        }
                    }
                    (Effect::None, Task::none())
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    (Effect::None, Task::none())
                }
                _ => (Effect::None, Task::none()),
            },
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_button_pressed(
        &mut self,
        button: mouse::Button,
        position: Point,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        match self.session.on_press(button, position, now) {
            Some(PressAction::Started) => {
                // A restart replaces the marker rather than stacking a
                // second one.
                self.indicator = Some(Indicator::new(position));
                (Effect::SessionStarted, Task::none())
            }
            Some(PressAction::Stopped) => {
                self.indicator = None;
                (Effect::SessionEnded, Task::none())
            }
            None => (Effect::None, Task::none()),
        }
    }

    fn handle_button_released(
        &mut self,
        button: mouse::Button,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        let release = self.session.on_release(button, now);

        // The click notification fires after the full press+release cycle,
        // matching the platform ordering the session expects.
        let click_ended_session = self.session.on_click(button);

        if click_ended_session || release == Some(ReleaseAction::Stopped) {
            self.indicator = None;
            (Effect::SessionEnded, Task::none())
        } else if release == Some(ReleaseAction::Promoted) {
            (Effect::SessionPromoted, Task::none())
        } else {
            (Effect::None, Task::none())
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
