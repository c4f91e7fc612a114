// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Mouse events are routed to the autoscroll component regardless of whether
//! a widget captured them, so the component observes presses and moves
//! before the document content can swallow them. The frame tick subscription
//! exists only while a scroll session is active.

use super::Message;
use crate::ui::autoscroll::component;
use iced::{event, Subscription};

/// Routes raw mouse events to the autoscroll component.
///
/// The capture status is deliberately ignored: the scrollable underneath
/// reports pointer events inside it as captured, and the component must see
/// them anyway to steer the session.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match &event {
        event::Event::Mouse(_) => Some(Message::Autoscroll(component::Message::RawEvent {
            window: window_id,
            event: event.clone(),
        })),
        _ => None,
    })
}

/// Creates the frame tick subscription driving the scroll animation.
pub fn create_tick_subscription(autoscroll: &component::State) -> Subscription<Message> {
    autoscroll.subscription().map(Message::Autoscroll)
}
