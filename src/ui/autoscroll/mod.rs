// SPDX-License-Identifier: MPL-2.0
//! Middle-click autoscroll for a document view.
//!
//! The component follows the "state down, messages up" pattern: raw mouse
//! events flow in through [`component::Message::RawEvent`], the
//! [`session::Session`] state machine decides what they mean, and scroll
//! tasks flow back out to the document scrollable once per animation tick.
//!
//! - [`session`] - The scroll session state machine (press, move, release,
//!   click, toggle-mode classification)
//! - [`indicator`] - Direction classification and the canvas-drawn session
//!   marker
//! - [`component`] - The Iced-facing orchestrator wiring events, session,
//!   indicator, and scroll tasks together

pub mod component;
pub mod indicator;
pub mod session;

pub use component::State;
pub use indicator::{Direction, Indicator};
pub use session::{Session, Tuning};
