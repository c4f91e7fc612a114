// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the autoscroll component.
//!
//! The `App` struct wires the autoscroll component into the Iced runtime:
//! raw mouse events flow in through the event subscription, scroll tasks
//! flow out to the document scrollable, and session transitions are logged
//! here so user-facing behavior is auditable from one place.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::ui::autoscroll::{component, session};
use iced::{Element, Subscription, Task};
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;

/// Root Iced application state.
pub struct App {
    autoscroll: component::State,
}

/// Builds the window settings.
fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let tuning = session::Tuning::new(
            flags.sensitivity.unwrap_or(session::DEFAULT_SENSITIVITY),
            flags
                .toggle_ms
                .map(Duration::from_millis)
                .unwrap_or(session::DEFAULT_TOGGLE_THRESHOLD),
        );

        let app = App {
            autoscroll: component::State::new(tuning),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("iced_drift")
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(&self.autoscroll);

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Autoscroll(msg) => {
                let (effect, task) = self.autoscroll.handle_message(msg);

                match effect {
                    component::Effect::SessionStarted => {
                        log::debug!("scroll session started");
                    }
                    component::Effect::SessionPromoted => {
                        log::debug!("scroll session promoted to toggle mode");
                    }
                    component::Effect::SessionEnded => {
                        log::debug!("scroll session ended");
                    }
                    component::Effect::None => {}
                }

                task.map(Message::Autoscroll)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            autoscroll: &self.autoscroll,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_flags_tune_the_session() {
        let (app, _task) = App::new(Flags {
            sensitivity: Some(0.5),
            toggle_ms: Some(100),
        });

        let tuning = app.autoscroll.session().tuning();
        assert!((tuning.sensitivity() - 0.5).abs() < 1e-4);
        assert_eq!(tuning.toggle_threshold(), Duration::from_millis(100));
    }

    #[test]
    fn missing_flags_fall_back_to_defaults() {
        let (app, _task) = App::new(Flags::default());

        let tuning = app.autoscroll.session().tuning();
        assert!((tuning.sensitivity() - session::DEFAULT_SENSITIVITY).abs() < 1e-4);
        assert_eq!(
            tuning.toggle_threshold(),
            session::DEFAULT_TOGGLE_THRESHOLD
        );
    }
}
